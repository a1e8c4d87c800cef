use clap::{Parser, Subcommand};

use restdoc::api::{Documentation, HttpMethod};

#[derive(Parser)]
#[command(name = "restdoc-cli")]
#[command(about = "Inspect the documentation endpoint of a running API", long_about = None)]
struct Cli {
    /// Full URL of the documentation endpoint.
    #[arg(short, long, default_value = "http://localhost:8080/api/docs")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full documentation tree
    Dump,
    /// List routes and their registered methods
    Routes {
        /// Only show routes registered for this method (GET, POST, PUT, DELETE)
        #[arg(short, long)]
        method: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let res = reqwest::get(&cli.url).await?;
    let status = res.status();
    if !status.is_success() {
        let text = res.text().await.unwrap_or_default();
        return Err(format!("documentation endpoint returned status {}: {}", status, text).into());
    }
    let docs: Documentation = res.json().await?;

    match cli.command {
        Commands::Dump => {
            println!("{}", docs.to_json_pretty()?);
        }
        Commands::Routes { method } => {
            let filter = method.as_deref().map(str::parse::<HttpMethod>).transpose()?;
            for line in route_lines(&docs, filter) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// One line per route: path, methods, description.
fn route_lines(docs: &Documentation, filter: Option<HttpMethod>) -> Vec<String> {
    docs.iter()
        .filter(|(_, route)| filter.map_or(true, |m| route.endpoints.contains_key(&m)))
        .map(|(path, route)| {
            let methods: Vec<&str> = route.endpoints.keys().map(|m| m.as_str()).collect();
            format!("{:<32} {:<24} {}", path, methods.join(","), route.description)
        })
        .collect()
}
