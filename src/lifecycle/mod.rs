//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Register API → Bind listener → Serve
//!
//! Shutdown:
//!     signals.rs (SIGTERM/SIGINT) → Shutdown::trigger
//!     → HttpServer stops accepting and drains in-flight requests
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownSignal};
pub use signals::wait_for_signal;
