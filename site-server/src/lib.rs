//! # Site Server
//!
//! Static delivery of the built site bundle. There is no server-side logic:
//! every path is either a file under the dist directory or the single-page
//! app's `index.html`.

pub mod config;
pub mod error;
pub mod server;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use server::{build_router, start_server};
