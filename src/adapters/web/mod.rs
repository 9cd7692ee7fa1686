//! Web front end. Renders the status snapshot as HTML and JSON.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod template;
pub mod view;

pub use error::WebError;
pub use handlers::AppState;
pub use router::build_router;
pub use server::{ServerConfig, start_server};
