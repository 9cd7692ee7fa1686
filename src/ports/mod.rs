//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the web adapter into the application
//! - Outbound: Called by the application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::StatusPort;
pub use outbound::RowSource;
