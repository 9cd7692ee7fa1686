//! Infrastructure adapters. Implement ports.
//!
//! Sheet sources, web front end, terminal banner. Map errors to DomainError.

pub mod sheets;
pub mod ui;
pub mod web;
