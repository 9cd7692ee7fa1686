//! Cross-cutting pieces shared by main and adapters.

pub mod config;
