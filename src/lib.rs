//! baby-update: current feeding/diaper status from a baby-tracking sheet, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
