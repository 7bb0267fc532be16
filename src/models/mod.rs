//! Data models

pub mod options;
pub mod employee;
pub mod prediction;

pub use options::*;
pub use employee::*;
pub use prediction::*;
