// Core data models for taskpad

pub mod task;
pub mod filter;
pub mod stats;

pub use task::*;
pub use filter::*;
pub use stats::*;
