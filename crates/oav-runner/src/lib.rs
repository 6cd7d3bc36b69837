pub mod config;
pub mod report;
pub mod runner;
pub mod scenario;

pub use config::*;
pub use report::*;
pub use runner::*;
