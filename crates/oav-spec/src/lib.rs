pub mod digest;
pub mod loader;

pub use digest::*;
pub use loader::*;
