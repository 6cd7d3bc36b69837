pub mod diagnostic;
pub mod document;
pub mod model;

pub use diagnostic::*;
pub use document::*;
pub use model::*;
