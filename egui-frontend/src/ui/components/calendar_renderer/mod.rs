pub mod interactions;
pub mod rendering;
pub mod styling;

pub use styling::*;
