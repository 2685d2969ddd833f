pub mod id;
pub mod span;
