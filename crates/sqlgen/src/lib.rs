pub mod ast;
pub mod build;
pub mod dialect;
pub mod error;
pub mod macros;
pub mod render;
pub mod types;
