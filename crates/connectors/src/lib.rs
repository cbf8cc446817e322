pub mod capabilities;
pub mod error;
pub mod executor;
pub mod spark;
