pub mod adapter;

pub use adapter::SparkAdapter;
