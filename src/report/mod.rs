pub mod aggregator;
pub mod writer;

pub use aggregator::{aggregate, normalize, rank, ResultAggregator};
pub use writer::{render, write_report};
