// Service exports
pub mod dataset;

pub use dataset::{DatasetLoader, DatasetSource, DatasetError, parse_dataset};
