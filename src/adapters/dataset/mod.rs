//! Dataset adapters - Raw table acquisition from files.

mod dataset_file;

pub use dataset_file::{DatasetError, DatasetFile, DatasetFormat};
