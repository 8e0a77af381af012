//! Data models

pub mod model_record;

pub use model_record::*;
