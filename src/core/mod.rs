pub mod engine;

pub use crate::domain::model::{ExampleEntry, LinkedExample, ListingResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
