pub mod listing_pipeline;

pub use listing_pipeline::ListingPipeline;
