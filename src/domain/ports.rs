use crate::domain::model::{ExampleEntry, ListingResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn dir(&self) -> &str;
    fn entry_file(&self) -> &str;
    fn link_prefix(&self) -> &str;
    fn sort_entries(&self) -> bool;
    fn output_format(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn only_dirs(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ExampleEntry>>;
    async fn transform(&self, entries: Vec<ExampleEntry>) -> Result<ListingResult>;
    async fn load(&self, result: ListingResult) -> Result<String>;
}
