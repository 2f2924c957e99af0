use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ListingEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ListingEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs the three phases in order and returns a description of where
    /// the listing was written ("stdout" or a file path).
    pub async fn run(&self) -> Result<String> {
        tracing::debug!("Starting listing run");
        self.monitor.log_stats("Startup");

        // Extract
        let entries = self.pipeline.extract().await?;
        tracing::debug!("Discovered {} entries", entries.len());
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(entries).await?;
        tracing::debug!("Rendered {} links", result.links.len());
        self.monitor.log_stats("Transform");

        // Load
        let destination = self.pipeline.load(result).await?;
        tracing::debug!("Listing written to: {}", destination);
        self.monitor.log_final_stats();

        Ok(destination)
    }
}
