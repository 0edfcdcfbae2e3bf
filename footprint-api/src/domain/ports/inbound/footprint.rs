use async_trait::async_trait;
use emissions::baseline::BaselineUsage;

use crate::domain::{models::FootprintReport, InsightError};

/// Inbound port for the flat usage-based footprint.
#[async_trait]
pub trait FootprintService: Send + Sync + 'static {
    async fn footprint(&self, usage: &BaselineUsage) -> Result<FootprintReport, InsightError>;
}
