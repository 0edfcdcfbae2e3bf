use async_trait::async_trait;
use emissions::baseline::{BaselineUsage, UsageInsights};

use crate::domain::InsightError;

/// Produces the feedback attached to a usage-based footprint.
///
/// Only a rule-based implementation exists. The port keeps the endpoint
/// independent of how the feedback is made.
#[async_trait]
pub trait UsageInsightsProvider: Send + Sync + 'static {
    async fn insights(&self, usage: &BaselineUsage) -> Result<UsageInsights, InsightError>;
}
