use std::sync::Arc;

use async_trait::async_trait;
use emissions::baseline::{self, BaselineUsage};
use tracing::instrument;

use crate::domain::{
    models::FootprintReport,
    ports::{inbound::FootprintService, outbound::UsageInsightsProvider},
    InsightError,
};

/// Implementation of the FootprintService inbound port.
///
/// The number comes from the flat baseline formula; the feedback is
/// delegated to a UsageInsightsProvider.
pub struct FootprintServiceImpl<P> {
    insights: Arc<P>,
}

impl<P> FootprintServiceImpl<P> {
    pub fn new(insights: Arc<P>) -> Self {
        Self { insights }
    }
}

#[async_trait]
impl<P: UsageInsightsProvider> FootprintService for FootprintServiceImpl<P> {
    #[instrument(skip(self))]
    async fn footprint(&self, usage: &BaselineUsage) -> Result<FootprintReport, InsightError> {
        let base_footprint = baseline::base_footprint(usage);
        let insights = self.insights.insights(usage).await?;

        Ok(FootprintReport {
            base_footprint,
            insights,
        })
    }
}

#[cfg(test)]
mod tests {
    use emissions::baseline::{RiskLevel, UsageInsights};

    use super::*;

    struct FixedInsights;

    #[async_trait]
    impl UsageInsightsProvider for FixedInsights {
        async fn insights(&self, _usage: &BaselineUsage) -> Result<UsageInsights, InsightError> {
            Ok(UsageInsights {
                suggestion: "fixed".to_string(),
                risk_level: RiskLevel::High,
            })
        }
    }

    struct FailingInsights;

    #[async_trait]
    impl UsageInsightsProvider for FailingInsights {
        async fn insights(&self, _usage: &BaselineUsage) -> Result<UsageInsights, InsightError> {
            Err(InsightError::InvalidUsage)
        }
    }

    #[tokio::test]
    async fn combines_formula_with_provider() {
        let service = FootprintServiceImpl::new(Arc::new(FixedInsights));

        let report = service
            .footprint(&BaselineUsage::new(100.0, 50.0, 10.0))
            .await
            .unwrap();

        assert_eq!(report.base_footprint, 58.0);
        assert_eq!(report.insights.suggestion, "fixed");
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let service = FootprintServiceImpl::new(Arc::new(FailingInsights));

        let result = service.footprint(&BaselineUsage::default()).await;
        assert!(matches!(result, Err(InsightError::InvalidUsage)));
    }
}
