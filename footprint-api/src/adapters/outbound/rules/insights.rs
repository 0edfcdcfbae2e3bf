use async_trait::async_trait;
use emissions::baseline::{self, BaselineUsage, UsageInsights};

use crate::domain::{ports::outbound::UsageInsightsProvider, InsightError};

/// Threshold rules on distance and electricity use.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedInsights;

#[async_trait]
impl UsageInsightsProvider for RuleBasedInsights {
    async fn insights(&self, usage: &BaselineUsage) -> Result<UsageInsights, InsightError> {
        let figures = [usage.km_travelled, usage.kwh_used, usage.food_consumption];
        if figures.iter().any(|v| !v.is_finite()) {
            return Err(InsightError::InvalidUsage);
        }

        Ok(baseline::usage_insights(usage))
    }
}

#[cfg(test)]
mod tests {
    use emissions::baseline::RiskLevel;

    use super::*;

    #[tokio::test]
    async fn applies_threshold_rules() {
        let insights = RuleBasedInsights
            .insights(&BaselineUsage::new(100.0, 50.0, 10.0))
            .await
            .unwrap();
        assert_eq!(
            insights.suggestion,
            "Consider using public transport or carpooling to reduce your footprint."
        );
        assert_eq!(insights.risk_level, RiskLevel::Low);
    }

    #[tokio::test]
    async fn rejects_non_finite_usage() {
        let result = RuleBasedInsights
            .insights(&BaselineUsage::new(f64::NAN, 0.0, 0.0))
            .await;
        assert!(matches!(result, Err(InsightError::InvalidUsage)));
    }
}
