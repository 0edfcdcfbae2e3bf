mod insights;

pub use insights::RuleBasedInsights;
