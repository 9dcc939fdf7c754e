//! Plain-text rendering of a [`RenderModel`].

use crate::model::{ActionPlan, BreachList, RenderModel};
use std::fmt;

impl fmt::Display for RenderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exposure Score: {}", self.score)?;
        writeln!(f, "Risk Level: {}", self.risk_label)?;
        writeln!(f, "Scanned: {}", self.scanned_at)?;

        writeln!(f)?;
        writeln!(f, "Data Exposure Breakdown")?;
        if self.categories.is_empty() {
            writeln!(f, "  No exposure categories found")?;
        }
        for category in &self.categories {
            writeln!(f, "  [{}] {}", category.tier, category.name)?;
            if !category.explanation.is_empty() {
                writeln!(f, "      {}", category.explanation)?;
            }
            if !category.platforms.is_empty() {
                writeln!(f, "      Platforms: {}", category.platforms.join(", "))?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Known Breaches")?;
        match &self.breaches {
            BreachList::NoneKnown => writeln!(f, "  No known breaches")?,
            BreachList::Breaches(breaches) => {
                for breach in breaches {
                    writeln!(f, "  {} ({})", breach.name, breach.date)?;
                    if !breach.data_exposed.is_empty() {
                        writeln!(f, "      Exposed: {}", breach.data_exposed.join(", "))?;
                    }
                    writeln!(f, "      Action: {}", breach.action_required)?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "Recommended Actions")?;
        match &self.actions {
            ActionPlan::NoRecommendedActions => writeln!(f, "  No recommended actions")?,
            ActionPlan::Actions(actions) => {
                for action in actions {
                    writeln!(f, "  {}. {}", action.priority, action.action)?;
                    if !action.platforms.is_empty() {
                        writeln!(f, "      Platforms: {}", action.platforms.join(", "))?;
                    }
                    writeln!(f, "      Estimated time: {}", action.estimated_time)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::present;
    use footprint_core::ScanResponse;

    #[test]
    fn test_text_report() {
        let response: ScanResponse = serde_json::from_value(serde_json::json!({
            "exposure_score": 7.3,
            "risk_level": "high",
            "categories": [
                {"name": "Social Media", "platforms": ["X"], "risk_level": "medium", "explanation": "..."}
            ],
            "breaches": [],
            "cleanup_plan": [
                {"priority": 1, "action": "Delete old account", "platforms": ["X"], "estimated_time": "10m"}
            ],
            "scan_timestamp": "2024-01-01T00:00:00Z"
        }))
        .expect("decode fixture");

        let text = present(&response).to_string();
        let expected = "\
Exposure Score: 7.3
Risk Level: HIGH
Scanned: 2024-01-01 00:00 UTC

Data Exposure Breakdown
  [medium] Social Media
      ...
      Platforms: X

Known Breaches
  No known breaches

Recommended Actions
  1. Delete old account
      Platforms: X
      Estimated time: 10m
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_report_empty_plan() {
        let response: ScanResponse = serde_json::from_value(serde_json::json!({
            "exposure_score": 0,
            "risk_level": "low",
            "categories": [],
            "breaches": [
                {"name": "OldLeak", "data_exposed": ["email", "username"], "action_required": "Change password"}
            ],
            "cleanup_plan": [],
            "scan_timestamp": "2024-01-01T00:00:00Z"
        }))
        .expect("decode fixture");

        let text = present(&response).to_string();
        assert!(text.contains("Exposure Score: 0.0"));
        assert!(text.contains("No exposure categories found"));
        assert!(text.contains("  OldLeak (date unknown)\n      Exposed: email, username"));
        assert!(text.contains("Recommended Actions\n  No recommended actions\n"));
    }
}
