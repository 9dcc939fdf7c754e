//! Render model: what a completed scan looks like on screen.

use crate::tier::RiskTier;
use footprint_core::{BreachInfo, CleanupAction, ExposureCategory, ScanResponse};
use serde::Serialize;

/// Text shown for a breach without a date.
pub const UNKNOWN_DATE: &str = "date unknown";

/// Display-ready projection of a [`ScanResponse`].
///
/// Sequences keep the engine's order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    /// Exposure score with one decimal place
    pub score: String,
    /// Overall risk label, uppercased
    pub risk_label: String,
    /// Overall risk tier
    pub risk_tier: RiskTier,
    /// Per-category breakdown
    pub categories: Vec<CategoryView>,
    /// Known breaches
    pub breaches: BreachList,
    /// Remediation plan
    pub actions: ActionPlan,
    /// Scan time, normalised to UTC when parseable, otherwise as sent
    pub scanned_at: String,
}

/// One row of the exposure breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    /// Category name
    pub name: String,
    /// Presentation tier of the category's risk label
    pub tier: RiskTier,
    /// The label exactly as the engine sent it
    pub label: String,
    /// Why this category matters
    pub explanation: String,
    /// Platforms, in engine order
    pub platforms: Vec<String>,
}

/// One known breach.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreachView {
    /// Breach name
    pub name: String,
    /// Breach date, or [`UNKNOWN_DATE`]
    pub date: String,
    /// Exposed data fields
    pub data_exposed: Vec<String>,
    /// What to do about it
    pub action_required: String,
}

/// Breach section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum BreachList {
    /// The engine reported no breaches
    NoneKnown,
    /// Breaches in engine order
    Breaches(Vec<BreachView>),
}

/// One recommended action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionView {
    /// Display priority as sent by the engine
    pub priority: i64,
    /// What to do
    pub action: String,
    /// Platforms the action applies to
    pub platforms: Vec<String>,
    /// Time estimate
    pub estimated_time: String,
}

/// Cleanup section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum ActionPlan {
    /// The plan was empty
    NoRecommendedActions,
    /// Actions in engine order (never re-sorted by priority)
    Actions(Vec<ActionView>),
}

impl ActionPlan {
    /// Number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::NoRecommendedActions => 0,
            Self::Actions(actions) => actions.len(),
        }
    }

    /// Whether the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Project a scan response into its render model.
///
/// Pure: no I/O, no state, never fails. Nothing is sorted or filtered.
#[must_use]
pub fn present(response: &ScanResponse) -> RenderModel {
    RenderModel {
        score: format_score(response.exposure_score),
        risk_label: response.risk_level.trim().to_uppercase(),
        risk_tier: RiskTier::classify(&response.risk_level),
        categories: response.categories.iter().map(category_view).collect(),
        breaches: if response.breaches.is_empty() {
            BreachList::NoneKnown
        } else {
            BreachList::Breaches(response.breaches.iter().map(breach_view).collect())
        },
        actions: if response.cleanup_plan.is_empty() {
            ActionPlan::NoRecommendedActions
        } else {
            ActionPlan::Actions(response.cleanup_plan.iter().map(action_view).collect())
        },
        scanned_at: response.scanned_at().map_or_else(
            || response.scan_timestamp.clone(),
            |dt| dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        ),
    }
}

/// Format a score with exactly one decimal place.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

fn category_view(category: &ExposureCategory) -> CategoryView {
    CategoryView {
        name: category.name.clone(),
        tier: RiskTier::classify(&category.risk_level),
        label: category.risk_level.clone(),
        explanation: category.explanation.clone(),
        platforms: category.platforms.clone(),
    }
}

fn breach_view(breach: &BreachInfo) -> BreachView {
    BreachView {
        name: breach.name.clone(),
        date: breach
            .breach_date
            .clone()
            .filter(|date| !date.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
        data_exposed: breach.data_exposed.clone(),
        action_required: breach.action_required.clone(),
    }
}

fn action_view(action: &CleanupAction) -> ActionView {
    ActionView {
        priority: action.priority,
        action: action.action.clone(),
        platforms: action.platforms.clone(),
        estimated_time: action.estimated_time.clone(),
    }
}
