//! Footprint Report - turns a completed scan into something a person can read.
//!
//! [`present`] is a pure projection of a `ScanResponse`:
//!
//! - the exposure score with one decimal place and the risk label in uppercase
//! - every category classified into a [`RiskTier`] (unknown labels → `Low`)
//! - categories, breaches and the cleanup plan in the engine's order
//! - an empty cleanup plan as [`ActionPlan::NoRecommendedActions`]
//!
//! The resulting [`RenderModel`] implements `Display` for a plain-text report
//! and `Serialize` for machine consumers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod model;
mod text;
pub mod tier;

pub use model::{
    format_score, present, ActionPlan, ActionView, BreachList, BreachView, CategoryView,
    RenderModel, UNKNOWN_DATE,
};
pub use tier::RiskTier;
