//! Rule-driven care guidance: seasonal tips and the weekly routine plan.
//!
//! The seasonal generator evaluates a declarative rules table (embedded
//! TOML) against a texture bucket and a weather snapshot; the routine
//! planner fills fixed blocks from in-code wording tables. Both are pure
//! functions over the texture classified once at normalization.

pub mod routine;
pub mod rules;
pub mod seasonal;
pub mod types;

pub use routine::{weekly_plan, RoutineBlock, RoutineIntensity};
pub use rules::{default_rules, load_rules};
pub use seasonal::seasonal_tips;
pub use types::{AdvisoryTip, CareRules};
