//! Indicative sustainability scoring for manufactured products.
//!
//! The [`assessment`] module holds the deterministic scoring engine; [`governor`] holds
//! the per-caller admission window that fronts it. Configuration, telemetry, and error
//! plumbing are shared with the `ecoscore-api` service.

pub mod assessment;
pub mod config;
pub mod error;
pub mod governor;
pub mod telemetry;

pub use assessment::{
    assess_impact, cbam_analysis, AssessmentRequest, AssessmentResult, CbamAnalysis,
    MaterialComposition, ShippingMode,
};
pub use governor::RateGovernor;
