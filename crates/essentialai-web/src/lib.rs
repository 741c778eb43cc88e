//! essentialai-web — Web front end for the essential oil activity predictor.
//! Provides:
//!   - Landing page
//!   - Slider input form backed by the configured predictor
//!   - Results view with confidence bands and interpretation
//!   - Classic numeric form calling the hosted model directly
//!   - JSON API

pub mod router;
pub mod handlers;
pub mod state;
pub mod session;
