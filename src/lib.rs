//! Scoring engine for the weight-loss diagnosis quiz.
//!
//! [`scoring::calculate_profile`] turns a question catalog and a set of raw
//! answers into a [`scoring::Profile`]: per-category scores, an overall risk
//! level and the main factors holding progress back.

pub mod catalog;
pub mod config;
pub mod output;
pub mod quiz;
pub mod scoring;
pub mod telemetry;
