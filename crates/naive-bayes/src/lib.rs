//! Naive Bayes diagnosis engine
//!
//! Scores every registered disease against a set of observed symptoms in log
//! space, normalizes the scores into a posterior distribution with the
//! log-sum-exp identity, and returns the top-ranked diseases with a
//! qualitative confidence band.

pub mod config;
pub mod engine;
pub mod math;

pub use config::NaiveBayesConfig;
pub use engine::NaiveBayesDiagnoser;
pub use math::log_sum_exp;
