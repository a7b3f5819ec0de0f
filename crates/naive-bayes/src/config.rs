use diagnosis_core::{ConfidenceLevel, DiagnosisError};
use serde::{Deserialize, Serialize};

/// Tuning parameters for [`crate::NaiveBayesDiagnoser`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesConfig {
    /// Laplace (add-alpha) smoothing for p(symptom | disease)
    pub alpha: f64,

    /// Added before every logarithm so that ln(0) never happens
    pub epsilon: f64,

    /// Number of ranked results returned by `diagnose`
    pub max_results: usize,

    /// Posterior percentage above which confidence is high
    pub high_threshold: f64,

    /// Posterior percentage above which confidence is medium
    pub medium_threshold: f64,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            epsilon: 1e-10,
            max_results: 5,
            high_threshold: ConfidenceLevel::DEFAULT_HIGH_THRESHOLD,
            medium_threshold: ConfidenceLevel::DEFAULT_MEDIUM_THRESHOLD,
        }
    }
}

impl NaiveBayesConfig {
    pub fn new(
        alpha: f64,
        epsilon: f64,
        max_results: usize,
        high_threshold: f64,
        medium_threshold: f64,
    ) -> Result<Self, DiagnosisError> {
        let config = Self {
            alpha,
            epsilon,
            max_results,
            high_threshold,
            medium_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DiagnosisError> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(invalid("alpha must be a positive finite number"));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(invalid("epsilon must be a non-negative finite number"));
        }
        if self.max_results == 0 {
            return Err(invalid("max_results must be at least 1"));
        }
        if !self.high_threshold.is_finite() || !self.medium_threshold.is_finite() {
            return Err(invalid("confidence thresholds must be finite"));
        }
        if self.medium_threshold > self.high_threshold {
            return Err(invalid("medium_threshold must not exceed high_threshold"));
        }
        Ok(())
    }

    /// Confidence band for a posterior percentage
    pub fn confidence_for(&self, percent: f64) -> ConfidenceLevel {
        ConfidenceLevel::with_thresholds(percent, self.high_threshold, self.medium_threshold)
    }
}

fn invalid(message: &str) -> DiagnosisError {
    DiagnosisError::InvalidConfig(message.to_string())
}
