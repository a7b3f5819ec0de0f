use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Observable symptom from the fixed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    /// Stable key used in evidence sets (e.g. "sesak-napas")
    pub id: String,
    /// Display label
    pub label: String,
}

impl Symptom {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Candidate disease in the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Characteristic symptom ids, a subset of the vocabulary
    pub symptoms: Vec<String>,
    /// Relative prior weight in (0, 1); priors across diseases need not sum to 1
    pub prior: f64,
}

impl Disease {
    pub fn has_symptom(&self, symptom_id: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom_id)
    }
}

/// Qualitative band derived from a posterior percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Percentage above which a result is `High`
    pub const DEFAULT_HIGH_THRESHOLD: f64 = 40.0;
    /// Percentage above which a result is `Medium`
    pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 20.0;

    /// Band for a percentage using the default thresholds.
    /// Boundaries are strict: exactly 40.0 is `Medium`, exactly 20.0 is `Low`.
    pub fn from_percent(percent: f64) -> Self {
        Self::with_thresholds(
            percent,
            Self::DEFAULT_HIGH_THRESHOLD,
            Self::DEFAULT_MEDIUM_THRESHOLD,
        )
    }

    pub fn with_thresholds(percent: f64, high: f64, medium: f64) -> Self {
        match percent {
            p if p > high => ConfidenceLevel::High,
            p if p > medium => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }

    /// Indonesian label shown to end users
    pub fn to_label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "Tinggi",
            ConfidenceLevel::Medium => "Sedang",
            ConfidenceLevel::Low => "Rendah",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored disease for one inference call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub disease_id: String,
    pub name: String,
    pub description: String,
    /// Normalized posterior, percentage scale (0-100)
    pub probability: f64,
    pub confidence: ConfidenceLevel,
}

impl DiagnosisResult {
    pub fn new(disease: &Disease, probability: f64, confidence: ConfidenceLevel) -> Self {
        Self {
            disease_id: disease.id.clone(),
            name: disease.name.clone(),
            description: disease.description.clone(),
            probability,
            confidence,
        }
    }
}

/// Symptom ids selected for a single inference request.
///
/// Duplicates collapse. Ids are not checked against any vocabulary here;
/// engines ignore the ones they do not know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evidence {
    symptoms: BTreeSet<String>,
}

impl Evidence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symptom_id: impl Into<String>) -> bool {
        self.symptoms.insert(symptom_id.into())
    }

    pub fn contains(&self, symptom_id: &str) -> bool {
        self.symptoms.contains(symptom_id)
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symptoms.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Evidence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symptoms: iter.into_iter().map(Into::into).collect(),
        }
    }
}
