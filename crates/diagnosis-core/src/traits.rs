use crate::{DiagnosisResult, Evidence};

/// Trait for engines that rank diseases from observed symptoms.
///
/// Implementations are pure: the same evidence against the same knowledge
/// base always yields the same ranking, and an empty evidence set yields no
/// results.
pub trait Diagnoser: Send + Sync {
    fn diagnose(&self, evidence: &Evidence) -> Vec<DiagnosisResult>;
}
