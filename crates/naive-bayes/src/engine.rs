use diagnosis_core::{DiagnosisResult, Diagnoser, Disease, Evidence, KnowledgeBase};

use crate::config::NaiveBayesConfig;
use crate::math::log_sum_exp;

/// Naive Bayes scorer over a read-only knowledge base.
///
/// Every symptom of the vocabulary is a binary feature: observed symptoms
/// contribute `ln p(s|D)`, unobserved ones contribute `ln(1 - p(s|D))`.
/// Holds only shared references, so one instance can serve any number of
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct NaiveBayesDiagnoser<'kb> {
    knowledge_base: &'kb KnowledgeBase,
    config: NaiveBayesConfig,
}

impl NaiveBayesDiagnoser<'static> {
    /// Diagnoser over the compiled-in registry with default parameters
    pub fn builtin() -> Self {
        Self::new(KnowledgeBase::builtin())
    }
}

impl<'kb> NaiveBayesDiagnoser<'kb> {
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        Self::with_config(knowledge_base, NaiveBayesConfig::default())
    }

    pub fn with_config(knowledge_base: &'kb KnowledgeBase, config: NaiveBayesConfig) -> Self {
        Self {
            knowledge_base,
            config,
        }
    }

    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.knowledge_base
    }

    pub fn config(&self) -> &NaiveBayesConfig {
        &self.config
    }

    /// Smoothed p(symptom | disease)
    pub fn symptom_likelihood(&self, symptom_id: &str, disease: &Disease) -> f64 {
        let alpha = self.config.alpha;
        let denominator = disease.symptoms.len() as f64 + 2.0 * alpha;

        if disease.has_symptom(symptom_id) {
            (1.0 + alpha) / denominator
        } else {
            alpha / denominator
        }
    }

    /// Unnormalized log posterior `ln p(D) + Σ_s ln p(s | D)` over the full vocabulary
    pub fn log_score(&self, evidence: &Evidence, disease: &Disease) -> f64 {
        let eps = self.config.epsilon;
        let mut log_prob = (disease.prior + eps).ln();

        for symptom in self.knowledge_base.list_symptoms() {
            let p = self.symptom_likelihood(&symptom.id, disease);
            log_prob += if evidence.contains(&symptom.id) {
                (p + eps).ln()
            } else {
                (1.0 - p + eps).ln()
            };
        }

        log_prob
    }

    /// Normalized posterior for every registered disease, in registry order.
    ///
    /// Percentages sum to 100. Empty evidence yields an empty vector.
    pub fn posterior(&self, evidence: &Evidence) -> Vec<DiagnosisResult> {
        if evidence.is_empty() {
            return Vec::new();
        }

        let unknown: Vec<&str> = evidence
            .iter()
            .filter(|id| !self.knowledge_base.contains_symptom(id))
            .collect();
        if !unknown.is_empty() {
            tracing::warn!("Ignoring unknown symptom ids: {:?}", unknown);
        }

        let diseases = self.knowledge_base.list_diseases();
        let log_probs: Vec<f64> = diseases
            .iter()
            .map(|disease| self.log_score(evidence, disease))
            .collect();
        let log_evidence = log_sum_exp(&log_probs);

        diseases
            .iter()
            .zip(&log_probs)
            .map(|(disease, log_prob)| {
                let percent = (log_prob - log_evidence).exp() * 100.0;
                DiagnosisResult::new(disease, percent, self.config.confidence_for(percent))
            })
            .collect()
    }
}

impl Diagnoser for NaiveBayesDiagnoser<'_> {
    /// Top `max_results` diseases, highest posterior first.
    /// Ties keep registry order.
    fn diagnose(&self, evidence: &Evidence) -> Vec<DiagnosisResult> {
        let mut results = self.posterior(evidence);
        if results.is_empty() {
            return results;
        }

        results.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        results.truncate(self.config.max_results);

        tracing::debug!(
            "Diagnosed {} symptoms: top '{}' at {:.1}%",
            evidence.len(),
            results[0].disease_id,
            results[0].probability
        );

        results
    }
}
