use diagnosis_core::{ConfidenceLevel, Diagnoser, Evidence, KnowledgeBase};
use naive_bayes::NaiveBayesDiagnoser;
use proptest::prelude::*;

fn vocabulary() -> Vec<String> {
    KnowledgeBase::builtin()
        .list_symptoms()
        .iter()
        .map(|s| s.id.clone())
        .collect()
}

/// Non-empty subsets of the built-in vocabulary
fn known_evidence() -> impl Strategy<Value = Evidence> {
    proptest::sample::subsequence(vocabulary(), 1..=18)
        .prop_map(|ids| ids.into_iter().collect::<Evidence>())
}

proptest! {
    #[test]
    fn posterior_sums_to_one_hundred(evidence in known_evidence()) {
        let diagnoser = NaiveBayesDiagnoser::builtin();
        let total: f64 = diagnoser.posterior(&evidence).iter().map(|r| r.probability).sum();
        prop_assert!((total - 100.0).abs() < 1e-6, "total = {}", total);
    }

    #[test]
    fn results_sorted_and_truncated(evidence in known_evidence()) {
        let results = NaiveBayesDiagnoser::builtin().diagnose(&evidence);

        prop_assert_eq!(results.len(), 5);
        for pair in results.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn probabilities_within_percentage_range(evidence in known_evidence()) {
        for r in NaiveBayesDiagnoser::builtin().posterior(&evidence) {
            prop_assert!((0.0..=100.0).contains(&r.probability), "{} = {}", r.disease_id, r.probability);
        }
    }

    #[test]
    fn confidence_matches_thresholds(evidence in known_evidence()) {
        for r in NaiveBayesDiagnoser::builtin().diagnose(&evidence) {
            let expected = if r.probability > 40.0 {
                ConfidenceLevel::High
            } else if r.probability > 20.0 {
                ConfidenceLevel::Medium
            } else {
                ConfidenceLevel::Low
            };
            prop_assert_eq!(r.confidence, expected);
        }
    }

    #[test]
    fn diagnose_is_deterministic(evidence in known_evidence()) {
        let diagnoser = NaiveBayesDiagnoser::builtin();
        prop_assert_eq!(diagnoser.diagnose(&evidence), diagnoser.diagnose(&evidence));
    }

    #[test]
    fn unknown_ids_do_not_change_ranking(
        evidence in known_evidence(),
        junk in proptest::collection::vec("zz-[a-z]{1,8}", 1..4),
    ) {
        let diagnoser = NaiveBayesDiagnoser::builtin();
        let mut noisy = evidence.clone();
        for id in junk {
            noisy.insert(id);
        }
        prop_assert_eq!(diagnoser.diagnose(&noisy), diagnoser.diagnose(&evidence));
    }

    #[test]
    fn results_come_from_registry(evidence in known_evidence()) {
        let kb = KnowledgeBase::builtin();
        let results = NaiveBayesDiagnoser::builtin().diagnose(&evidence);

        let mut seen = std::collections::HashSet::new();
        for r in &results {
            prop_assert!(kb.disease(&r.disease_id).is_some());
            prop_assert!(seen.insert(r.disease_id.clone()), "duplicate {}", r.disease_id);
        }
    }
}
