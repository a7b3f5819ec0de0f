use crate::args::CliArgs;
use anyhow::{Context, Result};
use naive_bayes::NaiveBayesConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    // Engine parameters
    pub alpha: f64,            // 1.0
    pub epsilon: f64,          // 1e-10
    pub top_n: usize,          // 5
    pub high_threshold: f64,   // 40.0
    pub medium_threshold: f64, // 20.0

    // Optional JSON registry, built-in data when unset
    pub knowledge_base_path: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &str, default: &str| -> Result<f64> {
            var(key)
                .unwrap_or_else(|| default.to_string())
                .trim()
                .parse()
                .with_context(|| format!("{key} must be a number"))
        };

        let config = Self {
            alpha: parsed("NB_ALPHA", "1.0")?,
            epsilon: parsed("NB_EPSILON", "1e-10")?,
            top_n: var("NB_TOP_N")
                .unwrap_or_else(|| "5".to_string())
                .trim()
                .parse()
                .context("NB_TOP_N must be a positive integer")?,
            high_threshold: parsed("NB_HIGH_THRESHOLD", "40.0")?,
            medium_threshold: parsed("NB_MEDIUM_THRESHOLD", "20.0")?,

            knowledge_base_path: var("KNOWLEDGE_BASE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        };

        Ok(config)
    }

    /// Command-line flags take precedence over the environment
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(path) = &args.kb_path {
            self.knowledge_base_path = Some(path.clone());
        }
        if let Some(top) = args.top {
            self.top_n = top;
        }
    }

    /// Validated engine parameters
    pub fn engine_config(&self) -> Result<NaiveBayesConfig> {
        NaiveBayesConfig::new(
            self.alpha,
            self.epsilon,
            self.top_n,
            self.high_threshold,
            self.medium_threshold,
        )
        .context("invalid Naive Bayes configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_engine_defaults() {
        let config = CliConfig::from_vars(vars(&[])).unwrap();

        assert_eq!(config.engine_config().unwrap(), NaiveBayesConfig::default());
        assert!(config.knowledge_base_path.is_none());
    }

    #[test]
    fn test_reads_overrides() {
        let config = CliConfig::from_vars(vars(&[
            ("NB_ALPHA", "0.5"),
            ("NB_TOP_N", " 3 "),
            ("KNOWLEDGE_BASE_PATH", "/etc/symptobayes/kb.json"),
        ]))
        .unwrap();

        assert_relative_eq!(config.alpha, 0.5);
        assert_eq!(config.top_n, 3);
        assert_eq!(
            config.knowledge_base_path,
            Some(PathBuf::from("/etc/symptobayes/kb.json"))
        );
    }

    #[test]
    fn test_blank_knowledge_base_path_means_builtin() {
        let config = CliConfig::from_vars(vars(&[("KNOWLEDGE_BASE_PATH", "  ")])).unwrap();
        assert!(config.knowledge_base_path.is_none());
    }

    #[test]
    fn test_rejects_unparseable_numbers() {
        let err = CliConfig::from_vars(vars(&[("NB_ALPHA", "lots")])).unwrap_err();
        assert!(err.to_string().contains("NB_ALPHA"));

        assert!(CliConfig::from_vars(vars(&[("NB_TOP_N", "-1")])).is_err());
    }

    #[test]
    fn test_flags_override_env() {
        let mut config = CliConfig::from_vars(vars(&[
            ("NB_TOP_N", "4"),
            ("KNOWLEDGE_BASE_PATH", "/etc/symptobayes/kb.json"),
        ]))
        .unwrap();
        let args =
            CliArgs::parse(["--top", "2", "--kb", "local.json", "--symptoms", "demam"]).unwrap();
        config.apply_args(&args);

        assert_eq!(config.top_n, 2);
        assert_eq!(config.knowledge_base_path, Some(PathBuf::from("local.json")));
        assert_eq!(config.engine_config().unwrap().max_results, 2);
    }

    #[test]
    fn test_absent_flags_keep_env() {
        let mut config = CliConfig::from_vars(vars(&[("NB_TOP_N", "4")])).unwrap();
        config.apply_args(&CliArgs::parse(["--symptoms", "demam"]).unwrap());

        assert_eq!(config.top_n, 4);
        assert!(config.knowledge_base_path.is_none());
    }

    #[test]
    fn test_engine_config_validates() {
        let config = CliConfig::from_vars(vars(&[("NB_TOP_N", "0")])).unwrap();
        assert!(config.engine_config().is_err());
    }
}
