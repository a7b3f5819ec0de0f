//! symptobayes: rank likely diseases for a set of observed symptoms.
//!
//! Usage:
//!   cargo run -p diagnosis-cli -- --symptoms demam batuk sesak-napas
//!   cargo run -p diagnosis-cli -- --symptoms mual,muntah,pusing --json
//!   cargo run -p diagnosis-cli -- --list-symptoms

use anyhow::{bail, Context, Result};
use diagnosis_core::{Diagnoser, Evidence, KnowledgeBase};
use naive_bayes::NaiveBayesDiagnoser;
use std::borrow::Cow;

mod args;
mod config;
mod report;

use args::{CliArgs, Command};
use config::CliConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let mut config = CliConfig::from_env()?;
    config.apply_args(&args);

    print!("{}", run(&args, &config)?);
    Ok(())
}

/// Execute one command and return what goes to stdout
fn run(args: &CliArgs, config: &CliConfig) -> Result<String> {
    match args.command {
        Command::Help => Ok(format!("{}\n", args::USAGE)),
        Command::ListSymptoms => Ok(report::render_symptoms(&*load_knowledge_base(config)?)),
        Command::ListDiseases => Ok(report::render_diseases(&*load_knowledge_base(config)?)),
        Command::DumpKnowledgeBase => {
            let kb = load_knowledge_base(config)?;
            Ok(format!("{}\n", serde_json::to_string_pretty(&*kb)?))
        }
        Command::Diagnose => run_diagnosis(&*load_knowledge_base(config)?, config, args),
    }
}

fn load_knowledge_base(config: &CliConfig) -> Result<Cow<'static, KnowledgeBase>> {
    match &config.knowledge_base_path {
        Some(path) => {
            let kb = KnowledgeBase::from_path(path)
                .with_context(|| format!("failed to load knowledge base {}", path.display()))?;
            Ok(Cow::Owned(kb))
        }
        None => Ok(Cow::Borrowed(KnowledgeBase::builtin())),
    }
}

fn run_diagnosis(kb: &KnowledgeBase, config: &CliConfig, args: &CliArgs) -> Result<String> {
    if args.symptoms.is_empty() {
        bail!(
            "{}: {}",
            report::EMPTY_SELECTION,
            report::EMPTY_SELECTION_HINT
        );
    }

    let mut engine_config = config.engine_config()?;
    if args.all {
        engine_config.max_results = kb.list_diseases().len();
    }
    tracing::debug!("Engine configuration: {:?}", engine_config);

    let evidence: Evidence = args.symptoms.iter().map(String::as_str).collect();
    let diagnoser = NaiveBayesDiagnoser::with_config(kb, engine_config);
    let results = diagnoser.diagnose(&evidence);

    if args.json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&results)?))
    } else {
        Ok(report::render_results(&results))
    }
}

fn init_tracing() {
    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagnosis_core::DiagnosisResult;

    fn config_with(pairs: &[(&str, &str)]) -> CliConfig {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_vars(|key: &str| {
            pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
        .unwrap()
    }

    fn run_with(argv: &[&str], env: &[(&str, &str)]) -> Result<String> {
        let args = CliArgs::parse(argv.iter().copied())?;
        let mut config = config_with(env);
        config.apply_args(&args);
        run(&args, &config)
    }

    fn parse_results(json: &str) -> Vec<DiagnosisResult> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let err = run_with(&["--symptoms"], &[]).unwrap_err().to_string();

        assert!(err.contains("Pilih minimal satu gejala"));
        assert!(err.contains("Silakan pilih gejala yang Anda alami untuk melakukan diagnosa"));
        assert!(run_with(&[], &[]).is_err());
    }

    #[test]
    fn test_json_output_is_result_vector() {
        let out = run_with(&["--symptoms", "mual,muntah,pusing", "--json"], &[]).unwrap();
        let results = parse_results(&out);

        assert_eq!(results.len(), 5);
        assert_eq!(results[0].disease_id, "migrain");
    }

    #[test]
    fn test_all_scores_every_disease() {
        let out = run_with(&["--symptoms", "demam", "--all", "--json"], &[]).unwrap();
        let results = parse_results(&out);

        assert_eq!(results.len(), 8);
        let total: f64 = results.iter().map(|r| r.probability).sum();
        approx::assert_relative_eq!(total, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_top_flag_overrides_env() {
        let env = [("NB_TOP_N", "4")];

        let out = run_with(&["--symptoms", "demam", "--top", "2", "--json"], &env).unwrap();
        assert_eq!(parse_results(&out).len(), 2);

        let out = run_with(&["--symptoms", "demam", "--json"], &env).unwrap();
        assert_eq!(parse_results(&out).len(), 4);
    }

    #[test]
    fn test_kb_flag_overrides_env() {
        let err = run_with(
            &["--list-symptoms", "--kb", "/missing/from-flag.json"],
            &[("KNOWLEDGE_BASE_PATH", "/missing/from-env.json")],
        )
        .unwrap_err();

        assert!(err.to_string().contains("from-flag.json"));
    }

    #[test]
    fn test_text_report() {
        let out = run_with(&["--symptoms", "batuk-berdarah", "berkeringat-malam"], &[]).unwrap();

        assert!(out.contains(" 1. Tuberkulosis (TBC)"));
        assert!(out.contains("Ditemukan 5 kemungkinan penyakit"));
    }

    #[test]
    fn test_help_and_listings() {
        let help = run_with(&["--help"], &[]).unwrap();
        assert!(help.starts_with("symptobayes"));

        let symptoms = run_with(&["--list-symptoms"], &[]).unwrap();
        assert_eq!(symptoms.lines().count(), 18);

        let dump = run_with(&["--dump-kb"], &[]).unwrap();
        let kb: KnowledgeBase = serde_json::from_str(&dump).unwrap();
        assert_eq!(&kb, KnowledgeBase::builtin());
    }
}
