use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const USAGE: &str = "\
symptobayes - estimate likely diseases from observed symptoms (Naive Bayes)

Usage:
  symptobayes --symptoms demam batuk sesak-napas
  symptobayes --symptoms mual,muntah,pusing --json
  symptobayes --list-symptoms
  symptobayes --list-diseases
  symptobayes --dump-kb > kb.json

Options:
  --symptoms <id>...   Observed symptom ids (space or comma separated)
  --kb <path>          Load the disease registry from a JSON file
  --top <n>            Number of ranked results (default 5)
  --all                Show the score of every registered disease
  --json               Print results as JSON
  --list-symptoms      Print the symptom vocabulary
  --list-diseases      Print the disease registry
  --dump-kb            Print the active registry as JSON
  -h, --help           Show this help

Environment:
  NB_ALPHA, NB_EPSILON, NB_TOP_N, NB_HIGH_THRESHOLD, NB_MEDIUM_THRESHOLD,
  KNOWLEDGE_BASE_PATH, RUST_LOG, RUST_LOG_FORMAT=json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Diagnose,
    ListSymptoms,
    ListDiseases,
    DumpKnowledgeBase,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: Command,
    pub symptoms: Vec<String>,
    pub kb_path: Option<PathBuf>,
    pub top: Option<usize>,
    pub all: bool,
    pub json: bool,
}

impl CliArgs {
    /// Parse arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        let mut parsed = CliArgs {
            command: Command::Diagnose,
            symptoms: Vec::new(),
            kb_path: None,
            top: None,
            all: false,
            json: false,
        };

        // -h/--help short-circuits before any other argument is validated
        if args.iter().any(|a| a == "-h" || a == "--help") {
            parsed.command = Command::Help;
            return Ok(parsed);
        }

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--list-symptoms" => parsed.command = Command::ListSymptoms,
                "--list-diseases" => parsed.command = Command::ListDiseases,
                "--dump-kb" => parsed.command = Command::DumpKnowledgeBase,
                "--json" => parsed.json = true,
                "--all" => parsed.all = true,
                "--kb" => {
                    i += 1;
                    let path = args
                        .get(i)
                        .filter(|a| !a.starts_with('-'))
                        .context("--kb requires a path")?;
                    parsed.kb_path = Some(PathBuf::from(path));
                }
                "--top" => {
                    i += 1;
                    let n: usize = args
                        .get(i)
                        .filter(|a| !a.starts_with('-'))
                        .context("--top requires a number")?
                        .parse()
                        .context("--top must be a positive integer")?;
                    parsed.top = Some(n);
                }
                "--symptoms" => {
                    while let Some(value) = args.get(i + 1).filter(|a| !a.starts_with('-')) {
                        parsed.symptoms.extend(
                            value
                                .split(',')
                                .map(str::trim)
                                .filter(|s| !s.is_empty())
                                .map(str::to_string),
                        );
                        i += 1;
                    }
                }
                other => bail!("unknown argument '{other}' (see --help)"),
            }
            i += 1;
        }

        Ok(parsed)
    }
}
