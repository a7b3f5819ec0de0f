use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiagnosisError {
    #[error("Invalid knowledge base: {0}")]
    InvalidKnowledgeBase(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
