//! Core types for the symptom-based diagnosis calculator.
//!
//! Holds the reference data (symptom vocabulary and disease registry), the
//! per-call result types, and the `Diagnoser` trait implemented by the
//! inference engines.

pub mod error;
pub mod knowledge_base;
pub mod traits;
pub mod types;

pub use error::*;
pub use knowledge_base::KnowledgeBase;
pub use traits::*;
pub use types::*;
