//! Bayes Spam Filter
//!
//! A Bernoulli Naive Bayes classifier that separates emails into spam and ham.
//! It is trained from two labelled corpora and evaluated against two held-out
//! corpora, producing per-document diagnostics and overall accuracy.
//!
//! # Overview
//!
//! - **Tokenization**: lowercased word-character runs
//! - **Corpus parsing**: `<SUBJECT>`/`<BODY>` delimited emails become token sets
//! - **Training**: document-frequency counts, class priors, Laplace-smoothed
//!   presence likelihoods over a shared vocabulary
//! - **Classification**: log-posterior over every vocabulary word, scoring both
//!   presence and absence
//! - **Evaluation**: per-document diagnostics and per-class tallies
//!
//! # Example Usage
//!
//! ```
//! use bayes_spam_filter::{evaluate, train, EmailClass};
//!
//! let spam = "<SUBJECT>Special offer</SUBJECT><BODY>send money</BODY>\
//!             <SUBJECT>Offer</SUBJECT><BODY>free money</BODY>";
//! let ham = "<SUBJECT>Meeting</SUBJECT><BODY>project plan</BODY>\
//!            <SUBJECT>Project</SUBJECT><BODY>meeting notes</BODY>";
//!
//! let model = train(spam, ham)?;
//! assert_eq!(model.classify_text("money offer").predicted_class, EmailClass::Spam);
//!
//! let report = evaluate(
//!     "<SUBJECT>offer</SUBJECT><BODY>money</BODY>",
//!     "<SUBJECT>meeting</SUBJECT><BODY>project</BODY>",
//!     &model,
//! );
//! assert_eq!(report.total_correct, 2);
//! # Ok::<(), bayes_spam_filter::SpamFilterError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`tokenizer`] - Word extraction
//! - [`corpus`] - Splitting corpus text into documents
//! - [`trainer`] - Model estimation
//! - [`classifier`] - Log-posterior scoring
//! - [`evaluator`] - Held-out evaluation
//! - [`models`] - Core data structures
//! - [`report`] - Text, Markdown and JSON report rendering
//! - [`config`] - Configuration management
//! - [`sources`] - Reading corpus files
//! - [`interactive`] - Prompting for missing corpus paths
//! - [`cli`] - Command-line interface and pipeline orchestration
//! - [`error`] - Error types and result aliases

pub mod classifier;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod evaluator;
pub mod interactive;
pub mod models;
pub mod report;
pub mod sources;
pub mod tokenizer;
pub mod trainer;

// Re-export commonly used types for convenience
pub use error::{Result, SpamFilterError};

// Core data models
pub use models::{ClassificationResult, Document, EmailClass, Token, TokenSet, Vocabulary};

// Pipeline stages
pub use classifier::classify;
pub use corpus::{parse_corpus, CorpusMarkers, CorpusParser, ParsedCorpus};
pub use evaluator::{evaluate, ClassTally, DocumentDiagnostic, EvaluationReport, Evaluator};
pub use tokenizer::tokenize;
pub use trainer::{train, Model, Trainer};

// Config and reporting
pub use config::Config;
pub use report::{ReportFormat, RunReport};
