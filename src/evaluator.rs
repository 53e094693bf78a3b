//! Held-out evaluation of a trained model

use crate::classifier::classify;
use crate::corpus::CorpusParser;
use crate::models::{Document, EmailClass};
use crate::trainer::Model;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Per-document outcome of an evaluation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentDiagnostic {
    /// 1-based position within its test corpus
    pub index: usize,
    /// Distinct document tokens that are also vocabulary words
    pub overlap_count: usize,
    pub vocabulary_size: usize,
    pub ground_truth: EmailClass,
    pub log_prob_spam: f64,
    pub log_prob_ham: f64,
    pub predicted: EmailClass,
    pub correct: bool,
}

/// Correct/total counts for one class of test documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTally {
    pub correct: usize,
    pub total: usize,
}

impl ClassTally {
    fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.correct as f64 / self.total as f64)
        }
    }
}

/// Result of classifying both test corpora
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Spam test documents first, then ham, each in corpus order
    pub records: Vec<DocumentDiagnostic>,
    pub spam: ClassTally,
    pub ham: ClassTally,
    pub total_correct: usize,
    pub total_documents: usize,
}

impl EvaluationReport {
    /// Fraction of test documents classified correctly, `None` when there were none
    pub fn accuracy(&self) -> Option<f64> {
        if self.total_documents == 0 {
            None
        } else {
            Some(self.total_correct as f64 / self.total_documents as f64)
        }
    }

    pub fn tally(&self, class: EmailClass) -> &ClassTally {
        match class {
            EmailClass::Spam => &self.spam,
            EmailClass::Ham => &self.ham,
        }
    }

    fn push_group(&mut self, documents: &[Document], ground_truth: EmailClass, model: &Model) {
        let vocabulary_size = model.vocabulary_size();

        for (position, document) in documents.iter().enumerate() {
            let result = classify(document, model);
            let correct = result.predicted_class == ground_truth;
            let diagnostic = DocumentDiagnostic {
                index: position + 1,
                overlap_count: document.intersection_count(model.vocabulary()),
                vocabulary_size,
                ground_truth,
                log_prob_spam: result.log_prob_spam,
                log_prob_ham: result.log_prob_ham,
                predicted: result.predicted_class,
                correct,
            };

            debug!(
                "{} #{}: spam={:.3} ham={:.3} -> {}",
                ground_truth,
                diagnostic.index,
                diagnostic.log_prob_spam,
                diagnostic.log_prob_ham,
                diagnostic.predicted
            );

            match ground_truth {
                EmailClass::Spam => self.spam.record(correct),
                EmailClass::Ham => self.ham.record(correct),
            }
            self.records.push(diagnostic);
        }

        self.total_correct = self.spam.correct + self.ham.correct;
        self.total_documents = self.spam.total + self.ham.total;
    }
}

/// Runs a trained model over labelled test corpora
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    parser: CorpusParser,
}

impl Evaluator {
    pub fn new(parser: CorpusParser) -> Self {
        Self { parser }
    }

    /// Parse and classify both test corpora
    pub fn evaluate(&self, test_spam: &str, test_ham: &str, model: &Model) -> EvaluationReport {
        let spam = self.parser.parse(test_spam);
        let ham = self.parser.parse(test_ham);
        evaluate_documents(&spam.documents, &ham.documents, model)
    }
}

/// Classify already parsed test documents
pub fn evaluate_documents(
    spam_docs: &[Document],
    ham_docs: &[Document],
    model: &Model,
) -> EvaluationReport {
    let mut report = EvaluationReport::default();
    report.push_group(spam_docs, EmailClass::Spam, model);
    report.push_group(ham_docs, EmailClass::Ham, model);

    info!(
        "Evaluated {} documents: {} correct ({} spam, {} ham)",
        report.total_documents, report.total_correct, report.spam.total, report.ham.total
    );

    report
}

/// Evaluate `model` on raw test corpora using the default markers
pub fn evaluate(test_spam: &str, test_ham: &str, model: &Model) -> EvaluationReport {
    Evaluator::default().evaluate(test_spam, test_ham, model)
}
