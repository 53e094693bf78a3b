//! Bernoulli Naive Bayes scoring

use crate::models::{ClassificationResult, Document};
use crate::tokenizer;
use crate::trainer::Model;

/// Score `document` against `model` and pick the more probable class.
///
/// Every vocabulary word contributes: `ln P(w|c)` when the document contains
/// it and `ln(1 - P(w|c))` when it does not. Document words outside the
/// vocabulary carry no trained signal and are skipped.
pub fn classify(document: &Document, model: &Model) -> ClassificationResult {
    let mut log_prob_spam = model.prior_spam().ln();
    let mut log_prob_ham = model.prior_ham().ln();

    for (word, likelihood) in model.likelihoods() {
        if document.contains(word) {
            log_prob_spam += likelihood.spam.ln();
            log_prob_ham += likelihood.ham.ln();
        } else {
            log_prob_spam += (1.0 - likelihood.spam).ln();
            log_prob_ham += (1.0 - likelihood.ham).ln();
        }
    }

    ClassificationResult::from_scores(log_prob_spam, log_prob_ham)
}

impl Model {
    pub fn classify(&self, document: &Document) -> ClassificationResult {
        classify(document, self)
    }

    /// Tokenize raw text and classify the resulting document
    pub fn classify_text(&self, text: &str) -> ClassificationResult {
        classify(&tokenizer::token_set(text), self)
    }
}
