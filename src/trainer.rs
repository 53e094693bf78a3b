//! Bernoulli Naive Bayes training
//!
//! Each vocabulary word is a binary feature: present in a document or not.
//! For a class `c` with `N_c` training documents, of which `n_c(w)` contain
//! word `w`, the smoothed estimate of P(w present | c) is
//!
//! ```text
//! (n_c(w) + 1) / (N_c + 2)
//! ```
//!
//! The `+2` is one pseudo-count for each of the two outcomes (present and
//! absent). This is Bernoulli smoothing over document frequencies, not the
//! multinomial term-frequency variant that divides by vocabulary size.

use crate::corpus::CorpusParser;
use crate::error::{Result, SpamFilterError};
use crate::models::{Document, DocumentFrequency, EmailClass, Token, Vocabulary};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Pseudo-count added to every word's document frequency
const SMOOTHING_NUMERATOR: f64 = 1.0;

/// Pseudo-documents added to every class (present + absent outcomes)
const SMOOTHING_DENOMINATOR: f64 = 2.0;

/// Smoothed presence probabilities of one word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordLikelihood {
    pub spam: f64,
    pub ham: f64,
}

impl WordLikelihood {
    pub fn for_class(&self, class: EmailClass) -> f64 {
        match class {
            EmailClass::Spam => self.spam,
            EmailClass::Ham => self.ham,
        }
    }
}

/// Trained model. Immutable once built.
#[derive(Debug, Clone)]
pub struct Model {
    prior_spam: f64,
    prior_ham: f64,
    likelihoods: BTreeMap<Token, WordLikelihood>,
    vocabulary: Vocabulary,
    spam_documents: usize,
    ham_documents: usize,
}

impl Model {
    /// Estimate priors and likelihoods from already parsed documents
    pub fn from_documents(spam_docs: &[Document], ham_docs: &[Document]) -> Result<Self> {
        let spam_counts = DocumentFrequency::from_documents(spam_docs);
        let ham_counts = DocumentFrequency::from_documents(ham_docs);
        Self::from_frequencies(&spam_counts, &ham_counts)
    }

    /// Estimate priors and likelihoods from per-class document frequencies
    pub fn from_frequencies(
        spam_counts: &DocumentFrequency,
        ham_counts: &DocumentFrequency,
    ) -> Result<Self> {
        let spam_documents = spam_counts.documents();
        let ham_documents = ham_counts.documents();
        let total = spam_documents + ham_documents;

        if total == 0 {
            return Err(SpamFilterError::NoTrainingData);
        }
        if spam_documents == 0 || ham_documents == 0 {
            warn!(
                "Training corpus for one class is empty (spam: {}, ham: {}); its likelihoods are uniformly 0.5",
                spam_documents, ham_documents
            );
        }

        let prior_spam = spam_documents as f64 / total as f64;
        let prior_ham = 1.0 - prior_spam;

        let mut vocabulary = Vocabulary::new();
        vocabulary.extend(spam_counts.tokens());
        vocabulary.extend(ham_counts.tokens());

        let spam_denominator = spam_documents as f64 + SMOOTHING_DENOMINATOR;
        let ham_denominator = ham_documents as f64 + SMOOTHING_DENOMINATOR;

        let likelihoods: BTreeMap<Token, WordLikelihood> = vocabulary
            .iter()
            .map(|word| {
                let likelihood = WordLikelihood {
                    spam: (spam_counts.count(word) as f64 + SMOOTHING_NUMERATOR) / spam_denominator,
                    ham: (ham_counts.count(word) as f64 + SMOOTHING_NUMERATOR) / ham_denominator,
                };
                (word.clone(), likelihood)
            })
            .collect();

        info!(
            "Trained on {} spam and {} ham documents: {} vocabulary words, P(spam)={:.4}, P(ham)={:.4}",
            spam_documents,
            ham_documents,
            vocabulary.len(),
            prior_spam,
            prior_ham
        );

        Ok(Self {
            prior_spam,
            prior_ham,
            likelihoods,
            vocabulary,
            spam_documents,
            ham_documents,
        })
    }

    pub fn prior_spam(&self) -> f64 {
        self.prior_spam
    }

    pub fn prior_ham(&self) -> f64 {
        self.prior_ham
    }

    pub fn prior(&self, class: EmailClass) -> f64 {
        match class {
            EmailClass::Spam => self.prior_spam,
            EmailClass::Ham => self.prior_ham,
        }
    }

    /// P(word present | class), or `None` for words outside the vocabulary
    pub fn likelihood(&self, class: EmailClass, word: &str) -> Option<f64> {
        self.likelihoods.get(word).map(|l| l.for_class(class))
    }

    /// Both class likelihoods for every vocabulary word, in vocabulary order
    pub fn likelihoods(&self) -> impl Iterator<Item = (&Token, &WordLikelihood)> {
        self.likelihoods.iter()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of training documents seen for `class`
    pub fn documents(&self, class: EmailClass) -> usize {
        match class {
            EmailClass::Spam => self.spam_documents,
            EmailClass::Ham => self.ham_documents,
        }
    }
}

/// Builds models from raw corpus text
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    parser: CorpusParser,
}

impl Trainer {
    pub fn new(parser: CorpusParser) -> Self {
        Self { parser }
    }

    /// Parse both training corpora and estimate a model
    pub fn train(&self, spam_corpus: &str, ham_corpus: &str) -> Result<Model> {
        let spam = self.parser.parse(spam_corpus);
        let ham = self.parser.parse(ham_corpus);
        info!(
            "Parsed training corpora: {} spam, {} ham documents",
            spam.len(),
            ham.len()
        );
        Model::from_documents(&spam.documents, &ham.documents)
    }
}

/// Train a model from raw spam and ham corpora using the default markers
pub fn train(spam_corpus: &str, ham_corpus: &str) -> Result<Model> {
    Trainer::default().train(spam_corpus, ham_corpus)
}
