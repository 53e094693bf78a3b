use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A lowercased word extracted by the tokenizer
pub type Token = String;

/// Ordered set of tokens.
///
/// The same type represents a single document's features and the trained
/// vocabulary. Iteration is in lexical order, so any sum accumulated while
/// walking a set is reproducible from run to run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet(BTreeSet<Token>);

/// A document is the set of distinct tokens in its subject and body
pub type Document = TokenSet;

/// All tokens observed while training
pub type Vocabulary = TokenSet;

impl TokenSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn insert(&mut self, token: impl Into<Token>) -> bool {
        self.0.insert(token.into())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Token> {
        self.0.iter()
    }

    /// Tokens present in either set
    pub fn union(&self, other: &TokenSet) -> TokenSet {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Number of tokens present in both sets, without allocating the intersection
    pub fn intersection_count(&self, other: &TokenSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().filter(|token| large.contains(token)).count()
    }
}

impl FromIterator<Token> for TokenSet {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for TokenSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl Extend<Token> for TokenSet {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> Extend<&'a Token> for TokenSet {
    fn extend<I: IntoIterator<Item = &'a Token>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().cloned());
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Token;
    type IntoIter = btree_set::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for TokenSet {
    type Item = Token;
    type IntoIter = btree_set::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// The two classes an email can belong to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EmailClass {
    Spam,
    Ham,
}

impl EmailClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailClass::Spam => "spam",
            EmailClass::Ham => "ham",
        }
    }
}

impl fmt::Display for EmailClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of documents containing each token, for one class.
///
/// Tokens that never occurred have an implicit count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFrequency {
    counts: BTreeMap<Token, usize>,
    documents: usize,
}

impl DocumentFrequency {
    /// Fold a slice of documents into their per-token document counts
    pub fn from_documents(documents: &[Document]) -> Self {
        documents
            .iter()
            .fold(Self::default(), |acc, document| acc.with_document(document))
    }

    /// Return a new frequency table that also counts `document`
    pub fn with_document(mut self, document: &Document) -> Self {
        for token in document {
            *self.counts.entry(token.clone()).or_insert(0) += 1;
        }
        self.documents += 1;
        self
    }

    /// Combine two tables built over disjoint document shards
    pub fn merge(mut self, other: DocumentFrequency) -> Self {
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert(0) += count;
        }
        self.documents += other.documents;
        self
    }

    /// Documents containing `token`, zero when it was never seen
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of documents folded into this table
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Distinct tokens with a non-zero count
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.counts.keys()
    }
}

/// Log-posterior scores for one document and the class they select.
///
/// Serialize-only: a score of `-inf` is written to JSON as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub log_prob_spam: f64,
    pub log_prob_ham: f64,
    pub predicted_class: EmailClass,
}

impl ClassificationResult {
    /// Build a result from raw scores; ties go to ham
    pub fn from_scores(log_prob_spam: f64, log_prob_ham: f64) -> Self {
        let predicted_class = if log_prob_spam > log_prob_ham {
            EmailClass::Spam
        } else {
            EmailClass::Ham
        };

        Self {
            log_prob_spam,
            log_prob_ham,
            predicted_class,
        }
    }

    pub fn is_spam(&self) -> bool {
        self.predicted_class == EmailClass::Spam
    }
}
