//! Corpus parsing
//!
//! A corpus is one text blob holding many emails, each written as a subject
//! segment followed by a body segment:
//!
//! ```text
//! <SUBJECT>buy now</SUBJECT>
//! <BODY>win cash</BODY>
//! ```
//!
//! The opening markers delimit the segments. Anything before the first marker
//! is discarded, and a trailing segment without a partner is dropped. Parsing
//! never fails on malformed markup; it just produces fewer documents.

use crate::error::{Result, SpamFilterError};
use crate::models::Document;
use crate::tokenizer;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBJECT_MARKER: &str = "<SUBJECT>";
pub const DEFAULT_BODY_MARKER: &str = "<BODY>";
pub const DEFAULT_SUBJECT_CLOSE: &str = "</SUBJECT>";
pub const DEFAULT_BODY_CLOSE: &str = "</BODY>";

static DEFAULT_PARSER: Lazy<CorpusParser> = Lazy::new(CorpusParser::default);

/// Literal markers that delimit emails inside a corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusMarkers {
    pub subject: String,
    pub body: String,
    pub subject_close: String,
    pub body_close: String,
}

impl Default for CorpusMarkers {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT_MARKER.to_string(),
            body: DEFAULT_BODY_MARKER.to_string(),
            subject_close: DEFAULT_SUBJECT_CLOSE.to_string(),
            body_close: DEFAULT_BODY_CLOSE.to_string(),
        }
    }
}

impl CorpusMarkers {
    /// Check that the markers can split a corpus unambiguously
    pub fn validate(&self, strip_closing_markers: bool) -> Result<()> {
        if self.subject.is_empty() || self.body.is_empty() {
            return Err(SpamFilterError::CorpusError(
                "subject and body markers cannot be empty".to_string(),
            ));
        }
        if self.subject == self.body {
            return Err(SpamFilterError::CorpusError(format!(
                "subject and body markers must differ (both are '{}')",
                self.subject
            )));
        }
        if strip_closing_markers && (self.subject_close.is_empty() || self.body_close.is_empty())
        {
            return Err(SpamFilterError::CorpusError(
                "closing markers cannot be empty when closing markers are stripped".to_string(),
            ));
        }
        Ok(())
    }
}

/// Documents parsed from one corpus plus what was thrown away on the way
#[derive(Debug, Clone, Default)]
pub struct ParsedCorpus {
    pub documents: Vec<Document>,
    /// Trailing segment with no partner (0 or 1)
    pub unpaired_fragments: usize,
    /// Non-blank text appeared before the first marker
    pub preamble_discarded: bool,
}

impl ParsedCorpus {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Splits corpus text into documents
#[derive(Debug, Clone)]
pub struct CorpusParser {
    splitter: Regex,
    closing: Option<Regex>,
}

impl CorpusParser {
    pub fn new(markers: &CorpusMarkers, strip_closing_markers: bool) -> Result<Self> {
        markers.validate(strip_closing_markers)?;

        let splitter = alternation(&[markers.subject.as_str(), markers.body.as_str()])?;
        let closing = if strip_closing_markers {
            Some(alternation(&[
                markers.subject_close.as_str(),
                markers.body_close.as_str(),
            ])?)
        } else {
            None
        };

        Ok(Self { splitter, closing })
    }

    /// Parse `raw` into documents, reporting dropped fragments
    pub fn parse(&self, raw: &str) -> ParsedCorpus {
        let mut fragments = self.splitter.split(raw);
        let preamble_discarded = fragments
            .next()
            .map(|preamble| !preamble.trim().is_empty())
            .unwrap_or(false);

        let fragments: Vec<&str> = fragments.collect();
        let pairs = fragments.chunks_exact(2);
        let unpaired_fragments = pairs.remainder().len();

        let documents: Vec<Document> = pairs
            .map(|pair| {
                let subject = self.segment_tokens(pair[0]);
                let body = self.segment_tokens(pair[1]);
                subject.union(&body)
            })
            .collect();

        if unpaired_fragments > 0 {
            tracing::warn!(
                "Dropped {} unpaired trailing segment(s) after {} document(s)",
                unpaired_fragments,
                documents.len()
            );
        }
        if preamble_discarded {
            tracing::debug!("Discarded text before the first corpus marker");
        }

        ParsedCorpus {
            documents,
            unpaired_fragments,
            preamble_discarded,
        }
    }

    fn segment_tokens(&self, segment: &str) -> Document {
        match &self.closing {
            Some(closing) => tokenizer::token_set(&closing.replace_all(segment, " ")),
            None => tokenizer::token_set(segment),
        }
    }
}

impl Default for CorpusParser {
    fn default() -> Self {
        // Default markers are known-good literals
        Self::new(&CorpusMarkers::default(), true).unwrap()
    }
}

/// Parse a corpus using the default `<SUBJECT>`/`<BODY>` markers
pub fn parse_corpus(raw: &str) -> Vec<Document> {
    DEFAULT_PARSER.parse(raw).documents
}

fn alternation(literals: &[&str]) -> Result<Regex> {
    let pattern = literals
        .iter()
        .map(|literal| regex::escape(literal))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern)
        .map_err(|e| SpamFilterError::CorpusError(format!("Invalid corpus marker: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(words: &[&str]) -> Document {
        words.iter().copied().collect()
    }

    const TWO_EMAILS: &str = "<SUBJECT>buy now</SUBJECT>\n<BODY>win cash</BODY>\n<SUBJECT>hi</SUBJECT>\n<BODY>hello</BODY>\n";

    #[test]
    fn test_parse_two_emails() {
        let documents = parse_corpus(TWO_EMAILS);
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0], doc(&["buy", "now", "win", "cash"]));
        assert_eq!(documents[1], doc(&["hi", "hello"]));
    }

    #[test]
    fn test_subject_and_body_are_unioned() {
        let documents = parse_corpus("<SUBJECT>free money</SUBJECT><BODY>money money free</BODY>");
        assert_eq!(documents, vec![doc(&["free", "money"])]);
    }

    #[test]
    fn test_unpaired_trailing_fragment_is_dropped() {
        let parser = CorpusParser::default();
        let raw = "<SUBJECT>one</SUBJECT><BODY>first</BODY><SUBJECT>orphan subject</SUBJECT>";
        let parsed = parser.parse(raw);

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.unpaired_fragments, 1);
        assert_eq!(parsed.documents[0], doc(&["one", "first"]));
    }

    #[test]
    fn test_preamble_is_discarded() {
        let parser = CorpusParser::default();
        let parsed = parser.parse("header junk\n<SUBJECT>hi</SUBJECT><BODY>there</BODY>");

        assert!(parsed.preamble_discarded);
        assert_eq!(parsed.documents, vec![doc(&["hi", "there"])]);
        assert!(!parser.parse(TWO_EMAILS).preamble_discarded);
    }

    #[test]
    fn test_no_markers_yields_no_documents() {
        assert!(parse_corpus("").is_empty());
        assert!(parse_corpus("just some text without markup").is_empty());
        assert!(parse_corpus("<SUBJECT>only a subject").is_empty());
    }

    #[test]
    fn test_empty_segments_still_form_a_document() {
        let documents = parse_corpus("<SUBJECT></SUBJECT><BODY></BODY>");
        assert_eq!(documents.len(), 1);
        assert!(documents[0].is_empty());
    }

    #[test]
    fn test_closing_markers_kept_when_stripping_disabled() {
        let parser = CorpusParser::new(&CorpusMarkers::default(), false).unwrap();
        let parsed = parser.parse(TWO_EMAILS);

        assert_eq!(parsed.len(), 2);
        assert!(parsed.documents[0].contains("subject"));
        assert!(parsed.documents[0].contains("body"));
    }

    #[test]
    fn test_closing_marker_does_not_glue_words() {
        let documents = parse_corpus("<SUBJECT>now</SUBJECT>later<BODY>x</BODY>y");
        assert_eq!(documents, vec![doc(&["now", "later", "x", "y"])]);
    }

    #[test]
    fn test_custom_markers() {
        let markers = CorpusMarkers {
            subject: "Subject:".to_string(),
            body: "Body:".to_string(),
            subject_close: "[/s]".to_string(),
            body_close: "[/b]".to_string(),
        };
        let parser = CorpusParser::new(&markers, true).unwrap();
        let parsed = parser.parse("Subject: cheap pills[/s] Body: order today[/b]");

        assert_eq!(parsed.documents, vec![doc(&["cheap", "pills", "order", "today"])]);
    }

    #[test]
    fn test_invalid_markers_rejected() {
        let mut markers = CorpusMarkers::default();
        markers.body = markers.subject.clone();
        assert!(CorpusParser::new(&markers, true).is_err());

        let mut markers = CorpusMarkers::default();
        markers.subject = String::new();
        assert!(CorpusParser::new(&markers, true).is_err());

        let mut markers = CorpusMarkers::default();
        markers.body_close = String::new();
        assert!(CorpusParser::new(&markers, true).is_err());
        assert!(CorpusParser::new(&markers, false).is_ok());
    }
}
