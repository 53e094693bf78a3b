//! Rendering of evaluation results

use crate::error::Result;
use crate::evaluator::{ClassTally, DocumentDiagnostic, EvaluationReport};
use crate::models::EmailClass;
use crate::trainer::Model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format for evaluation reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One `TEST ...` line per document plus a total line
    #[default]
    Text,
    /// Markdown summary and per-document table
    Markdown,
    /// Machine-readable JSON
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Text => "text",
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Headline numbers of the trained model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub vocabulary_size: usize,
    pub spam_documents: usize,
    pub ham_documents: usize,
    pub prior_spam: f64,
    pub prior_ham: f64,
}

impl From<&Model> for ModelSummary {
    fn from(model: &Model) -> Self {
        Self {
            vocabulary_size: model.vocabulary_size(),
            spam_documents: model.documents(EmailClass::Spam),
            ham_documents: model.documents(EmailClass::Ham),
            prior_spam: model.prior_spam(),
            prior_ham: model.prior_ham(),
        }
    }
}

/// An evaluation together with the run it came from.
///
/// Output only; `-inf` scores become `null` in JSON and are not read back.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub model: ModelSummary,
    pub evaluation: EvaluationReport,
}

impl RunReport {
    pub fn new(model: &Model, evaluation: EvaluationReport) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            model: ModelSummary::from(model),
            evaluation,
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(render_text(&self.evaluation)),
            ReportFormat::Markdown => Ok(self.to_markdown()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Generate Markdown report
    pub fn to_markdown(&self) -> String {
        let evaluation = &self.evaluation;
        let mut md = String::new();

        md.push_str("# Spam Filter Evaluation Report\n\n");
        md.push_str(&format!(
            "Generated: {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        md.push_str("## Summary\n\n");
        md.push_str(&format!("- **Run ID:** {}\n", self.run_id));
        md.push_str(&format!(
            "- **Training documents:** {} spam, {} ham\n",
            self.model.spam_documents, self.model.ham_documents
        ));
        md.push_str(&format!(
            "- **Vocabulary size:** {}\n",
            self.model.vocabulary_size
        ));
        md.push_str(&format!(
            "- **Priors:** P(spam) = {:.4}, P(ham) = {:.4}\n",
            self.model.prior_spam, self.model.prior_ham
        ));
        md.push_str(&format!(
            "- **Correct:** {}/{} ({})\n\n",
            evaluation.total_correct,
            evaluation.total_documents,
            format_accuracy(evaluation.accuracy())
        ));

        md.push_str("## Per-Class Results\n\n");
        md.push_str("| Class | Correct | Total | Accuracy |\n");
        md.push_str("|-------|---------|-------|----------|\n");
        for (class, tally) in [
            (EmailClass::Spam, &evaluation.spam),
            (EmailClass::Ham, &evaluation.ham),
        ] {
            md.push_str(&tally_row(class, tally));
        }
        md.push('\n');

        md.push_str("## Documents\n\n");
        if evaluation.records.is_empty() {
            md.push_str("_No test documents._\n");
        } else {
            md.push_str("| Class | # | Features | log P(spam) | log P(ham) | Predicted | Result |\n");
            md.push_str("|-------|---|----------|-------------|------------|-----------|--------|\n");
            for record in &evaluation.records {
                md.push_str(&format!(
                    "| {} | {} | {}/{} | {:.3} | {:.3} | {} | {} |\n",
                    record.ground_truth,
                    record.index,
                    record.overlap_count,
                    record.vocabulary_size,
                    record.log_prob_spam,
                    record.log_prob_ham,
                    record.predicted,
                    verdict(record)
                ));
            }
        }

        md
    }

    /// Save the rendered report to file
    pub async fn save(&self, path: &std::path::Path, format: ReportFormat) -> Result<()> {
        let rendered = self.render(format)?;
        tokio::fs::write(path, rendered).await?;
        Ok(())
    }
}

fn tally_row(class: EmailClass, tally: &ClassTally) -> String {
    format!(
        "| {} | {} | {} | {} |\n",
        class,
        tally.correct,
        tally.total,
        format_accuracy(tally.accuracy())
    )
}

fn format_accuracy(accuracy: Option<f64>) -> String {
    match accuracy {
        Some(value) => format!("{:.1}%", value * 100.0),
        None => "n/a".to_string(),
    }
}

fn verdict(record: &DocumentDiagnostic) -> &'static str {
    if record.correct {
        "right"
    } else {
        "wrong"
    }
}

/// `TEST <index> <overlap>/<vocab> features true <spam> <ham> <class> <right|wrong>`
pub fn format_diagnostic(record: &DocumentDiagnostic) -> String {
    format!(
        "TEST {} {}/{} features true {:.3} {:.3} {} {}",
        record.index,
        record.overlap_count,
        record.vocabulary_size,
        record.log_prob_spam,
        record.log_prob_ham,
        record.predicted,
        verdict(record)
    )
}

pub fn format_total(report: &EvaluationReport) -> String {
    format!(
        "Total: {}/{} emails classified correctly.",
        report.total_correct, report.total_documents
    )
}

/// Plain-text report: one line per document, then the total
pub fn render_text(report: &EvaluationReport) -> String {
    let mut out = String::new();
    for record in &report.records {
        out.push_str(&format_diagnostic(record));
        out.push('\n');
    }
    out.push_str(&format_total(report));
    out.push('\n');
    out
}
