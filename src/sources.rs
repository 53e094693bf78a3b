//! Loading the four corpus files from disk

use crate::error::{Result, SpamFilterError};
use std::path::{Path, PathBuf};

/// Which of the four corpora a path or text belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusRole {
    TrainSpam,
    TrainHam,
    TestSpam,
    TestHam,
}

impl CorpusRole {
    /// Human-readable description used in prompts and messages
    pub fn description(&self) -> &'static str {
        match self {
            CorpusRole::TrainSpam => "training file for spam",
            CorpusRole::TrainHam => "training file for ham",
            CorpusRole::TestSpam => "testing file for spam",
            CorpusRole::TestHam => "testing file for ham",
        }
    }
}

/// Resolved locations of all four corpora
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPaths {
    pub train_spam: PathBuf,
    pub train_ham: PathBuf,
    pub test_spam: PathBuf,
    pub test_ham: PathBuf,
}

/// Raw text of all four corpora
#[derive(Debug, Clone, Default)]
pub struct CorpusTexts {
    pub train_spam: String,
    pub train_ham: String,
    pub test_spam: String,
    pub test_ham: String,
}

impl CorpusPaths {
    pub fn get(&self, role: CorpusRole) -> &Path {
        match role {
            CorpusRole::TrainSpam => &self.train_spam,
            CorpusRole::TrainHam => &self.train_ham,
            CorpusRole::TestSpam => &self.test_spam,
            CorpusRole::TestHam => &self.test_ham,
        }
    }

    /// Read all four files concurrently
    pub async fn load(&self) -> Result<CorpusTexts> {
        let (train_spam, train_ham, test_spam, test_ham) = tokio::try_join!(
            read_corpus(&self.train_spam),
            read_corpus(&self.train_ham),
            read_corpus(&self.test_spam),
            read_corpus(&self.test_ham),
        )?;

        Ok(CorpusTexts {
            train_spam,
            train_ham,
            test_spam,
            test_ham,
        })
    }
}

async fn read_corpus(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        SpamFilterError::CorpusError(format!("Failed to read corpus file {:?}: {}", path, e))
    })?;
    tracing::debug!("Read {} bytes from {:?}", text.len(), path);
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_all_four() {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for (name, body) in [
            ("train-spam.txt", "a"),
            ("train-ham.txt", "b"),
            ("test-spam.txt", "c"),
            ("test-ham.txt", "d"),
        ] {
            let path = dir.path().join(name);
            tokio::fs::write(&path, body).await.unwrap();
            paths.push(path);
        }

        let corpus_paths = CorpusPaths {
            train_spam: paths[0].clone(),
            train_ham: paths[1].clone(),
            test_spam: paths[2].clone(),
            test_ham: paths[3].clone(),
        };
        let texts = corpus_paths.load().await.unwrap();

        assert_eq!(texts.train_spam, "a");
        assert_eq!(texts.train_ham, "b");
        assert_eq!(texts.test_spam, "c");
        assert_eq!(texts.test_ham, "d");
        assert_eq!(corpus_paths.get(CorpusRole::TestSpam), paths[2].as_path());
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("present.txt");
        tokio::fs::write(&present, "x").await.unwrap();

        let corpus_paths = CorpusPaths {
            train_spam: present.clone(),
            train_ham: dir.path().join("missing.txt"),
            test_spam: present.clone(),
            test_ham: present,
        };

        let err = corpus_paths.load().await.unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_role_descriptions() {
        assert_eq!(CorpusRole::TrainSpam.description(), "training file for spam");
        assert_eq!(CorpusRole::TestHam.description(), "testing file for ham");
    }
}
