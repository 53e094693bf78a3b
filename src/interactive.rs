//! Interactive prompting for corpus locations
//!
//! Every corpus path is taken from the command line first, then from the
//! configuration file. Whatever is still missing is asked for on the terminal,
//! unless prompting was disabled, in which case the run fails.

use crate::config::PathsConfig;
use crate::error::{Result, SpamFilterError};
use crate::sources::{CorpusPaths, CorpusRole};
use std::path::PathBuf;

/// Source of corpus paths the user did not supply up front
pub trait PathPrompt {
    fn ask(&self, role: CorpusRole) -> Result<PathBuf>;
}

/// Terminal prompt backed by `inquire`
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl PathPrompt for TerminalPrompt {
    fn ask(&self, role: CorpusRole) -> Result<PathBuf> {
        let answer = inquire::Text::new(&format!("Enter the {}:", role.description()))
            .with_validator(|input: &str| {
                if input.trim().is_empty() {
                    Ok(inquire::validator::Validation::Invalid(
                        "A file path is required".into(),
                    ))
                } else {
                    Ok(inquire::validator::Validation::Valid)
                }
            })
            .prompt()?;

        Ok(PathBuf::from(answer.trim()))
    }
}

impl PathsConfig {
    pub fn get(&self, role: CorpusRole) -> Option<&PathBuf> {
        match role {
            CorpusRole::TrainSpam => self.train_spam.as_ref(),
            CorpusRole::TrainHam => self.train_ham.as_ref(),
            CorpusRole::TestSpam => self.test_spam.as_ref(),
            CorpusRole::TestHam => self.test_ham.as_ref(),
        }
    }
}

/// Merge command-line and configured paths, prompting for the rest
pub fn resolve_paths(
    overrides: &PathsConfig,
    configured: &PathsConfig,
    prompt: Option<&dyn PathPrompt>,
) -> Result<CorpusPaths> {
    let resolve = |role: CorpusRole| -> Result<PathBuf> {
        let path = match overrides.get(role).or_else(|| configured.get(role)) {
            Some(path) => path.clone(),
            None => match prompt {
                Some(prompt) => prompt.ask(role)?,
                None => {
                    return Err(SpamFilterError::ConfigError(format!(
                        "No {} given and prompting is disabled",
                        role.description()
                    )))
                }
            },
        };
        tracing::debug!("Using {:?} as the {}", path, role.description());
        Ok(path)
    };

    Ok(CorpusPaths {
        train_spam: resolve(CorpusRole::TrainSpam)?,
        train_ham: resolve(CorpusRole::TrainHam)?,
        test_spam: resolve(CorpusRole::TestSpam)?,
        test_ham: resolve(CorpusRole::TestHam)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Answers prompts from a fixed list and records what was asked
    struct ScriptedPrompt {
        asked: RefCell<Vec<CorpusRole>>,
    }

    impl ScriptedPrompt {
        fn new() -> Self {
            Self {
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl PathPrompt for ScriptedPrompt {
        fn ask(&self, role: CorpusRole) -> Result<PathBuf> {
            self.asked.borrow_mut().push(role);
            Ok(PathBuf::from(format!("prompted-{}", role.description().replace(' ', "-"))))
        }
    }

    struct CancelledPrompt;

    impl PathPrompt for CancelledPrompt {
        fn ask(&self, _role: CorpusRole) -> Result<PathBuf> {
            Err(SpamFilterError::OperationCancelled("prompt dismissed".to_string()))
        }
    }

    fn all_set(prefix: &str) -> PathsConfig {
        PathsConfig {
            train_spam: Some(PathBuf::from(format!("{}/train-spam", prefix))),
            train_ham: Some(PathBuf::from(format!("{}/train-ham", prefix))),
            test_spam: Some(PathBuf::from(format!("{}/test-spam", prefix))),
            test_ham: Some(PathBuf::from(format!("{}/test-ham", prefix))),
        }
    }

    #[test]
    fn test_overrides_win_over_config() {
        let overrides = PathsConfig {
            train_spam: Some(PathBuf::from("cli/train-spam")),
            ..Default::default()
        };
        let paths = resolve_paths(&overrides, &all_set("cfg"), None).unwrap();

        assert_eq!(paths.train_spam, PathBuf::from("cli/train-spam"));
        assert_eq!(paths.train_ham, PathBuf::from("cfg/train-ham"));
        assert_eq!(paths.test_spam, PathBuf::from("cfg/test-spam"));
        assert_eq!(paths.test_ham, PathBuf::from("cfg/test-ham"));
    }

    #[test]
    fn test_prompts_only_for_missing() {
        let configured = PathsConfig {
            train_spam: Some(PathBuf::from("cfg/train-spam")),
            test_ham: Some(PathBuf::from("cfg/test-ham")),
            ..Default::default()
        };
        let prompt = ScriptedPrompt::new();

        let paths = resolve_paths(&PathsConfig::default(), &configured, Some(&prompt)).unwrap();

        assert_eq!(
            *prompt.asked.borrow(),
            vec![CorpusRole::TrainHam, CorpusRole::TestSpam]
        );
        assert_eq!(paths.train_ham, PathBuf::from("prompted-training-file-for-ham"));
        assert_eq!(paths.test_spam, PathBuf::from("prompted-testing-file-for-spam"));
        assert_eq!(paths.test_ham, PathBuf::from("cfg/test-ham"));
    }

    #[test]
    fn test_missing_without_prompt_fails() {
        let result = resolve_paths(&PathsConfig::default(), &PathsConfig::default(), None);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("training file for spam"));
    }

    #[test]
    fn test_cancelled_prompt_propagates() {
        let result = resolve_paths(
            &PathsConfig::default(),
            &PathsConfig::default(),
            Some(&CancelledPrompt),
        );
        assert!(matches!(result, Err(SpamFilterError::OperationCancelled(_))));
    }
}
