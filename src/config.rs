/*! Pipeline configuration

Configuration is read from an optional JSON file. Every field has a default, so `{}` is a valid configuration.

```json
{
    "parser": { "block_size": 8, "zero_votes": { "policy": "exclude" } },
    "skip_blank_lines": true,
    "min_votes": 10,
    "clean_text": true,
    "validation_fraction": 0.2,
    "seed": 42,
    "expected": { "reviews": 568454 },
    "hyperparameters": { "vocab_size": 10000, "optimizer": "adam" }
}
```
!*/
use std::{fs::File, io::BufReader, ops::RangeInclusive, path::Path};

use serde::{Deserialize, Serialize};

use crate::{corpus::ExpectedStats, corpus::ParserConfig, error::Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Optimizer {
    Adam,
    Rmsprop,
    Sgd,
}

/// Hyperparameters handed to the tokenization and training collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparameters {
    /// Maximum number of words kept by the tokenizer.
    pub vocab_size: usize,
    /// Length sequences are padded or truncated to.
    pub max_sequence_length: usize,
    pub batch_size: usize,
    pub optimizer: Optimizer,
    /// Early stopping patience, in epochs.
    pub patience: u32,
}

impl Hyperparameters {
    pub const VOCAB_SIZE: RangeInclusive<usize> = 1..=1_000_000;
    pub const MAX_SEQUENCE_LENGTH: RangeInclusive<usize> = 1..=10_000;
    pub const BATCH_SIZE: RangeInclusive<usize> = 1..=65_536;
    pub const PATIENCE: RangeInclusive<u32> = 0..=100;

    pub fn validate(&self) -> Result<(), Error> {
        check_range("vocab_size", self.vocab_size, Self::VOCAB_SIZE)?;
        check_range(
            "max_sequence_length",
            self.max_sequence_length,
            Self::MAX_SEQUENCE_LENGTH,
        )?;
        check_range("batch_size", self.batch_size, Self::BATCH_SIZE)?;
        check_range("patience", self.patience, Self::PATIENCE)
    }
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            vocab_size: 10_000,
            max_sequence_length: 100,
            batch_size: 64,
            optimizer: Optimizer::Adam,
            patience: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    /// Skip blank lines when reading corpus files.
    pub skip_blank_lines: bool,
    /// Reviews with less votes are not exported.
    pub min_votes: u32,
    /// Clean texts before export (see [crate::transformers::clean_text]).
    pub clean_text: bool,
    /// Share of exported pairs held out for validation, in `[0, 1)`.
    pub validation_fraction: f64,
    /// Seed of the train/validation shuffle.
    pub seed: u64,
    /// Reference counts checked after parsing.
    pub expected: ExpectedStats,
    pub hyperparameters: Hyperparameters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            skip_blank_lines: true,
            min_votes: 10,
            clean_text: true,
            validation_fraction: 0.2,
            seed: 42,
            expected: ExpectedStats::default(),
            hyperparameters: Hyperparameters::default(),
        }
    }
}

impl Config {
    /// Read and validate a JSON configuration file.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let config: Config = serde_json::from_reader(BufReader::new(File::open(src)?))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.parser.validate()?;
        if !(0.0..1.0).contains(&self.validation_fraction) {
            return Err(Error::Config(format!(
                "validation_fraction must be in [0, 1), got {}",
                self.validation_fraction
            )));
        }
        self.hyperparameters.validate()
    }
}

fn check_range<T>(name: &str, value: T, range: RangeInclusive<T>) -> Result<(), Error>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "{} must be in {}..={}, got {}",
            name,
            range.start(),
            range.end(),
            value
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::corpus::ZeroVotesPolicy;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn empty_json() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_json() {
        let config: Config = serde_json::from_str(
            r#"{
                "parser": { "zero_votes": { "policy": "reject" } },
                "min_votes": 3,
                "expected": { "reviews": 12 },
                "hyperparameters": { "optimizer": "rmsprop", "patience": 5 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.parser.block_size, 8);
        assert_eq!(config.parser.zero_votes, ZeroVotesPolicy::Reject);
        assert_eq!(config.min_votes, 3);
        assert_eq!(config.expected.reviews, Some(12));
        assert_eq!(config.expected.users, None);
        assert_eq!(config.hyperparameters.optimizer, Optimizer::Rmsprop);
        assert_eq!(config.hyperparameters.patience, 5);
        assert_eq!(config.hyperparameters.vocab_size, 10_000);
    }

    #[test]
    fn invalid_ranges() {
        let mut config = Config::default();
        config.validation_fraction = 1.0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.hyperparameters.batch_size = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.parser.block_size = 2;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn unknown_optimizer() {
        let res: Result<Config, _> =
            serde_json::from_str(r#"{"hyperparameters": {"optimizer": "lbfgs"}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn from_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"seed": 1, "hyperparameters": {{"vocab_size": 0}}}}"#).unwrap();
        assert!(matches!(
            Config::from_path(f.path()),
            Err(Error::Config(_))
        ));

        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"seed": 1}}"#).unwrap();
        assert_eq!(Config::from_path(f.path()).unwrap().seed, 1);
    }
}
