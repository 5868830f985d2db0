/*! Export pipeline

Reads a corpus, parses it, checks reference counts, filters reviews and writes training material:

```text
dst/
├── reviews.jsonl     kept reviews, one JSON document per line
├── train.csv         (text, label) training pairs
├── validation.csv    (text, label) validation pairs
└── manifest.json     counts, parser configuration and hyperparameters
```
!*/
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{info, warn};
use serde::Serialize;

use crate::{
    config::{Config, Hyperparameters},
    corpus::{compute_stats, CorpusStats, Parser, ParserConfig},
    dataset::{labelled_pairs, split_train_validation, LabelledText},
    error::Error,
    filtering::filter_by_min_votes,
    io::{
        reader::read_lines,
        writer::{CsvWriter, JsonLinesWriter, WriterTrait},
    },
};

/// Summary of a pipeline run, written as `manifest.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub stats: CorpusStats,
    pub kept_reviews: usize,
    pub train_size: usize,
    pub validation_size: usize,
    pub parser: ParserConfig,
    pub hyperparameters: Hyperparameters,
}

pub struct Pipeline {
    src: PathBuf,
    dst: PathBuf,
    config: Config,
}

impl Pipeline {
    pub fn new(src: PathBuf, dst: PathBuf, config: Config) -> Self {
        Self { src, dst, config }
    }

    pub fn run(&self) -> Result<Manifest, Error> {
        self.config.validate()?;
        let parser = Parser::new(self.config.parser.clone())?;

        let lines = read_lines(&self.src, self.config.skip_blank_lines)?;
        let reviews = parser.parse(&lines)?;

        let stats = compute_stats(&reviews);
        info!(
            "{} reviews, {} products, {} users",
            stats.reviews, stats.products, stats.users
        );
        if self.config.expected.is_empty() {
            warn!("No reference counts specified! Corpus stats will not be checked.");
        } else {
            stats.validate(&self.config.expected)?;
        }

        let kept = filter_by_min_votes(&reviews, self.config.min_votes);
        info!(
            "{} reviews with at least {} votes",
            kept.len(),
            self.config.min_votes
        );

        let pairs = labelled_pairs(&kept, self.config.clean_text);
        let (train, validation) = split_train_validation(
            pairs,
            self.config.validation_fraction,
            self.config.seed,
        );

        if !self.dst.exists() {
            warn!("Destination folder does not exist. Creating");
            std::fs::create_dir_all(&self.dst)?;
        }

        let manifest = Manifest {
            stats,
            kept_reviews: kept.len(),
            train_size: train.len(),
            validation_size: validation.len(),
            parser: parser.config().clone(),
            hyperparameters: self.config.hyperparameters.clone(),
        };

        let mut wr = JsonLinesWriter::new(BufWriter::new(File::create(
            self.dst.join("reviews.jsonl"),
        )?));
        wr.write(kept)?;
        wr.flush()?;

        write_pairs(&self.dst.join("train.csv"), train)?;
        write_pairs(&self.dst.join("validation.csv"), validation)?;

        let mut manifest_file = BufWriter::new(File::create(self.dst.join("manifest.json"))?);
        serde_json::to_writer_pretty(&mut manifest_file, &manifest)?;
        manifest_file.flush()?;

        info!("export written in {:?}", self.dst);
        Ok(manifest)
    }
}

fn write_pairs(dst: &Path, pairs: Vec<LabelledText>) -> Result<(), Error> {
    let mut wr = CsvWriter::new(BufWriter::new(File::create(dst)?));
    wr.write(pairs)?;
    wr.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::ExpectedStats;

    fn write_corpus(path: &Path, nb: usize) {
        let mut f = File::create(path).unwrap();
        for i in 0..nb {
            writeln!(
                f,
                "product/productId: P{}\nreview/userId: U{}\nreview/profileName: name\nreview/helpfulness: {}/{}\nreview/score: 4.0\nreview/time: 1\nreview/summary: s\nreview/text: Review number {}!\n",
                i % 3,
                i % 5,
                i % 11,
                10 + i % 7,
                i
            )
            .unwrap();
        }
    }

    #[test]
    fn run() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.txt");
        write_corpus(&src, 20);
        let dst = dir.path().join("out");

        let config = Config {
            expected: ExpectedStats {
                products: Some(3),
                users: Some(5),
                reviews: Some(20),
            },
            ..Default::default()
        };
        let manifest = Pipeline::new(src, dst.clone(), config).run().unwrap();

        assert_eq!(manifest.kept_reviews, 20);
        assert_eq!(manifest.train_size, 16);
        assert_eq!(manifest.validation_size, 4);
        for name in ["reviews.jsonl", "train.csv", "validation.csv", "manifest.json"] {
            assert!(dst.join(name).exists(), "{} missing", name);
        }
    }

    #[test]
    fn stats_count_filtered_reviews() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.txt");
        write_corpus(&src, 20);

        // totals are 10 + i % 7, so 11 of the 20 reviews have at least 13 votes
        let config = Config {
            min_votes: 13,
            expected: ExpectedStats {
                reviews: Some(20),
                ..Default::default()
            },
            ..Default::default()
        };
        let manifest = Pipeline::new(src, dir.path().join("out"), config)
            .run()
            .unwrap();
        assert_eq!(manifest.stats.reviews, 20);
        assert_eq!(manifest.kept_reviews, 11);
    }

    #[test]
    fn run_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.txt");
        write_corpus(&src, 4);

        let config = Config {
            expected: ExpectedStats {
                reviews: Some(5),
                ..Default::default()
            },
            ..Default::default()
        };
        let res = Pipeline::new(src, dir.path().join("out"), config).run();
        assert!(matches!(res, Err(Error::Validation(_))));
        assert!(!dir.path().join("out").exists());
    }
}
