//! # reviewparse
//!
//! Parses line-oriented product review corpora, derives a helpfulness ratio for each review
//! and exports `(text, ratio)` pairs for training.
//!
//! ## Getting started
//!
//! ```sh
//! reviewparse 0.1.0
//! review corpus parsing tool.
//!
//! USAGE:
//!     reviewparse <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     export    Export training material
//!     help      Prints this message or the help of the given subcommand(s)
//!     parse     Parse a corpus into JSON lines
//!     stats     Compute (and check) corpus statistics
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=info`).
use std::fs::File;
use std::io::BufWriter;

use log::debug;
use structopt::StructOpt;

use reviewparse::{
    config::Config,
    corpus::{compute_stats, ExpectedStats, Parser, ParserConfig},
    error::Error,
    filtering::filter_by_min_votes,
    io::{
        reader::read_lines,
        writer::{JsonLinesWriter, WriterTrait},
    },
    pipeline::Pipeline,
    transformers::{CleanText, Transform},
};

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::ReviewParse::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::ReviewParse::Parse(p) => {
            let parser = Parser::new(ParserConfig {
                block_size: p.block_size,
                zero_votes: p.zero_votes,
            })?;
            let lines = read_lines(&p.src, true)?;
            let mut reviews = parser.parse(&lines)?;
            if let Some(min_votes) = p.min_votes {
                reviews = filter_by_min_votes(&reviews, min_votes);
            }
            if p.clean {
                reviews = CleanText.transform_all(reviews);
            }

            let mut wr = JsonLinesWriter::new(BufWriter::new(File::create(&p.dst)?));
            wr.write(reviews)?;
            wr.flush()?;
        }

        cli::ReviewParse::Stats(s) => {
            let parser = Parser::new(ParserConfig {
                block_size: s.block_size,
                zero_votes: s.zero_votes,
            })?;
            let lines = read_lines(&s.src, true)?;
            let stats = compute_stats(&parser.parse(&lines)?);
            println!("{}", serde_json::to_string_pretty(&stats)?);

            let expected = ExpectedStats {
                products: s.products,
                users: s.users,
                reviews: s.reviews,
            };
            stats.validate(&expected)?;
        }

        cli::ReviewParse::Export(e) => {
            let config = match e.config {
                Some(path) => Config::from_path(&path)?,
                None => Config::default(),
            };
            let manifest = Pipeline::new(e.src, e.dst, config).run()?;
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
    };
    Ok(())
}
