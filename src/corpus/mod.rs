/*! Review corpus parsing

A corpus is a flat sequence of `tag: value` lines, where a fixed number of consecutive lines (a *block*) make up a single review.

- [tag] holds the known field tags,
- [parser] turns lines into [ParsedReview]s,
- [stats] aggregates counts over parsed reviews.
!*/
pub mod parser;
mod review;
pub mod stats;
pub mod tag;

pub use parser::{parse, Parser, ParserConfig, ZeroVotesPolicy, DEFAULT_BLOCK_SIZE};
pub use review::ParsedReview;
pub use stats::{compute_stats, CorpusStats, ExpectedStats, StatsMismatch};
pub use tag::FieldTag;
