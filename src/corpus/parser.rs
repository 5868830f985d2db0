/*! Block parser

Partitions lines into blocks of [ParserConfig::block_size] lines and builds one [ParsedReview] per block.

Fields are located by their tag prefix (see [FieldTag]) rather than by their offset in the block,
so field order does not matter and unknown tags are ignored.

Parsing is atomic: the first structural error aborts the whole call and no reviews are returned.
!*/
use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Error, MalformedCorpus};

use super::{FieldTag, ParsedReview};

/// Number of lines per review in the public review dumps.
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// What to do with reviews that got no votes (`0/0`), whose ratio is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ZeroVotesPolicy {
    /// Drop the review.
    Exclude,
    /// Keep the review, using `sentinel` as its ratio.
    Keep { sentinel: f64 },
    /// Fail with [Error::FieldParse].
    Reject,
}

impl Default for ZeroVotesPolicy {
    fn default() -> Self {
        Self::Exclude
    }
}

/// Parses `exclude`, `reject` or `keep=<sentinel>`.
impl FromStr for ZeroVotesPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "exclude" => Ok(Self::Exclude),
            "reject" => Ok(Self::Reject),
            other => {
                let sentinel = other
                    .strip_prefix("keep=")
                    .ok_or_else(|| {
                        format!(
                            "unknown zero votes policy {:?} (expected exclude, reject or keep=<ratio>)",
                            other
                        )
                    })?
                    .parse::<f64>()
                    .map_err(|e| format!("invalid sentinel in {:?}: {}", other, e))?;
                Ok(Self::Keep { sentinel })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub block_size: usize,
    pub zero_votes: ZeroVotesPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            zero_votes: ZeroVotesPolicy::default(),
        }
    }
}

impl ParserConfig {
    /// Checks that a block can hold every required field and that the sentinel ratio is in `[0, 1]`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.block_size < FieldTag::REQUIRED.len() {
            return Err(Error::Config(format!(
                "block size must be at least {}, got {}",
                FieldTag::REQUIRED.len(),
                self.block_size
            )));
        }
        if let ZeroVotesPolicy::Keep { sentinel } = self.zero_votes {
            if !(0.0..=1.0).contains(&sentinel) {
                return Err(Error::Config(format!(
                    "zero votes sentinel must be in [0, 1], got {}",
                    sentinel
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser, failing on invalid configurations.
    pub fn new(config: ParserConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get a reference to the parser's config.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `lines` into reviews, preserving block order.
    ///
    /// Reviews with no votes are handled following [ParserConfig::zero_votes].
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<ParsedReview>, Error> {
        let block_size = self.config.block_size;
        if lines.len() % block_size != 0 {
            return Err(MalformedCorpus::LineCount {
                block_size,
                actual: lines.len(),
                expected: (lines.len() / block_size + 1) * block_size,
            }
            .into());
        }

        let nb_blocks = lines.len() / block_size;
        let mut reviews = Vec::with_capacity(nb_blocks);
        for (idx, block) in lines.chunks(block_size).enumerate() {
            if let Some(review) = self.parse_block(idx, block)? {
                reviews.push(review);
            }
        }

        info!(
            "parsed {} reviews from {} blocks ({} without votes excluded)",
            reviews.len(),
            nb_blocks,
            nb_blocks - reviews.len()
        );
        Ok(reviews)
    }

    /// Parse a single block. Returns `None` when the review is excluded by the zero votes policy.
    fn parse_block<S: AsRef<str>>(
        &self,
        idx: usize,
        block: &[S],
    ) -> Result<Option<ParsedReview>, Error> {
        let product_id = non_empty_field(idx, block, FieldTag::ProductId)?;
        let user_id = non_empty_field(idx, block, FieldTag::UserId)?;
        let text = non_empty_field(idx, block, FieldTag::Text)?;

        let (line, fraction) = find_field(idx, block, FieldTag::Helpfulness)?;
        let (helpful_votes, total_votes) =
            parse_helpfulness(&fraction).map_err(|reason| Error::FieldParse {
                block: idx,
                line: line.to_string(),
                reason,
            })?;

        let helpfulness_ratio = if total_votes == 0 {
            match self.config.zero_votes {
                ZeroVotesPolicy::Exclude => {
                    debug!("block {}: no votes, excluding review", idx);
                    return Ok(None);
                }
                ZeroVotesPolicy::Keep { sentinel } => sentinel,
                ZeroVotesPolicy::Reject => {
                    return Err(Error::FieldParse {
                        block: idx,
                        line: line.to_string(),
                        reason: "zero total votes".to_string(),
                    })
                }
            }
        } else {
            f64::from(helpful_votes) / f64::from(total_votes)
        };

        Ok(Some(ParsedReview::new(
            product_id,
            user_id,
            helpful_votes,
            total_votes,
            text,
            helpfulness_ratio,
        )))
    }
}

/// Parse `lines` with the default configuration ([DEFAULT_BLOCK_SIZE] lines per review, zero votes excluded).
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Vec<ParsedReview>, Error> {
    Parser::default().parse(lines)
}

/// Drop characters that survive decoding but are not text (byte order marks, NUL).
fn canonical(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '\u{feff}' && *c != '\0')
        .collect()
}

/// Find the first line of `block` tagged with `tag`, returning the line and its normalized value.
fn find_field<S: AsRef<str>>(
    idx: usize,
    block: &[S],
    tag: FieldTag,
) -> Result<(&str, String), Error> {
    block
        .iter()
        .map(|line| line.as_ref())
        .find_map(|line| {
            tag.strip(line.trim_start_matches('\u{feff}'))
                .map(|value| (line, canonical(value).trim().to_string()))
        })
        .ok_or(Error::MissingField { block: idx, tag })
}

fn non_empty_field<S: AsRef<str>>(idx: usize, block: &[S], tag: FieldTag) -> Result<String, Error> {
    let (line, value) = find_field(idx, block, tag)?;
    if value.is_empty() {
        return Err(MalformedCorpus::EmptyField {
            block: idx,
            tag,
            line: line.to_string(),
        }
        .into());
    }
    Ok(value)
}

/// Parse a `<numerator>/<denominator>` fraction.
fn parse_helpfulness(fraction: &str) -> Result<(u32, u32), String> {
    let (numerator, denominator) = fraction
        .split_once('/')
        .ok_or_else(|| "expected <numerator>/<denominator>".to_string())?;
    let helpful = parse_count(numerator, "numerator")?;
    let total = parse_count(denominator, "denominator")?;

    if helpful > total {
        return Err(format!(
            "numerator {} exceeds denominator {}",
            helpful, total
        ));
    }
    Ok((helpful, total))
}

/// Parse one side of a fraction: ASCII digits only, no sign.
fn parse_count(side: &str, name: &str) -> Result<u32, String> {
    let side = side.trim();
    if side.is_empty() || !side.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid {} {:?}: expected digits only", name, side));
    }
    side.parse()
        .map_err(|e| format!("invalid {} {:?}: {}", name, side, e))
}
