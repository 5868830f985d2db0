/*! Corpus block writer.

Writes reviews back in the line-oriented corpus format, so that parsing the output yields the same
ratios and texts.
Blocks are padded with ignored tags (see [IGNORED_TAGS]) up to the block size.
!*/
use std::io::Write;

use crate::{
    corpus::{tag::IGNORED_TAGS, FieldTag, ParsedReview},
    error::Error,
};

use super::WriterTrait;

/// Build the `block_size` lines representing `review`.
pub fn emit_block(review: &ParsedReview, block_size: usize) -> Result<Vec<String>, Error> {
    if block_size < FieldTag::REQUIRED.len() {
        return Err(Error::Config(format!(
            "block size must be at least {}, got {}",
            FieldTag::REQUIRED.len(),
            block_size
        )));
    }

    let mut lines: Vec<String> = FieldTag::REQUIRED
        .iter()
        .map(|tag| {
            let value = match tag {
                FieldTag::ProductId => review.product_id().to_string(),
                FieldTag::UserId => review.user_id().to_string(),
                FieldTag::Helpfulness => {
                    format!("{}/{}", review.helpful_votes(), review.total_votes())
                }
                FieldTag::Text => review.text().to_string(),
            };
            format!("{} {}", tag.prefix(), value)
        })
        .collect();

    let padding = IGNORED_TAGS
        .iter()
        .cycle()
        .take(block_size - lines.len())
        .map(|tag| tag.to_string());
    lines.extend(padding);

    Ok(lines)
}

pub struct BlockWriter<W: Write> {
    handle: W,
    block_size: usize,
}

impl<W: Write> BlockWriter<W> {
    pub fn new(handle: W, block_size: usize) -> Self {
        Self { handle, block_size }
    }

    pub fn into_inner(self) -> W {
        self.handle
    }
}

impl<W: Write> WriterTrait for BlockWriter<W> {
    type Item = ParsedReview;

    fn write_single(&mut self, review: &ParsedReview) -> Result<(), Error> {
        for line in emit_block(review, self.block_size)? {
            self.handle.write_all(line.as_bytes())?;
            self.handle.write_all(b"\n")?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}
