//! Text cleaning before tokenization.
//!
//! Lower-cases text and collapses every run of non alphanumeric characters
//! (punctuation, symbols, whitespace) into a single space.
//!
//! Example:
//! ```text
//! Great product!!  Would   BUY again... :)
//! ```
//!
//! will be transformed into
//!
//! ```text
//! great product would buy again
//! ```
use itertools::Itertools;

use crate::corpus::ParsedReview;

use super::Transform;

/// Lower-case `text`, replace runs of punctuation and whitespace by a single space and trim.
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .join(" ")
}

/// [Transform] that applies [clean_text] on review text.
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanText;

impl Transform for CleanText {
    fn transform_own(&self, review: ParsedReview) -> Option<ParsedReview> {
        let text = clean_text(review.text());
        review.with_text(text)
    }
}
