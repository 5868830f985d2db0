/*! Review transformers.

Transforms reviews by rewriting their content. Transformers consume a [crate::corpus::ParsedReview] and return a new one,
or nothing when the review is left without text.

!*/

mod clean;
mod transform;

pub use clean::{clean_text, CleanText};
pub use transform::Transform;
