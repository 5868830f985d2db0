/*! Training data preparation

Turns reviews into `(text, label)` pairs for the tokenization/training collaborators,
and splits them into training and validation sets.
!*/
use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::Serialize;

use crate::corpus::ParsedReview;
use crate::transformers::clean_text;

/// A review text labelled with its helpfulness ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelledText {
    pub text: String,
    pub label: f64,
}

/// Build `(text, helpfulness_ratio)` pairs, in review order.
///
/// If `clean` is set, texts go through [clean_text] and reviews left without text are dropped.
pub fn labelled_pairs(reviews: &[ParsedReview], clean: bool) -> Vec<LabelledText> {
    reviews
        .iter()
        .filter_map(|review| {
            let text = if clean {
                clean_text(review.text())
            } else {
                review.text().to_string()
            };
            if text.is_empty() {
                debug!(
                    "review of {} by {} has no text left after cleaning, skipping",
                    review.product_id(),
                    review.user_id()
                );
                return None;
            }
            Some(LabelledText {
                text,
                label: review.helpfulness_ratio(),
            })
        })
        .collect()
}

/// Shuffle `items` with a `seed`ed generator and split them into `(train, validation)`.
///
/// The validation set holds `round(len * validation_fraction)` items, `validation_fraction` being clamped to `[0, 1]`.
pub fn split_train_validation<T>(
    mut items: Vec<T>,
    validation_fraction: f64,
    seed: u64,
) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);

    let fraction = validation_fraction.clamp(0.0, 1.0);
    let nb_validation = ((items.len() as f64) * fraction).round() as usize;
    let validation = items.split_off(items.len() - nb_validation.min(items.len()));

    (items, validation)
}
