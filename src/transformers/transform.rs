//! Transform trait.

use log::debug;

use crate::corpus::ParsedReview;
pub trait Transform {
    /// Takes ownership of [ParsedReview] and returns a transformed one.
    ///
    /// Returns `None` when nothing is left of the review (e.g. its text is emptied).
    fn transform_own(&self, review: ParsedReview) -> Option<ParsedReview>;

    /// Transform every review of `reviews`, in order, dropping the ones that are emptied.
    fn transform_all(&self, reviews: Vec<ParsedReview>) -> Vec<ParsedReview> {
        reviews
            .into_iter()
            .filter_map(|review| {
                let (product_id, user_id) =
                    (review.product_id().to_string(), review.user_id().to_string());
                let transformed = self.transform_own(review);
                if transformed.is_none() {
                    debug!(
                        "review of {} by {} has no text left after transform, skipping",
                        product_id, user_id
                    );
                }
                transformed
            })
            .collect()
    }
}
