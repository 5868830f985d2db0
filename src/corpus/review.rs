use serde::Serialize;

/// A validated review, built from exactly one block of corpus lines.
///
/// Fields are read-only: a [ParsedReview] is never mutated once built.
/// Transformations (see [crate::transformers]) produce new values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedReview {
    product_id: String,
    user_id: String,
    helpful_votes: u32,
    total_votes: u32,
    text: String,
    helpfulness_ratio: f64,
}

impl ParsedReview {
    pub(crate) fn new(
        product_id: String,
        user_id: String,
        helpful_votes: u32,
        total_votes: u32,
        text: String,
        helpfulness_ratio: f64,
    ) -> Self {
        Self {
            product_id,
            user_id,
            helpful_votes,
            total_votes,
            text,
            helpfulness_ratio,
        }
    }

    /// Get a reference to the review's product id.
    pub fn product_id(&self) -> &str {
        self.product_id.as_ref()
    }

    /// Get a reference to the review's user id.
    pub fn user_id(&self) -> &str {
        self.user_id.as_ref()
    }

    /// Number of "found helpful" votes.
    pub fn helpful_votes(&self) -> u32 {
        self.helpful_votes
    }

    /// Number of votes cast.
    pub fn total_votes(&self) -> u32 {
        self.total_votes
    }

    /// Get a reference to the review's text.
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    /// `helpful_votes / total_votes`, in `[0, 1]`.
    pub fn helpfulness_ratio(&self) -> f64 {
        self.helpfulness_ratio
    }

    /// Consumes the review and returns a new one with `text` as its text.
    ///
    /// Returns `None` if `text` is empty once trimmed, as reviews always hold some text.
    pub fn with_text(self, text: String) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            ..self
        })
    }
}
