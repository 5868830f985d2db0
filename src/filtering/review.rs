//! review-level filtering
use crate::corpus::ParsedReview;

use super::Filter;

/// Vote count filter.
/// Returns `false` if the provided review got less than [MinVotes::min_votes] votes.
///
/// [MinVotes::min_votes] is 10 by default.
pub struct MinVotes {
    min_votes: u32,
}

impl MinVotes {
    /// specify a minimum number of votes
    pub fn with_min_votes(min_votes: u32) -> Self {
        Self { min_votes }
    }

    /// Get a reference to the filter's min votes.
    pub fn min_votes(&self) -> &u32 {
        &self.min_votes
    }
}

impl Filter<&ParsedReview> for MinVotes {
    fn detect(&self, review: &ParsedReview) -> bool {
        review.total_votes() >= self.min_votes
    }
}

impl Default for MinVotes {
    fn default() -> Self {
        MinVotes { min_votes: 10 }
    }
}

/// Keep reviews that got at least `min_votes` votes, preserving order.
pub fn filter_by_min_votes(reviews: &[ParsedReview], min_votes: u32) -> Vec<ParsedReview> {
    let filter = MinVotes::with_min_votes(min_votes);
    reviews
        .iter()
        .filter(|&review| filter.detect(review))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(product: &str, helpful: u32, total: u32) -> ParsedReview {
        let ratio = if total == 0 {
            0.0
        } else {
            f64::from(helpful) / f64::from(total)
        };
        ParsedReview::new(
            product.to_string(),
            "U".to_string(),
            helpful,
            total,
            "text".to_string(),
            ratio,
        )
    }

    #[test]
    fn min_votes_default() {
        let f = MinVotes::default();
        assert_eq!(f.min_votes(), &10);
        assert!(f.detect(&review("P", 0, 10)));
        assert!(!f.detect(&review("P", 9, 9)));
    }

    #[test]
    fn subset_in_order() {
        let reviews = vec![
            review("P0", 1, 12),
            review("P1", 1, 3),
            review("P2", 5, 10),
            review("P3", 0, 0),
            review("P4", 20, 40),
        ];
        let kept = filter_by_min_votes(&reviews, 10);
        let ids: Vec<&str> = kept.iter().map(|r| r.product_id()).collect();
        assert_eq!(ids, vec!["P0", "P2", "P4"]);
        assert!(kept.iter().all(|r| r.total_votes() >= 10));
        // input untouched
        assert_eq!(reviews.len(), 5);
    }

    #[test]
    fn zero_threshold_keeps_everything() {
        let reviews = vec![review("P0", 0, 0), review("P1", 1, 1)];
        assert_eq!(filter_by_min_votes(&reviews, 0), reviews);
    }
}
