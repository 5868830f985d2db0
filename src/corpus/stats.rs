//! Corpus statistics.
//!
//! [CorpusStats] are computed once over parsed reviews and can be checked against reference counts
//! with [CorpusStats::validate]. A mismatch is a [StatsMismatch], which is not a parsing error.
use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::ParsedReview;

/// Distinct products, distinct users and number of reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub products: usize,
    pub users: usize,
    pub reviews: usize,
}

/// Reference counts. Unset counts are not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectedStats {
    pub products: Option<usize>,
    pub users: Option<usize>,
    pub reviews: Option<usize>,
}

impl ExpectedStats {
    pub fn is_empty(&self) -> bool {
        self.products.is_none() && self.users.is_none() && self.reviews.is_none()
    }
}

/// A single count that differs from its reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    pub field: &'static str,
    pub expected: usize,
    pub actual: usize,
}

/// Every count that differs from its reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsMismatch {
    discrepancies: Vec<Discrepancy>,
}

impl StatsMismatch {
    /// Get a reference to the mismatch's discrepancies.
    pub fn discrepancies(&self) -> &[Discrepancy] {
        self.discrepancies.as_ref()
    }
}

impl fmt::Display for StatsMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "corpus stats mismatch: {}",
            self.discrepancies
                .iter()
                .map(|d| format!("{} expected {}, got {}", d.field, d.expected, d.actual))
                .join("; ")
        )
    }
}

impl CorpusStats {
    /// Compare with reference counts, reporting every differing count.
    pub fn validate(&self, expected: &ExpectedStats) -> Result<(), StatsMismatch> {
        let discrepancies: Vec<Discrepancy> = [
            ("products", expected.products, self.products),
            ("users", expected.users, self.users),
            ("reviews", expected.reviews, self.reviews),
        ]
        .into_iter()
        .filter_map(|(field, expected, actual)| match expected {
            Some(expected) if expected != actual => Some(Discrepancy {
                field,
                expected,
                actual,
            }),
            _ => None,
        })
        .collect();

        if discrepancies.is_empty() {
            Ok(())
        } else {
            Err(StatsMismatch { discrepancies })
        }
    }
}

/// Count distinct products, distinct users and reviews in a single pass.
pub fn compute_stats(reviews: &[ParsedReview]) -> CorpusStats {
    let mut products = HashSet::new();
    let mut users = HashSet::new();
    for review in reviews {
        products.insert(review.product_id());
        users.insert(review.user_id());
    }

    CorpusStats {
        products: products.len(),
        users: users.len(),
        reviews: reviews.len(),
    }
}
