//! Field tags.
//!
//! Each corpus line starts with a tag (`review/text:`, `product/productId:`...) telling which field it holds.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Tags of the fields a review must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldTag {
    ProductId,
    UserId,
    Helpfulness,
    Text,
}

/// Tags that appear in review blocks but are not read.
pub const IGNORED_TAGS: [&str; 4] = [
    "review/profileName:",
    "review/score:",
    "review/time:",
    "review/summary:",
];

impl FieldTag {
    /// Required tags, in the order they appear in the public review dumps.
    pub const REQUIRED: [FieldTag; 4] = [
        FieldTag::ProductId,
        FieldTag::UserId,
        FieldTag::Helpfulness,
        FieldTag::Text,
    ];

    /// Literal line prefix, colon included.
    pub fn prefix(&self) -> &'static str {
        match self {
            FieldTag::ProductId => "product/productId:",
            FieldTag::UserId => "review/userId:",
            FieldTag::Helpfulness => "review/helpfulness:",
            FieldTag::Text => "review/text:",
        }
    }

    /// Returns the raw value of `line` if it holds this field.
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix(self.prefix())
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().trim_end_matches(':'))
    }
}
