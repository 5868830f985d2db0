/*! Filtering utilities

Filters operate on parsed reviews.

Filters implement [filter::Filter]: stateless, immutable detection (two equal inputs give two equal outputs).
Detection returns `true` for items to keep.
! */
mod filter;
mod review;

pub use filter::Filter;
pub use review::{filter_by_min_votes, MinVotes};
