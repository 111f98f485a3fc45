//! Scoring Module - Weighted site scoring and ranking.
//!
//! Takes a `WeightVector` keyed by data column and a `SiteTable`, and
//! produces `RankedSite`s where rank 1 is the most favorable site.
//!
//! # Components
//!
//! - `WeightVector` - Column-keyed weights, re-keyed from criterion order
//! - `SiteTable` / `SiteRecord` - Raw per-site values (possibly missing) and position
//! - `normalize_column` - Worst-case imputation followed by min–max scaling
//! - `ScoringEngine` - Weighted combination, stable sort, dense ranks
//!
//! Lower is better everywhere: a normalized value of 0 is the closest site.

mod engine;
mod normalization;
mod site;
mod weights;

pub use engine::{RankedSite, ScoringEngine, DEFAULT_TOP_N};
pub use normalization::normalize_column;
pub use site::{GeoPoint, SiteRecord, SiteTable};
pub use weights::WeightVector;
