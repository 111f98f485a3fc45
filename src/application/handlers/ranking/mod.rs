//! Ranking command handlers.

mod rank_sites;

pub use rank_sites::{RankSitesCommand, RankSitesError, RankSitesHandler, RankingOutcome};
