//! RankSitesHandler - Turns user preferences into a ranked list of sites.
//!
//! Three entry points share one pipeline:
//! 1. Derive a column-keyed `WeightVector` (AHP judgments or direct weights)
//! 2. Load the candidate site table
//! 3. Score, rank, and truncate to the configured top N

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::RankingConfig;
use crate::domain::ahp::{
    ConsistencyDiagnostic, CriteriaSet, JudgmentSet, PairwiseResolver, WeightExtractor,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::scoring::{RankedSite, ScoringEngine, WeightVector};
use crate::domain::submission::RankingMethod;
use crate::ports::{SiteSource, SiteSourceError};

/// Command to rank the candidate sites.
#[derive(Debug, Clone)]
pub enum RankSitesCommand {
    /// Pairwise judgments keyed `"<first>__vs__<second>"`.
    Ahp { judgments: JudgmentSet },
    /// Direct weights keyed by data column.
    Wsm { weights: HashMap<String, f64> },
    /// All criteria equally important.
    Default,
}

impl RankSitesCommand {
    pub fn method(&self) -> RankingMethod {
        match self {
            RankSitesCommand::Ahp { .. } | RankSitesCommand::Default => RankingMethod::Ahp,
            RankSitesCommand::Wsm { .. } => RankingMethod::Wsm,
        }
    }
}

/// Result of a ranking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingOutcome {
    pub method: RankingMethod,
    /// Weights as reported to the user, rounded for display.
    pub weights: WeightVector,
    /// Present for AHP rankings only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<ConsistencyDiagnostic>,
    pub top_sites: Vec<RankedSite>,
}

/// Errors that can occur while ranking sites.
#[derive(Debug, thiserror::Error)]
pub enum RankSitesError {
    #[error("Failed to load candidate sites: {0}")]
    SiteData(#[from] SiteSourceError),
}

impl From<RankSitesError> for DomainError {
    fn from(err: RankSitesError) -> Self {
        match err {
            RankSitesError::SiteData(source) => source.into(),
        }
    }
}

impl RankSitesError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RankSitesError::SiteData(_) => ErrorCode::SiteDataUnavailable,
        }
    }
}

/// Handler for ranking requests.
pub struct RankSitesHandler {
    site_source: Arc<dyn SiteSource>,
    criteria: CriteriaSet,
    config: RankingConfig,
}

impl RankSitesHandler {
    pub fn new(
        site_source: Arc<dyn SiteSource>,
        criteria: CriteriaSet,
        config: RankingConfig,
    ) -> Self {
        Self {
            site_source,
            criteria,
            config,
        }
    }

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub async fn handle(&self, cmd: RankSitesCommand) -> Result<RankingOutcome, RankSitesError> {
        let method = cmd.method();

        // 1. Derive weights
        let (weights, consistency) = match cmd {
            RankSitesCommand::Ahp { judgments } => {
                let (weights, diagnostic) = self.ahp_weights(&judgments);
                (weights, Some(diagnostic))
            }
            RankSitesCommand::Default => {
                let (weights, diagnostic) = self.ahp_weights(&JudgmentSet::new());
                (weights, Some(diagnostic))
            }
            RankSitesCommand::Wsm { weights } => {
                let direct = WeightVector::from_direct(&self.criteria, &weights).renormalized();
                if direct.sum() == 0.0 {
                    warn!("All direct weights are zero; every site scores 0");
                }
                (direct, None)
            }
        };

        // 2. Load sites
        let table = self.site_source.load_sites(&self.criteria).await?;

        // 3. Rank
        let top_sites = ScoringEngine::rank_top(&weights, &table, self.config.top_n);

        info!(
            method = method.label(),
            sites = table.len(),
            returned = top_sites.len(),
            "Ranked candidate sites"
        );

        Ok(RankingOutcome {
            method,
            weights: weights.rounded(self.config.weight_decimals),
            consistency,
            top_sites,
        })
    }

    fn ahp_weights(&self, judgments: &JudgmentSet) -> (WeightVector, ConsistencyDiagnostic) {
        for (key, raw) in PairwiseResolver::unrecognized_labels(&self.criteria, judgments) {
            debug!(key, label = raw, "Unrecognized judgment label, treating as Equal");
        }

        let matrix = PairwiseResolver::resolve(&self.criteria, judgments);
        let extracted = WeightExtractor::extract(&matrix);
        let diagnostic = extracted.consistency;

        match diagnostic.cr {
            Some(cr) if cr > self.config.consistency_threshold => warn!(
                cr,
                threshold = self.config.consistency_threshold,
                "Pairwise judgments are inconsistent"
            ),
            None if self.criteria.len() > 2 => {
                warn!(criteria = self.criteria.len(), "Consistency ratio undefined")
            }
            _ => debug!(cr = ?diagnostic.cr, lambda_max = diagnostic.lambda_max, "Consistency checked"),
        }

        (
            WeightVector::from_criteria(&self.criteria, &extracted.weights),
            diagnostic,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::Criterion;
    use crate::domain::scoring::{GeoPoint, SiteRecord, SiteTable};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockSiteSource {
        table: Option<SiteTable>,
        requested_columns: Mutex<Vec<Vec<String>>>,
    }

    impl MockSiteSource {
        fn with_table(table: SiteTable) -> Self {
            Self {
                table: Some(table),
                requested_columns: Mutex::new(Vec::new()),
            }
        }

        fn missing() -> Self {
            Self {
                table: None,
                requested_columns: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SiteSource for MockSiteSource {
        async fn load_sites(&self, criteria: &CriteriaSet) -> Result<SiteTable, SiteSourceError> {
            self.requested_columns
                .lock()
                .unwrap()
                .push(criteria.columns().map(str::to_string).collect());
            self.table
                .clone()
                .ok_or_else(|| SiteSourceError::NotFound("sites.geojson".to_string()))
        }
    }

    fn criteria() -> CriteriaSet {
        CriteriaSet::new(vec![
            Criterion::new("Transit Access", "transit_dist"),
            Criterion::new("Homeless Services Nearby", "homeless_service_dist"),
            Criterion::new("Affordable Housing Nearby", "public_housing_dist"),
        ])
        .unwrap()
    }

    fn sites() -> SiteTable {
        let mut table = SiteTable::new(vec![
            "transit_dist".to_string(),
            "homeless_service_dist".to_string(),
            "public_housing_dist".to_string(),
        ]);
        // close to transit, far from everything else
        table.push(SiteRecord::new(
            GeoPoint::new(37.80, -122.27),
            vec![Some(0.0), Some(10.0), Some(10.0)],
        ));
        // far from transit, close to everything else
        table.push(SiteRecord::new(
            GeoPoint::new(37.81, -122.26),
            vec![Some(10.0), Some(0.0), Some(0.0)],
        ));
        table
    }

    fn handler(source: MockSiteSource) -> RankSitesHandler {
        RankSitesHandler::new(Arc::new(source), criteria(), RankingConfig::default())
    }

    #[tokio::test]
    async fn default_ranking_uses_equal_weights() {
        let handler = handler(MockSiteSource::with_table(sites()));

        let outcome = handler.handle(RankSitesCommand::Default).await.unwrap();

        assert_eq!(outcome.method, RankingMethod::Ahp);
        for (_, weight) in outcome.weights.iter() {
            assert!((weight - 0.3333).abs() < 1e-9);
        }
        let consistency = outcome.consistency.unwrap();
        assert!(consistency.cr.unwrap() < 1e-9);
        // site 1 scores 1/3, site 0 scores 2/3
        assert_eq!(outcome.top_sites[0].lat, 37.81);
        assert_eq!(outcome.top_sites[0].rank, 1);
    }

    #[tokio::test]
    async fn strong_transit_preference_ranks_transit_site_first() {
        let handler = handler(MockSiteSource::with_table(sites()));
        let judgments: JudgmentSet = [
            (
                "Transit Access__vs__Homeless Services Nearby",
                "Transit Access much more",
            ),
            (
                "Transit Access__vs__Affordable Housing Nearby",
                "Transit Access much more",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let outcome = handler
            .handle(RankSitesCommand::Ahp { judgments })
            .await
            .unwrap();

        assert!(outcome.weights.get("transit_dist") > 0.5);
        assert_eq!(outcome.top_sites[0].lat, 37.80);
        assert_eq!(outcome.top_sites[1].rank, 2);
    }

    #[tokio::test]
    async fn wsm_renormalizes_and_ignores_unknown_columns() {
        let handler = handler(MockSiteSource::with_table(sites()));
        let weights = HashMap::from([
            ("transit_dist".to_string(), 3.0),
            ("public_housing_dist".to_string(), 1.0),
            ("unknown_dist".to_string(), 100.0),
        ]);

        let outcome = handler
            .handle(RankSitesCommand::Wsm { weights })
            .await
            .unwrap();

        assert_eq!(outcome.method, RankingMethod::Wsm);
        assert!(outcome.consistency.is_none());
        assert_eq!(outcome.weights.get("transit_dist"), 0.75);
        assert_eq!(outcome.weights.get("homeless_service_dist"), 0.0);
        assert_eq!(outcome.weights.get("public_housing_dist"), 0.25);
        assert_eq!(outcome.weights.len(), 3);
        assert_eq!(outcome.top_sites[0].lat, 37.80);
    }

    #[tokio::test]
    async fn wsm_all_zero_weights_keep_input_order() {
        let handler = handler(MockSiteSource::with_table(sites()));

        let outcome = handler
            .handle(RankSitesCommand::Wsm {
                weights: HashMap::new(),
            })
            .await
            .unwrap();

        assert!(outcome.top_sites.iter().all(|s| s.final_score == 0.0));
        assert_eq!(outcome.top_sites[0].lat, 37.80);
        assert_eq!(outcome.top_sites[1].lat, 37.81);
    }

    #[tokio::test]
    async fn truncates_to_configured_top_n() {
        let source = MockSiteSource::with_table(sites());
        let handler = RankSitesHandler::new(
            Arc::new(source),
            criteria(),
            RankingConfig {
                top_n: 1,
                ..Default::default()
            },
        );

        let outcome = handler.handle(RankSitesCommand::Default).await.unwrap();

        assert_eq!(outcome.top_sites.len(), 1);
        assert_eq!(outcome.top_sites[0].rank, 1);
    }

    #[tokio::test]
    async fn requests_configured_columns() {
        let source = Arc::new(MockSiteSource::with_table(sites()));
        let handler =
            RankSitesHandler::new(source.clone(), criteria(), RankingConfig::default());

        handler.handle(RankSitesCommand::Default).await.unwrap();

        let requested = source.requested_columns.lock().unwrap().clone();
        assert_eq!(
            requested,
            vec![vec![
                "transit_dist".to_string(),
                "homeless_service_dist".to_string(),
                "public_housing_dist".to_string(),
            ]]
        );
    }

    #[tokio::test]
    async fn site_source_failure_is_reported() {
        let handler = handler(MockSiteSource::missing());

        let err = handler.handle(RankSitesCommand::Default).await.unwrap_err();

        assert!(matches!(err, RankSitesError::SiteData(SiteSourceError::NotFound(_))));
        assert_eq!(err.code(), ErrorCode::SiteDataUnavailable);
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::SiteDataUnavailable);
    }

    #[test]
    fn outcome_serializes_weights_in_criterion_order() {
        let outcome = RankingOutcome {
            method: RankingMethod::Wsm,
            weights: WeightVector::from_criteria(&criteria(), &[0.5, 0.25, 0.25]),
            consistency: None,
            top_sites: vec![],
        };

        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(
            json,
            r#"{"method":"wsm","weights":{"transit_dist":0.5,"homeless_service_dist":0.25,"public_housing_dist":0.25},"top_sites":[]}"#
        );
    }
}
