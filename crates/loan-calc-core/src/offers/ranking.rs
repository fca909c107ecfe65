use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::*;

/// A lender's offer as shown in the comparison table.
///
/// Fields the ranker does not know about (bank name, processing time, …)
/// are kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOffer {
    pub id: String,
    pub annual_rate_percent: Percent,
    pub max_principal: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_fee_descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_probability_percent: Option<Percent>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOffer {
    #[serde(flatten)]
    pub offer: LoanOffer,
    pub recommended: bool,
}

/// Order offers by ascending rate and recommend the cheapest.
///
/// The sort is stable: offers quoting the same rate keep their input order,
/// so the earliest-listed of several equally cheap offers is recommended.
pub fn rank(mut offers: Vec<LoanOffer>) -> Vec<RankedOffer> {
    offers.sort_by(|a, b| a.annual_rate_percent.cmp(&b.annual_rate_percent));

    offers
        .into_iter()
        .enumerate()
        .map(|(i, offer)| RankedOffer {
            offer,
            recommended: i == 0,
        })
        .collect()
}

/// Ranking wrapped in the standard output envelope.
pub fn rank_offers(offers: Vec<LoanOffer>) -> ComputationOutput<Vec<RankedOffer>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let ranked = rank(offers);

    if let Some(best) = ranked.first() {
        let tied = ranked
            .iter()
            .filter(|r| r.offer.annual_rate_percent == best.offer.annual_rate_percent)
            .count();
        if tied > 1 {
            warnings.push(format!(
                "{tied} offers share the lowest rate of {}%; '{}' is recommended as the first listed.",
                best.offer.annual_rate_percent, best.offer.id
            ));
        }
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "order": "annual_rate_percent ascending, stable",
        "recommended": "first after sorting",
    });

    with_metadata(
        "Lowest-rate offer ranking",
        &assumptions,
        warnings,
        elapsed,
        ranked,
    )
}
