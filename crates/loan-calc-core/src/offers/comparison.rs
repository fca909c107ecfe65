//! Side-by-side quotes for one loan request across several lenders.
//!
//! Offers are ranked by rate first, then each is priced with the standard
//! EMI calculation at its own rate. Requests above an offer's ceiling are
//! still quoted but flagged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::ranking::{rank, LoanOffer};
use crate::amortization::emi::{compute, LoanRequest};
use crate::error::LoanCalcError;
use crate::types::*;
use crate::LoanCalcResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonInput {
    pub principal: Money,
    pub term_months: i64,
    pub offers: Vec<LoanOffer>,
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferQuote {
    /// 1-based position after ranking.
    pub rank: u32,
    pub id: String,
    pub annual_rate_percent: Percent,
    pub monthly_installment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub within_max_principal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_probability_percent: Option<Percent>,
    pub recommended: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonOutput {
    pub quotes: Vec<OfferQuote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_id: Option<String>,
    /// Monthly saving of the recommended offer over the most expensive one.
    pub max_installment_spread: Money,
}

/// Rank the offers and quote each one for the requested loan.
pub fn build_comparison(input: &ComparisonInput) -> LoanCalcResult<ComparisonOutput> {
    let ranked = rank(input.offers.clone());

    let mut quotes = Vec::with_capacity(ranked.len());
    for (i, ranked_offer) in ranked.into_iter().enumerate() {
        let offer = ranked_offer.offer;
        let priced = compute(&LoanRequest {
            principal: input.principal,
            annual_rate_percent: offer.annual_rate_percent,
            term_months: input.term_months,
        })
        .map_err(|e| match e {
            LoanCalcError::InvalidInput { field, reason } => LoanCalcError::InvalidInput {
                field: format!("offers[{}].{field}", offer.id),
                reason,
            },
            other => other,
        })?;

        quotes.push(OfferQuote {
            rank: i as u32 + 1,
            within_max_principal: input.principal <= offer.max_principal,
            approval_probability_percent: offer.approval_probability_percent,
            monthly_installment: priced.monthly_installment,
            total_payment: priced.total_payment,
            total_interest: priced.total_interest,
            annual_rate_percent: offer.annual_rate_percent,
            id: offer.id,
            recommended: ranked_offer.recommended,
        });
    }

    let max_installment_spread = match (
        quotes.iter().map(|q| q.monthly_installment).min(),
        quotes.iter().map(|q| q.monthly_installment).max(),
    ) {
        (Some(lo), Some(hi)) => hi - lo,
        _ => Decimal::ZERO,
    };

    Ok(ComparisonOutput {
        recommended_id: quotes.first().map(|q| q.id.clone()),
        quotes,
        max_installment_spread,
    })
}

/// Comparison wrapped in the standard output envelope.
pub fn compare_offers(
    input: &ComparisonInput,
) -> LoanCalcResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let comparison = build_comparison(input)?;

    for quote in comparison.quotes.iter().filter(|q| !q.within_max_principal) {
        warnings.push(format!(
            "Requested principal {} exceeds the maximum offered by '{}'.",
            input.principal, quote.id
        ));
    }
    if comparison.quotes.is_empty() {
        warnings.push("No offers supplied; nothing to compare.".into());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "ranking": "annual_rate_percent ascending, stable",
        "pricing": "fixed-rate reducing-balance EMI per offer",
    });

    Ok(with_metadata(
        "Lender comparison for a single loan request",
        &assumptions,
        warnings,
        elapsed,
        comparison,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn offer(id: &str, rate: Decimal, max: Decimal) -> LoanOffer {
        LoanOffer {
            id: id.into(),
            annual_rate_percent: rate,
            max_principal: max,
            processing_fee_descriptor: None,
            approval_probability_percent: Some(dec!(85)),
            extra: serde_json::Map::new(),
        }
    }

    fn sample_input() -> ComparisonInput {
        ComparisonInput {
            principal: dec!(500_000),
            term_months: 36,
            offers: vec![
                offer("icici", dec!(11.0), dec!(2_500_000)),
                offer("hdfc", dec!(10.5), dec!(4_000_000)),
                offer("axis", dec!(10.75), dec!(400_000)),
            ],
        }
    }

    #[test]
    fn test_quotes_are_ranked_and_priced() {
        let out = build_comparison(&sample_input()).unwrap();
        let ids: Vec<_> = out.quotes.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["hdfc", "axis", "icici"]);
        assert_eq!(out.quotes[0].monthly_installment, dec!(16251));
        assert_eq!(out.quotes[0].rank, 1);
        assert!(out.quotes[0].recommended);
        assert!(!out.quotes[1].recommended);
        assert_eq!(out.recommended_id.as_deref(), Some("hdfc"));
    }

    #[test]
    fn test_installments_rise_with_rank() {
        let out = build_comparison(&sample_input()).unwrap();
        assert!(out.quotes[0].monthly_installment <= out.quotes[1].monthly_installment);
        assert!(out.quotes[1].monthly_installment <= out.quotes[2].monthly_installment);
        assert_eq!(
            out.max_installment_spread,
            out.quotes[2].monthly_installment - out.quotes[0].monthly_installment
        );
    }

    #[test]
    fn test_flags_requests_above_ceiling() {
        let out = compare_offers(&sample_input()).unwrap();
        let axis = out.result.quotes.iter().find(|q| q.id == "axis").unwrap();
        assert!(!axis.within_max_principal);
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("'axis'"));
    }

    #[test]
    fn test_empty_offer_list() {
        let out = compare_offers(&ComparisonInput {
            principal: dec!(500_000),
            term_months: 36,
            offers: vec![],
        })
        .unwrap();
        assert!(out.result.quotes.is_empty());
        assert_eq!(out.result.recommended_id, None);
        assert_eq!(out.result.max_installment_spread, Decimal::ZERO);
    }

    #[test]
    fn test_negative_offer_rate_names_offer() {
        let mut input = sample_input();
        input.offers.push(offer("bad", dec!(-1), dec!(1_000_000)));
        match build_comparison(&input) {
            Err(LoanCalcError::InvalidInput { field, .. }) => {
                assert_eq!(field, "offers[bad].annual_rate_percent")
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_request_rejected() {
        let mut input = sample_input();
        input.term_months = 0;
        assert!(build_comparison(&input).is_err());
    }
}
