pub mod comparison;
pub mod ranking;

pub use comparison::{build_comparison, compare_offers, ComparisonInput, ComparisonOutput, OfferQuote};
pub use ranking::{rank, rank_offers, LoanOffer, RankedOffer};
