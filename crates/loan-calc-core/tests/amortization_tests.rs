use loan_calc_core::amortization::{self, LoanRequest, ScheduleInput};
use loan_calc_core::LoanCalcError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn request(principal: Decimal, rate: Decimal, term: i64) -> LoanRequest {
    LoanRequest {
        principal,
        annual_rate_percent: rate,
        term_months: term,
    }
}

// ===========================================================================
// EMI tests
// ===========================================================================

#[test]
fn test_calculator_default_loan() {
    // The calculator widget opens on 5L / 10.5% / 36 months
    let r = amortization::compute(&request(dec!(500_000), dec!(10.5), 36)).unwrap();
    assert_eq!(r.monthly_installment, dec!(16251));
    assert_eq!(r.total_payment, dec!(16251) * dec!(36));
    assert_eq!(r.total_interest, r.total_payment - dec!(500_000));
}

#[test]
fn test_known_installments() {
    // Exact values: 8884.8788, 8678.2323, 8046.2262
    let cases = [
        (dec!(100_000), dec!(12), 12, dec!(8885)),
        (dec!(1_000_000), dec!(8.5), 240, dec!(8678)),
        (dec!(1_000_000), dec!(9), 360, dec!(8046)),
    ];
    for (principal, rate, term, expected) in cases {
        let r = amortization::compute(&request(principal, rate, term)).unwrap();
        assert_eq!(
            r.monthly_installment, expected,
            "principal={principal} rate={rate} term={term}"
        );
    }
}

#[test]
fn test_slider_extremes() {
    // Widest slider range: 50L at 20% over 84 months, 1L at 8% over 12 months
    let big = amortization::compute(&request(dec!(5_000_000), dec!(20), 84)).unwrap();
    assert!(big.total_payment > dec!(5_000_000));
    let small = amortization::compute(&request(dec!(100_000), dec!(8), 12)).unwrap();
    assert!(small.total_payment > dec!(100_000));
}

#[test]
fn test_zero_rate_has_no_interest() {
    let r = amortization::compute(&request(dec!(360_000), Decimal::ZERO, 36)).unwrap();
    assert_eq!(r.monthly_installment, dec!(10_000));
    assert_eq!(r.total_interest, Decimal::ZERO);
    assert_eq!(r.total_payment, dec!(360_000));
}

#[test]
fn test_shares_sum_to_one_hundred() {
    let r = amortization::compute(&request(dec!(750_000), dec!(13.25), 60)).unwrap();
    assert_eq!(r.principal_share + r.interest_share, dec!(100));
    assert!(r.interest_share > Decimal::ZERO);
}

#[test]
fn test_very_long_term_is_stable() {
    let r = amortization::compute(&request(dec!(10_000_000), dec!(15), 600)).unwrap();
    // Interest-only floor: 10M x 1.25% = 125000
    assert!(r.monthly_installment > dec!(125_000));
    assert!(r.monthly_installment < dec!(126_000));
}

#[test]
fn test_rejects_each_invalid_field() {
    let cases = [
        (request(dec!(0), dec!(10), 12), "principal"),
        (request(dec!(1000), dec!(-1), 12), "annual_rate_percent"),
        (request(dec!(1000), dec!(10), 0), "term_months"),
    ];
    for (req, expected_field) in cases {
        match amortization::compute(&req) {
            Err(LoanCalcError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidInput for {expected_field}, got {other:?}"),
        }
    }
}

#[test]
fn test_principal_near_decimal_max_fails_cleanly() {
    let req = request(dec!(70_000_000_000_000_000_000_000_000_000), dec!(10.5), 36);
    match amortization::calculate_emi(&req) {
        Err(LoanCalcError::InvalidInput { field, .. }) => assert_eq!(field, "principal"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

// ===========================================================================
// Schedule tests
// ===========================================================================

#[test]
fn test_schedule_matches_summary() {
    let input = ScheduleInput {
        request: request(dec!(500_000), dec!(10.5), 36),
        first_payment_date: None,
    };
    let s = amortization::build_schedule(&input).unwrap();
    assert_eq!(s.summary.monthly_installment, dec!(16251));

    // Every month but the last pays the rounded installment
    assert!(s.rows[..35]
        .iter()
        .all(|r| r.installment == s.summary.monthly_installment));

    let interest: Decimal = s.rows.iter().map(|r| r.interest).sum();
    assert_eq!(interest, s.total_scheduled_interest);
    assert_eq!(s.total_scheduled_payment - s.total_scheduled_interest, dec!(500_000));
}

#[test]
fn test_schedule_json_from_camel_case() {
    let input: ScheduleInput = serde_json::from_str(
        r#"{ "principal": 100000, "annualRatePercent": 12, "termMonths": 12,
             "firstPaymentDate": "2025-04-05" }"#,
    )
    .unwrap();
    let s = amortization::build_schedule(&input).unwrap();
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["rows"][0]["dueDate"], "2025-04-05");
    assert_eq!(v["rows"][11]["dueDate"], "2026-03-05");
    assert_eq!(v["rows"][11]["closingBalance"], serde_json::json!(0.0));
}

#[test]
fn test_schedule_rejects_unbounded_zero_rate_term() {
    let input = ScheduleInput {
        request: request(dec!(100_000), Decimal::ZERO, 4_000_000_000),
        first_payment_date: None,
    };
    match amortization::calculate_schedule(&input) {
        Err(LoanCalcError::InvalidInput { field, .. }) => assert_eq!(field, "term_months"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}
