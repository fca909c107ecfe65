//! Indian-locale rupee formatting.
//!
//! Amounts are shown in whole rupees with lakh/crore digit grouping: the
//! last three digits form one group, everything above groups in twos
//! (`1,23,45,678`). The compact form switches to lakhs from ₹1,00,000.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::time_value::round_half_up;
use crate::types::Money;

const RUPEE: &str = "₹";
const LAKH: Decimal = dec!(100_000);

/// Full rupee amount, e.g. `₹5,00,000`.
pub fn format_inr(amount: Money) -> String {
    let rounded = round_half_up(amount, 0);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("{sign}{RUPEE}{}", group_indian(&digits))
}

/// Compact form used for income and limits, e.g. `₹5.0L`.
pub fn format_inr_compact(amount: Money) -> String {
    if amount >= LAKH {
        let lakhs = round_half_up(amount / LAKH, 1);
        format!("{RUPEE}{lakhs:.1}L")
    } else {
        format_inr(amount)
    }
}

/// Percentage with a fixed number of decimal places, e.g. `83.3%`.
pub fn format_percent(value: Decimal, dp: u32) -> String {
    let rounded = round_half_up(value, dp);
    format!("{rounded:.prec$}%", prec = dp as usize)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
