//! Commission-adjusted pricing.
//!
//! All math runs on [`Decimal`]; results are rounded to two decimal places
//! with half-away-from-zero, matching how the rates are quoted to users.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Fixed withdrawal fee in percentage points, added on top of the
/// user-selected commission in the customer-facing formula.
pub const WITHDRAWAL_FEE: Decimal = dec!(0.26);

/// Commission carried by the cost-basis button. Selected by exact equality;
/// every other commission value goes through the customer formula.
pub const INTERNAL_COMMISSION: Decimal = dec!(0.26);

const HUNDRED: Decimal = dec!(100);

/// Which formula produced an adjusted rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    /// Commission plus the withdrawal fee.
    Customer,
    /// Commission applied as-is.
    CostBasis,
}

/// Round to two decimal places, half away from zero.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Customer-facing rate: the withdrawal fee is added to the commission.
#[must_use]
pub fn with_commission(rate: Decimal, commission: Decimal) -> Decimal {
    let total = commission + WITHDRAWAL_FEE;
    round2(rate * (Decimal::ONE - total / HUNDRED))
}

/// Cost-basis rate: the commission is applied without the withdrawal fee.
#[must_use]
pub fn with_internal_commission(rate: Decimal, commission: Decimal) -> Decimal {
    round2(rate * (Decimal::ONE - commission / HUNDRED))
}

/// Apply the formula selected by the commission value.
#[must_use]
pub fn adjusted_rate(rate: Decimal, commission: Decimal) -> (Decimal, Formula) {
    if commission == INTERNAL_COMMISSION {
        (with_internal_commission(rate, commission), Formula::CostBasis)
    } else {
        (with_commission(rate, commission), Formula::Customer)
    }
}
