use rust_decimal::Decimal;
use thiserror::Error;

/// Errors arising from installment estimation and offer comparison.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The loan term is zero months. The installment estimate divides the
    /// repayment total by the term, so a zero term is rejected up front
    /// instead of surfacing as an infinite or undefined number.
    #[error("loan term must be at least one month, got {term_months}")]
    InvalidTerm { term_months: u32 },
    /// The offer catalog passed to the comparison is empty, so there is no
    /// best offer to identify.
    #[error("no lender offers available to compare")]
    NoOffersAvailable,
}

/// The balance to be financed: property price minus the down payment.
///
/// `price × (1 − pct/100)`. Non-negative for in-range inputs, and exactly
/// zero when the down payment is 100%. Callers are expected to have
/// validated `property_price ≥ 0` and `down_payment_pct ∈ [0, 100]`
/// (see [`crate::core::request::LoanRequest`]).
///
/// # Examples
///
/// ```
/// use credit_compare::engine::installment::financed_principal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(financed_principal(dec!(100_000), dec!(20)), dec!(80_000));
/// assert_eq!(financed_principal(dec!(100_000), dec!(100)), dec!(0));
/// ```
pub fn financed_principal(property_price: Decimal, down_payment_pct: Decimal) -> Decimal {
    property_price * (Decimal::ONE - down_payment_pct / Decimal::from(100))
}

/// Estimate the periodic installment for a principal at a given annual rate
/// over a term in months.
///
/// This is a simple-interest-over-term approximation, reproduced exactly
/// from the reference behavior:
///
/// ```text
/// total = principal × (1 + (rate/100) × (months/12))
/// installment = total / months
/// ```
///
/// One flat interest charge on the full original principal for the full
/// term, spread evenly across all periods. It is not an amortizing-loan
/// formula: the remaining balance is never recomputed per period.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTerm`] when `term_months` is zero.
///
/// # Examples
///
/// ```
/// use credit_compare::engine::installment::estimate_installment;
/// use rust_decimal_macros::dec;
///
/// // 100,000 at 10% over 12 months: 100,000 × 1.10 / 12
/// let installment = estimate_installment(dec!(100_000), dec!(10), 12).unwrap();
/// assert!((installment - dec!(9166.666667)).abs() < dec!(0.001));
/// ```
pub fn estimate_installment(
    principal: Decimal,
    annual_rate_pct: Decimal,
    term_months: u32,
) -> Result<Decimal, EngineError> {
    if term_months == 0 {
        return Err(EngineError::InvalidTerm { term_months });
    }
    let total = total_repayment(principal, annual_rate_pct, term_months);
    Ok(total / Decimal::from(term_months))
}

/// Principal plus the flat interest charge for the full term.
pub fn total_repayment(principal: Decimal, annual_rate_pct: Decimal, term_months: u32) -> Decimal {
    let term_years = Decimal::from(term_months) / Decimal::from(12);
    principal * (Decimal::ONE + annual_rate_pct / Decimal::from(100) * term_years)
}
