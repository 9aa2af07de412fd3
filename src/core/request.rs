use crate::core::lender::ProductType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Loan term, as entered by the user.
///
/// Lenders quote terms in years but the installment math runs on months,
/// so the term is normalized to months at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanTerm {
    Years(u32),
    Months(u32),
}

impl LoanTerm {
    /// The term in months. Years convert at 12 months per year.
    pub fn months(self) -> u32 {
        match self {
            Self::Years(y) => y * 12,
            Self::Months(m) => m,
        }
    }
}

impl fmt::Display for LoanTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(y) => write!(f, "{} years", y),
            Self::Months(m) => write!(f, "{} months", m),
        }
    }
}

/// Income regime of the borrower.
///
/// Collected for the advisor's report; it does not participate in the
/// installment computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeType {
    PublicEmployee,
    PrivateEmployee,
    /// Simplified flat-tax regime for small taxpayers.
    Monotributista,
    /// VAT-registered taxpayer.
    RegisteredTaxpayer,
}

impl IncomeType {
    /// Parse an income label as used on the command line.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "public" | "public_employee" => Some(Self::PublicEmployee),
            "private" | "private_employee" => Some(Self::PrivateEmployee),
            "monotributista" | "monotributo" => Some(Self::Monotributista),
            "registered" | "registered_taxpayer" => Some(Self::RegisteredTaxpayer),
            _ => None,
        }
    }
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PublicEmployee => "Public employee",
            Self::PrivateEmployee => "Private employee",
            Self::Monotributista => "Monotributista",
            Self::RegisteredTaxpayer => "Registered taxpayer",
        };
        write!(f, "{}", label)
    }
}

/// A single borrower's loan parameters.
///
/// Constructed fresh from user input for each comparison and discarded
/// afterwards; the engine holds no state between requests. The input layer
/// is responsible for clamping the down payment to [0, 100] and the term
/// to at least one month before constructing a request.
///
/// # Examples
///
/// ```
/// use credit_compare::core::request::{LoanRequest, LoanTerm};
/// use rust_decimal_macros::dec;
///
/// let request = LoanRequest::new(dec!(100_000), dec!(20), LoanTerm::Years(20));
/// assert_eq!(request.financed_principal(), dec!(80_000));
/// assert_eq!(request.term_months(), 240);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Total property price. Must be non-negative.
    property_price: Decimal,
    /// Down payment as a percentage of the property price, in [0, 100].
    down_payment_pct: Decimal,
    /// Normalized loan term in months. At least 1.
    term_months: u32,
    /// Borrower income regime. Reported but not computed on.
    income_type: Option<IncomeType>,
    /// Stated product preference. Reported but not used as a filter.
    preferred_product: Option<ProductType>,
}

impl LoanRequest {
    /// Create a new loan request.
    ///
    /// # Panics
    ///
    /// Panics if `property_price` is negative or `down_payment_pct` is
    /// outside [0, 100].
    pub fn new(property_price: Decimal, down_payment_pct: Decimal, term: LoanTerm) -> Self {
        assert!(
            property_price >= Decimal::ZERO,
            "Property price must be non-negative, got {}",
            property_price
        );
        assert!(
            down_payment_pct >= Decimal::ZERO && down_payment_pct <= Decimal::from(100),
            "Down payment percent must be in [0, 100], got {}",
            down_payment_pct
        );
        Self {
            property_price,
            down_payment_pct,
            term_months: term.months(),
            income_type: None,
            preferred_product: None,
        }
    }

    /// Set the borrower's income regime.
    pub fn with_income_type(mut self, income_type: IncomeType) -> Self {
        self.income_type = Some(income_type);
        self
    }

    /// Set the borrower's stated product preference.
    pub fn with_preferred_product(mut self, product: ProductType) -> Self {
        self.preferred_product = Some(product);
        self
    }

    // --- Accessors ---

    pub fn property_price(&self) -> Decimal {
        self.property_price
    }

    pub fn down_payment_pct(&self) -> Decimal {
        self.down_payment_pct
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    pub fn income_type(&self) -> Option<IncomeType> {
        self.income_type
    }

    pub fn preferred_product(&self) -> Option<ProductType> {
        self.preferred_product
    }

    /// The down payment amount in currency units.
    pub fn down_payment_amount(&self) -> Decimal {
        self.property_price * self.down_payment_pct / Decimal::from(100)
    }

    /// The balance to be financed: price minus down payment.
    ///
    /// Exactly zero when the down payment is 100% — a valid "nothing to
    /// finance" state, not an error.
    pub fn financed_principal(&self) -> Decimal {
        crate::engine::installment::financed_principal(self.property_price, self.down_payment_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_term_normalization() {
        assert_eq!(LoanTerm::Years(20).months(), 240);
        assert_eq!(LoanTerm::Months(18).months(), 18);
    }

    #[test]
    fn test_request_principal() {
        let request = LoanRequest::new(dec!(100_000), dec!(20), LoanTerm::Months(240));
        assert_eq!(request.down_payment_amount(), dec!(20_000));
        assert_eq!(request.financed_principal(), dec!(80_000));
    }

    #[test]
    fn test_full_cash_purchase() {
        let request = LoanRequest::new(dec!(250_000), dec!(100), LoanTerm::Years(10));
        assert_eq!(request.financed_principal(), Decimal::ZERO);
    }

    #[test]
    #[should_panic(expected = "must be in [0, 100]")]
    fn test_down_payment_over_100() {
        LoanRequest::new(dec!(100_000), dec!(101), LoanTerm::Years(10));
    }

    #[test]
    #[should_panic(expected = "must be non-negative")]
    fn test_negative_price() {
        LoanRequest::new(dec!(-1), dec!(20), LoanTerm::Years(10));
    }

    #[test]
    fn test_income_type_parse() {
        assert_eq!(IncomeType::parse("monotributista"), Some(IncomeType::Monotributista));
        assert_eq!(IncomeType::parse("Public"), Some(IncomeType::PublicEmployee));
        assert_eq!(IncomeType::parse("freelance"), None);
    }

    #[test]
    fn test_request_builders() {
        let request = LoanRequest::new(dec!(100_000), dec!(20), LoanTerm::Years(20))
            .with_income_type(IncomeType::PrivateEmployee)
            .with_preferred_product(crate::core::lender::ProductType::InflationIndexed);
        assert_eq!(request.income_type(), Some(IncomeType::PrivateEmployee));
        assert!(request.preferred_product().is_some());
    }
}
