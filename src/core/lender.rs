use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a lending institution.
///
/// A lender is typically a bank, but any entity that publishes a mortgage
/// rate offer can participate in a comparison.
///
/// # Examples
///
/// ```
/// use credit_compare::core::lender::LenderId;
///
/// let nacion = LenderId::new("Banco Nación");
/// let ciudad = LenderId::new("Banco Ciudad");
/// assert_ne!(nacion, ciudad);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LenderId(String);

impl LenderId {
    /// Create a new lender identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this lender ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LenderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Mortgage product category.
///
/// Argentine lenders market three broad families: fixed nominal rate,
/// inflation-indexed (UVA, "Unidad de Valor Adquisitivo"), and mixed
/// fixed/indexed products. The category is descriptive; it does not
/// change how the installment estimate is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    /// Fixed nominal annual rate.
    FixedRate,
    /// Inflation-indexed (UVA) product.
    InflationIndexed,
    /// Mixed fixed/indexed product.
    Mixed,
}

impl ProductType {
    /// Parse a product label as used in catalog files (`fixed`, `uva`, `mixed`).
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "fixed" | "fixed_rate" | "fija" => Some(Self::FixedRate),
            "uva" | "inflation_indexed" | "indexed" => Some(Self::InflationIndexed),
            "mixed" | "mixta" | "mixto" => Some(Self::Mixed),
            _ => None,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FixedRate => "Fixed",
            Self::InflationIndexed => "UVA",
            Self::Mixed => "Mixed",
        };
        write!(f, "{}", label)
    }
}

/// A published mortgage rate offer from one lender.
///
/// Offers are immutable reference data. The comparison engine operates on
/// an ordered catalog of offers and never mutates them.
///
/// `max_term_years` is advisory: the reference catalogs publish it but no
/// eligibility check is performed against the requested term.
///
/// # Examples
///
/// ```
/// use credit_compare::core::lender::{LenderId, LenderOffer, ProductType};
/// use rust_decimal_macros::dec;
///
/// let offer = LenderOffer::new(
///     LenderId::new("Banco Nación"),
///     ProductType::InflationIndexed,
///     dec!(3.5),
///     30,
/// );
/// assert_eq!(offer.annual_rate_pct(), dec!(3.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderOffer {
    /// The lender publishing this offer.
    lender: LenderId,
    /// Product family of the offer.
    product: ProductType,
    /// Nominal annual rate, in percent. Must be non-negative.
    annual_rate_pct: Decimal,
    /// Advisory maximum term, in years. Not enforced.
    max_term_years: u32,
}

impl LenderOffer {
    /// Create a new lender offer.
    ///
    /// # Panics
    ///
    /// Panics if `annual_rate_pct` is negative.
    pub fn new(
        lender: LenderId,
        product: ProductType,
        annual_rate_pct: Decimal,
        max_term_years: u32,
    ) -> Self {
        assert!(
            annual_rate_pct >= Decimal::ZERO,
            "Annual rate must be non-negative, got {}",
            annual_rate_pct
        );
        Self {
            lender,
            product,
            annual_rate_pct,
            max_term_years,
        }
    }

    /// A one-row custom-rate offer, used when the user overrides the catalog
    /// with their own rate. Appended to the catalog as an ordinary row rather
    /// than handled as a separate code path.
    pub fn custom(annual_rate_pct: Decimal) -> Self {
        Self::new(
            LenderId::new("Custom rate"),
            ProductType::FixedRate,
            annual_rate_pct,
            30,
        )
    }

    // --- Accessors ---

    pub fn lender(&self) -> &LenderId {
        &self.lender
    }

    pub fn product(&self) -> ProductType {
        self.product
    }

    pub fn annual_rate_pct(&self) -> Decimal {
        self.annual_rate_pct
    }

    pub fn max_term_years(&self) -> u32 {
        self.max_term_years
    }
}

/// An ordered collection of lender offers.
///
/// Order matters: ties in the ranked comparison are broken by catalog
/// position, first occurrence winning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferCatalog {
    offers: Vec<LenderOffer>,
}

impl OfferCatalog {
    pub fn new() -> Self {
        Self { offers: Vec::new() }
    }

    /// The built-in reference catalog of Argentine mortgage offers.
    pub fn argentina() -> Self {
        let mut catalog = Self::new();
        catalog.add(LenderOffer::new(
            LenderId::new("Banco Nación"),
            ProductType::InflationIndexed,
            dec!(3.5),
            30,
        ));
        catalog.add(LenderOffer::new(
            LenderId::new("Banco Provincia"),
            ProductType::FixedRate,
            dec!(9.0),
            20,
        ));
        catalog.add(LenderOffer::new(
            LenderId::new("Banco Ciudad"),
            ProductType::Mixed,
            dec!(6.5),
            25,
        ));
        catalog
    }

    pub fn add(&mut self, offer: LenderOffer) {
        self.offers.push(offer);
    }

    pub fn offers(&self) -> &[LenderOffer] {
        &self.offers
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// All unique lenders referenced in this catalog.
    pub fn lenders(&self) -> Vec<LenderId> {
        let mut lenders: Vec<LenderId> =
            self.offers.iter().map(|o| o.lender().clone()).collect();
        lenders.sort();
        lenders.dedup();
        lenders
    }
}

impl FromIterator<LenderOffer> for OfferCatalog {
    fn from_iter<T: IntoIterator<Item = LenderOffer>>(iter: T) -> Self {
        Self {
            offers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lender_equality() {
        let a = LenderId::new("Banco Nación");
        let b = LenderId::new("Banco Nación");
        let c = LenderId::new("Banco Ciudad");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_lender_display() {
        let l = LenderId::new("Banco Provincia");
        assert_eq!(format!("{}", l), "Banco Provincia");
    }

    #[test]
    fn test_product_type_parse() {
        assert_eq!(ProductType::parse("uva"), Some(ProductType::InflationIndexed));
        assert_eq!(ProductType::parse("Fixed"), Some(ProductType::FixedRate));
        assert_eq!(ProductType::parse("mixta"), Some(ProductType::Mixed));
        assert_eq!(ProductType::parse("balloon"), None);
    }

    #[test]
    #[should_panic(expected = "must be non-negative")]
    fn test_offer_negative_rate() {
        LenderOffer::new(
            LenderId::new("Banco Nación"),
            ProductType::FixedRate,
            dec!(-1.0),
            30,
        );
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = OfferCatalog::argentina();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.offers()[0].lender().as_str(), "Banco Nación");
        assert_eq!(catalog.offers()[0].annual_rate_pct(), dec!(3.5));
        assert_eq!(catalog.offers()[1].max_term_years(), 20);
    }

    #[test]
    fn test_catalog_lenders_dedup() {
        let mut catalog = OfferCatalog::new();
        catalog.add(LenderOffer::new(
            LenderId::new("A"),
            ProductType::FixedRate,
            dec!(5),
            20,
        ));
        catalog.add(LenderOffer::new(
            LenderId::new("A"),
            ProductType::Mixed,
            dec!(6),
            20,
        ));
        assert_eq!(catalog.lenders().len(), 1);
    }

    #[test]
    fn test_custom_offer() {
        let offer = LenderOffer::custom(dec!(7.25));
        assert_eq!(offer.annual_rate_pct(), dec!(7.25));
        assert_eq!(offer.product(), ProductType::FixedRate);
    }
}
