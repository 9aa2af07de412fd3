use crate::core::lender::{LenderOffer, OfferCatalog};
use crate::core::request::LoanRequest;
use crate::engine::installment::{estimate_installment, total_repayment, EngineError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One lender's quote within a comparison: the offer plus the installment
/// estimated for the requested principal and term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferQuote {
    /// The catalog offer this quote was computed from.
    pub offer: LenderOffer,
    /// Estimated periodic installment.
    pub estimated_installment: Decimal,
    /// Principal plus the flat interest charge over the full term.
    pub total_repaid: Decimal,
}

/// Ranked comparison of all catalog offers for one loan request.
///
/// Rows are ordered ascending by estimated installment; offers with equal
/// installments keep their catalog order. The best offer is the first row.
/// Results are derived data, recomputed from scratch on every request and
/// never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// The financed principal the quotes were computed on. The same value
    /// for every row, since it depends only on the request.
    financed_principal: Decimal,
    /// Normalized loan term in months.
    term_months: u32,
    /// Quotes sorted ascending by installment.
    quotes: Vec<OfferQuote>,
}

impl ComparisonResult {
    pub fn financed_principal(&self) -> Decimal {
        self.financed_principal
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// All quotes, cheapest first.
    pub fn quotes(&self) -> &[OfferQuote] {
        &self.quotes
    }

    /// The quote with the lowest estimated installment.
    ///
    /// The comparison is only constructed from a non-empty catalog, so a
    /// best quote always exists.
    pub fn best(&self) -> &OfferQuote {
        &self.quotes[0]
    }

    /// True when the down payment covers the full price and there is
    /// nothing to finance. Informational, not a fault: every installment
    /// is zero in this state.
    pub fn is_fully_funded(&self) -> bool {
        self.financed_principal == Decimal::ZERO
    }
}

impl std::fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Credit Comparison ===")?;
        writeln!(f, "Financed principal: {}", self.financed_principal)?;
        writeln!(f, "Term:               {} months", self.term_months)?;
        if self.is_fully_funded() {
            writeln!(f, "Note: down payment covers the full price; no amount to finance.")?;
        }
        writeln!(f)?;
        for (i, quote) in self.quotes.iter().enumerate() {
            writeln!(
                f,
                "{}. {} ({}) — rate {}% — installment {:.2}",
                i + 1,
                quote.offer.lender(),
                quote.offer.product(),
                quote.offer.annual_rate_pct(),
                quote.estimated_installment
            )?;
        }
        let best = self.best();
        writeln!(
            f,
            "\nBest offer: {} at {:.2} per month",
            best.offer.lender(),
            best.estimated_installment
        )?;
        Ok(())
    }
}

/// The core comparison engine.
///
/// Stateless and pure: every call recomputes the full ranking from its
/// arguments and the catalog it is handed, so concurrent requests need no
/// coordination beyond passing independently constructed inputs.
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Quote every catalog offer for a validated principal and term, rank
    /// ascending by installment, and identify the best offer.
    ///
    /// The sort is stable: offers producing identical installments keep
    /// their relative catalog order, so the earliest catalog entry wins
    /// ties for best offer.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoOffersAvailable`] when the catalog is empty.
    /// - [`EngineError::InvalidTerm`] when `term_months` is zero.
    pub fn compare(
        principal: Decimal,
        term_months: u32,
        catalog: &OfferCatalog,
    ) -> Result<ComparisonResult, EngineError> {
        if catalog.is_empty() {
            return Err(EngineError::NoOffersAvailable);
        }

        let mut quotes = Vec::with_capacity(catalog.len());
        for offer in catalog.offers() {
            let installment = estimate_installment(principal, offer.annual_rate_pct(), term_months)?;
            quotes.push(OfferQuote {
                offer: offer.clone(),
                estimated_installment: installment,
                total_repaid: total_repayment(principal, offer.annual_rate_pct(), term_months),
            });
        }

        // Vec::sort_by is stable; catalog order survives among equal installments.
        quotes.sort_by(|a, b| a.estimated_installment.cmp(&b.estimated_installment));

        Ok(ComparisonResult {
            financed_principal: principal,
            term_months,
            quotes,
        })
    }

    /// Compare a full loan request against a catalog.
    ///
    /// Derives the financed principal from the request and delegates to
    /// [`ComparisonEngine::compare`].
    pub fn compare_request(
        request: &LoanRequest,
        catalog: &OfferCatalog,
    ) -> Result<ComparisonResult, EngineError> {
        Self::compare(request.financed_principal(), request.term_months(), catalog)
    }
}
