//! # credit-compare
//!
//! Mortgage credit comparison and installment estimation engine.
//!
//! Given a loan request (property price, down payment, term) and a catalog
//! of lender rate offers, this engine computes the financed principal,
//! estimates a periodic installment per lender, ranks the offers, and
//! identifies the cheapest one.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: lenders, offers, catalog, loan requests
//! - **engine** — Installment estimation and offer comparison
//! - **report** — Comparative credit report rendering
//!
//! The installment model is a simple-interest-over-term approximation: one
//! flat interest charge on the full principal for the full term, spread
//! evenly across all periods. It is deliberately not an amortizing-loan
//! formula.

pub mod core;
pub mod engine;
pub mod report;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::lender::{LenderId, LenderOffer, OfferCatalog, ProductType};
    pub use crate::core::request::{IncomeType, LoanRequest, LoanTerm};
    pub use crate::engine::comparison::{ComparisonEngine, ComparisonResult, OfferQuote};
    pub use crate::engine::installment::{estimate_installment, financed_principal, EngineError};
    pub use crate::report::summary::{ClientDetails, CreditReport};
}
