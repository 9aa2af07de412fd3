//! End-to-end comparison example.
//!
//! Builds a loan request, ranks the built-in Argentine offer catalog,
//! and renders a written report for the advisor.

use chrono::NaiveDate;
use credit_compare::core::lender::{LenderOffer, OfferCatalog};
use credit_compare::core::request::{IncomeType, LoanRequest, LoanTerm};
use credit_compare::engine::comparison::ComparisonEngine;
use credit_compare::report::summary::{ClientDetails, CreditReport};
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║  credit-compare: Offer Comparison Example    ║");
    println!("╚══════════════════════════════════════════════╝\n");

    // --- Scenario 1: built-in catalog ---
    println!("━━━ Scenario 1: Built-in Catalog ━━━\n");

    let request = LoanRequest::new(dec!(100_000), dec!(20), LoanTerm::Years(20))
        .with_income_type(IncomeType::PrivateEmployee);
    let catalog = OfferCatalog::argentina();

    let result = ComparisonEngine::compare_request(&request, &catalog).unwrap();
    println!("{}", result);

    // --- Scenario 2: custom-rate override joins the ranking ---
    println!("━━━ Scenario 2: Custom Rate Override ━━━\n");

    let mut catalog = OfferCatalog::argentina();
    catalog.add(LenderOffer::custom(dec!(2.75)));

    let result = ComparisonEngine::compare_request(&request, &catalog).unwrap();
    println!("{}", result);

    // --- Scenario 3: written report ---
    println!("━━━ Scenario 3: Written Report ━━━\n");

    let details = ClientDetails::new("Ana Pérez", "J. Gómez", "Torre Norte")
        .with_date(NaiveDate::from_ymd_opt(2026, 8, 25).unwrap());
    let result = ComparisonEngine::compare_request(&request, &OfferCatalog::argentina()).unwrap();
    let report = CreditReport::new(details, request, result);

    println!("{}", report);
}
