use chrono::NaiveDate;
use credit_compare::core::lender::{LenderId, LenderOffer, OfferCatalog, ProductType};
use credit_compare::core::request::{IncomeType, LoanRequest, LoanTerm};
use credit_compare::engine::comparison::ComparisonEngine;
use credit_compare::engine::installment::EngineError;
use credit_compare::report::summary::{ClientDetails, CreditReport};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Full pipeline test: request → comparison → report.
#[test]
fn full_pipeline_reference_scenario() {
    // Price 100,000, 20% down, 240 months, built-in three-bank catalog.
    let request = LoanRequest::new(dec!(100_000), dec!(20), LoanTerm::Months(240))
        .with_income_type(IncomeType::PublicEmployee)
        .with_preferred_product(ProductType::InflationIndexed);
    let catalog = OfferCatalog::argentina();
    assert_eq!(catalog.len(), 3);

    let result = ComparisonEngine::compare_request(&request, &catalog).unwrap();
    assert_eq!(result.financed_principal(), dec!(80_000));
    assert_eq!(result.term_months(), 240);
    assert!(!result.is_fully_funded());

    // Ranked ascending; the 3.5% UVA offer wins.
    let rates: Vec<Decimal> = result
        .quotes()
        .iter()
        .map(|q| q.offer.annual_rate_pct())
        .collect();
    assert_eq!(rates, vec![dec!(3.5), dec!(6.5), dec!(9.0)]);
    assert_eq!(result.best().offer.lender().as_str(), "Banco Nación");

    // 80,000 × (1 + 0.035 × 20) / 240 = 566.666...
    let expected = dec!(80_000) * dec!(1.7) / dec!(240);
    assert!((result.best().estimated_installment - expected).abs() < dec!(0.000001));

    // Report carries the ranking and the client details.
    let details = ClientDetails::new("Ana Pérez", "J. Gómez", "Torre Norte")
        .with_date(NaiveDate::from_ymd_opt(2026, 8, 25).unwrap());
    let report = CreditReport::new(details, request, result);
    let text = report.to_string();
    assert!(text.contains("Client: Ana Pérez"));
    assert!(text.contains("Date: 25/08/2026"));
    assert!(text.contains("Recommended offer: Banco Nación"));
    assert_eq!(text.matches("Lender: ").count(), 3);
}

#[test]
fn years_and_months_terms_agree() {
    let by_years = LoanRequest::new(dec!(100_000), dec!(20), LoanTerm::Years(20));
    let by_months = LoanRequest::new(dec!(100_000), dec!(20), LoanTerm::Months(240));
    let catalog = OfferCatalog::argentina();

    let a = ComparisonEngine::compare_request(&by_years, &catalog).unwrap();
    let b = ComparisonEngine::compare_request(&by_months, &catalog).unwrap();
    assert_eq!(
        a.best().estimated_installment,
        b.best().estimated_installment
    );
}

#[test]
fn custom_rate_joins_the_ranking() {
    let mut catalog = OfferCatalog::argentina();
    catalog.add(LenderOffer::custom(dec!(2.0)));

    let result = ComparisonEngine::compare(dec!(80_000), 240, &catalog).unwrap();
    assert_eq!(result.quotes().len(), 4);
    assert_eq!(result.best().offer.lender().as_str(), "Custom rate");

    // A worse custom rate does not displace the catalog winner.
    let mut catalog = OfferCatalog::argentina();
    catalog.add(LenderOffer::custom(dec!(12.0)));
    let result = ComparisonEngine::compare(dec!(80_000), 240, &catalog).unwrap();
    assert_eq!(result.best().offer.lender().as_str(), "Banco Nación");
}

#[test]
fn fully_funded_request_is_informational_not_an_error() {
    let request = LoanRequest::new(dec!(300_000), dec!(100), LoanTerm::Years(15));
    let catalog = OfferCatalog::argentina();

    let result = ComparisonEngine::compare_request(&request, &catalog).unwrap();
    assert!(result.is_fully_funded());
    assert_eq!(result.financed_principal(), Decimal::ZERO);
    assert_eq!(result.best().estimated_installment, Decimal::ZERO);
}

#[test]
fn failure_modes_are_explicit() {
    let catalog = OfferCatalog::argentina();
    assert_eq!(
        ComparisonEngine::compare(dec!(80_000), 0, &catalog).unwrap_err(),
        EngineError::InvalidTerm { term_months: 0 }
    );
    assert_eq!(
        ComparisonEngine::compare(dec!(80_000), 240, &OfferCatalog::new()).unwrap_err(),
        EngineError::NoOffersAvailable
    );
}

#[test]
fn max_term_is_advisory_only() {
    // Banco Provincia caps at 20 years; a 30-year request is still quoted.
    let request = LoanRequest::new(dec!(100_000), dec!(20), LoanTerm::Years(30));
    let catalog = OfferCatalog::argentina();
    let result = ComparisonEngine::compare_request(&request, &catalog).unwrap();
    assert!(result
        .quotes()
        .iter()
        .any(|q| q.offer.lender() == &LenderId::new("Banco Provincia")));
}

#[test]
fn catalog_json_round_trip() {
    let catalog = OfferCatalog::argentina();
    let json = serde_json::to_string(&catalog).unwrap();
    let back: OfferCatalog = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), catalog.len());
    assert_eq!(back.offers()[0].lender(), catalog.offers()[0].lender());
    assert_eq!(
        back.offers()[2].annual_rate_pct(),
        catalog.offers()[2].annual_rate_pct()
    );
}

#[test]
fn comparison_json_exposes_structured_rows() {
    let result =
        ComparisonEngine::compare(dec!(80_000), 240, &OfferCatalog::argentina()).unwrap();
    let json = serde_json::to_string_pretty(&result).unwrap();
    assert!(json.contains("Banco Nación"));
    assert!(json.contains("estimated_installment"));
}
