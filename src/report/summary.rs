use crate::core::request::LoanRequest;
use crate::engine::comparison::ComparisonResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifying details for the people and project a report is issued for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    /// Borrower name.
    pub client: String,
    /// Advising agent name.
    pub advisor: String,
    /// Property or development project name.
    pub project: String,
    /// Issue date of the report.
    pub date: Option<NaiveDate>,
}

impl ClientDetails {
    pub fn new(
        client: impl Into<String>,
        advisor: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            client: client.into(),
            advisor: advisor.into(),
            project: project.into(),
            date: None,
        }
    }

    /// Set the issue date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// A written comparative credit report.
///
/// Bundles the client details, the request parameters, and the ranked
/// comparison into one serializable document. The `Display` impl renders
/// the plain-text form; `serde` gives the JSON form. The report layer has
/// no knowledge of how the comparison was computed — it only formats
/// structured data handed to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditReport {
    /// Unique identifier for this report.
    id: Uuid,
    details: ClientDetails,
    request: LoanRequest,
    comparison: ComparisonResult,
}

impl CreditReport {
    pub fn new(details: ClientDetails, request: LoanRequest, comparison: ComparisonResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            details,
            request,
            comparison,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn details(&self) -> &ClientDetails {
        &self.details
    }

    pub fn request(&self) -> &LoanRequest {
        &self.request
    }

    pub fn comparison(&self) -> &ComparisonResult {
        &self.comparison
    }
}

impl std::fmt::Display for CreditReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Comparative Mortgage Credit Report")?;
        writeln!(f, "==================================")?;
        writeln!(
            f,
            "Client: {} | Advisor: {} | Project: {}",
            self.details.client, self.details.advisor, self.details.project
        )?;
        if let Some(date) = self.details.date {
            writeln!(f, "Date: {}", date.format("%d/%m/%Y"))?;
        }
        writeln!(f)?;
        writeln!(f, "Property price:     {:.2}", self.request.property_price())?;
        writeln!(
            f,
            "Down payment:       {}% ({:.2})",
            self.request.down_payment_pct(),
            self.request.down_payment_amount()
        )?;
        writeln!(f, "Term:               {} months", self.request.term_months())?;
        if let Some(income) = self.request.income_type() {
            writeln!(f, "Income type:        {}", income)?;
        }
        if let Some(product) = self.request.preferred_product() {
            writeln!(f, "Stated preference:  {}", product)?;
        }
        writeln!(f)?;

        if self.comparison.is_fully_funded() {
            writeln!(f, "The down payment covers the full price; no amount to finance.")?;
            return Ok(());
        }

        for quote in self.comparison.quotes() {
            writeln!(
                f,
                "Lender: {} | Product: {} | Rate: {}% | Installment: ${:.2} | Total repaid: ${:.2}",
                quote.offer.lender(),
                quote.offer.product(),
                quote.offer.annual_rate_pct(),
                quote.estimated_installment,
                quote.total_repaid
            )?;
        }

        let best = self.comparison.best();
        writeln!(
            f,
            "\nRecommended offer: {} at ${:.2} per month.",
            best.offer.lender(),
            best.estimated_installment
        )?;
        Ok(())
    }
}
