//! Foundational types: lenders, offers, the offer catalog, and loan requests.

pub mod lender;
pub mod request;
