//! Installment estimation and offer comparison.

pub mod comparison;
pub mod installment;
