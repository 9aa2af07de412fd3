//! Comparative credit report rendering.

pub mod summary;
