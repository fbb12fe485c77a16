//! `coletor-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod ean;
pub mod error;

pub use ean::Ean;
pub use error::{DomainError, DomainResult};
