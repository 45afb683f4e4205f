//! Domain layer containing ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `ranking` - Ingestion, matrix shaping, weights, selection and presentation

pub mod foundation;
pub mod ranking;
