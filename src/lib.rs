//! Rank Explorer - Interactive multi-criteria ranking.
//!
//! This crate loads a table of alternatives scored on several criteria,
//! hands it to an outranking engine (PROMETHEE II style) and keeps a live
//! top-N ranking in step with the user's per-criterion weights.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
