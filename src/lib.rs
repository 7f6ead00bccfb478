//! Micro-benchmarks for ordered-collection stores: bulk insertion into list
//! and sorted set variants, and single-fetch neighbor lookups over them.

pub mod config;
pub mod fixture;
pub mod neighbor;
pub mod store;
pub mod timing;
