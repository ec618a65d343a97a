//! bushou - radical co-occurrence analysis for classical Chinese texts
//!
//! Every character of a corpus is decomposed into its radicals. Radicals
//! found within a small window of each other are counted as co-occurring,
//! and each pair's count is scored against the count expected if radicals
//! were placed independently.

pub mod cli;
pub mod config;
pub mod cooccurrence;
pub mod corpus;
pub mod dictionary;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod stats;
