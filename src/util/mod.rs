//! Utilities around corpus loading: statistics reporting and test resources
pub mod corpus_stats;
