//! Command layer integration tests.
//!
//! Commands run against a model seeded with the typical records; each test
//! checks both the feedback and the state the model is left in.

#[path = "../support/mod.rs"]
mod support;

mod delete;
mod edit;
mod find_list;
