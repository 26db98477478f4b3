//! Shared test helpers for `shipyard-core` integration tests.
//!
//! These helpers provide an in-memory upstream and cache so the catalog tests
//! can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod mocks;
