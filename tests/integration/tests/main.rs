//! Integration Tests
//!
//! These tests validate the configuration-value core across crates: the
//! layer normalization round trip, the inheritance laws, and the
//! placeholder contract.

mod common;
mod placeholder_contract;
mod values_roundtrip;
