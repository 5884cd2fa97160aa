//! Shared test helpers for `autooptix-core` integration tests.
//!
//! These helpers provide reusable fixtures and a lightweight catalogue source
//! so pipeline tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod catalogue;
pub mod fixtures;
