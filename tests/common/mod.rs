//! Shared test utilities

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;
