//! Test doubles shared across unit tests.

pub mod mocks;
