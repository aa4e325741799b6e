//! Shared fixtures for the paramguard integration tests.

pub mod fakes;
pub mod fixtures;
