//! Shared fixtures: in-memory HAR archives shaped like feed API captures.

pub mod har_fixture;
