//! Integration tests for the fetcher
//!
//! These tests use wiremock to stand up mock HTTP servers and run the
//! full fetch and classify cycle end-to-end.

mod fetch_tests;
