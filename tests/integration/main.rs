//! Integration tests for Creeper
//!
//! These run the real HTTP fetcher against wiremock servers.

mod crawl_tests;
mod report_tests;
