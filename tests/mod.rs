//! Integration tests for castgate
//!
//! Tests are organized by component:
//! - catalog_test: Catalog client tests (fetch, parse, transport errors)
//! - intercept_test: Load-request resolution tests
//! - shelf_test: Browse shelf population and display-binding tests
//! - receiver_test: End-to-end flow tests (LOAD -> media-changed)

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
