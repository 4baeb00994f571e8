// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Backend**: Where the content service lives and how long to wait for it
//! - **Logging**: Default tracing filter

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default backend root when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout in seconds.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Tracing filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "brainstash=info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
};
