//! Tests for placeholder expansion
//!
//! Organized into focused submodules: expansion laws and end-to-end
//! scenarios, delimiter edge cases, strict mode, the serde surface, and
//! property tests.

use super::*;

// Shared fixtures
mod helpers;





// Property tests
mod properties;
