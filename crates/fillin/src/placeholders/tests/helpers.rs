//! Shared fixtures for expansion tests

use super::*;

/// Placeholder set used by the scenario tests.
pub(super) fn game_placeholders() -> Placeholders {
    Placeholders::builder()
        .add("player", "Alice")
        .add("score", 42)
        .build()
}
