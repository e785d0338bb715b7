//! Tests for the `riftc` binary.

mod commands;
mod render;
