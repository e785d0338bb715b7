//! Parser tests.
//!
//! - `parser`: grammar forms, tree shape, and every parse error
//! - `properties`: generated documents for idempotence and tag matching
