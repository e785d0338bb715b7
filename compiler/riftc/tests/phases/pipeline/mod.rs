//! Whole-unit compile tests: source text in, output string or diagnostic out.

mod diagnostics;
mod modes;
mod scenarios;
