//! End-to-end tests for the NLU results tooling.
//!
//! The tests in `tests/` write real report directories to a temp dir and
//! drive the `compare` and `format` commands through the same argument
//! parsing and dispatch the binary uses.
