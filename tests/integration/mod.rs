//! Integration test suite for reqfaker
//!
//! End-to-end tests for the `reqfaker` binary and the public engine API.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **common**: `TestProject` with an isolated config file and command builder
//! - **engine**: substitution, tag reuse, and sink records through the library API
//! - **transform**: `reqfaker transform` on files and stdin
//! - **generate**: `reqfaker generate` values and error reporting
//! - **menu**: `reqfaker menu` text and JSON output
//! - **config**: configuration file handling and overrides

mod common;

mod engine;
mod generate;
mod menu;
mod transform;
