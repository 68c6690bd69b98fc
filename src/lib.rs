//! reqfaker - placeholder substitution for HTTP request text
//!
//! reqfaker scans request text for macros of the form
//! `{{<prefix>.<kind>(<args>)}}` and replaces each with a generated value:
//! UUIDs, random strings over a fixed or caller-supplied charset, or strings
//! matching a regular expression. A value can be stored under a tag so later
//! references in the same flow receive a prefix of the same value instead of
//! a fresh one.
//!
//! The crate is meant to be embedded in an intercepting proxy: the host calls
//! [`engine::FakerEngine::transform`] for each outgoing request and offers
//! [`engine::FakerEngine::menu_entries`] for inserting macros. The `reqfaker`
//! binary wraps the same engine for files and pipes.
//!
//! # Core Modules
//!
//! - [`engine`] - the substitution engine, its builder, and observability sinks
//! - [`placeholder`] - macro scanning and argument parsing
//! - [`generator`] - value generation per kind, including the optional regex capability
//! - [`cache`] - the tag cache with truncation and extension semantics
//! - [`menu`] - insertion menu entries
//!
//! ## Supporting Modules
//!
//! - [`config`] - `~/.reqfaker/config.toml` loading and validation
//! - [`core`] - error types and user-facing error reporting
//! - [`constants`] - defaults, sentinels, and charsets
//! - [`cli`] - the command-line front end
//!
//! # Macro Grammar
//!
//! | Macro | Value |
//! |-------|-------|
//! | `{{faker.uuid()}}` | random v4 UUID |
//! | `{{faker.alpha(10)}}` | 10 letters |
//! | `{{faker.alphanumeric(length=16, tag=session)}}` | 16 chars, reused for tag `session` |
//! | `{{faker.lower()}}` / `upper` / `numeric` | default length (8) |
//! | `{{faker.custom(10, abc123!@#)}}` | 10 chars from the given charset |
//! | `{{faker.regex([a-z]{3}[0-9]{2})}}` | a string matching the pattern |
//!
//! Failed placeholders become `INVALID_PLACEHOLDER`; `regex` without the regex
//! capability becomes `REGEX_NOT_SUPPORTED(<pattern>)`.
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Replace placeholders in a saved request
//! reqfaker transform request.http --output request.out.http
//!
//! # Pipe through stdin, failing if nothing was replaced
//! cat request.http | reqfaker transform --check
//!
//! # Generate a single value
//! reqfaker generate alphanumeric 24
//!
//! # Show the insertion menu
//! reqfaker menu --format json
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod engine;
pub mod generator;
pub mod menu;
pub mod placeholder;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
