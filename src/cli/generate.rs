//! Print one generated value.
//!
//! The kind and arguments are assembled into a macro and resolved by the
//! engine, so `reqfaker generate custom 10 'abc'` behaves exactly like
//! `{{faker.custom(10, abc)}}` inside a request.

use anyhow::Result;
use clap::Args;

use crate::engine::FakerEngine;
use crate::placeholder::{Placeholder, render_placeholder};

/// Arguments of `reqfaker generate`.
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Generator kind (uuid, alpha, lower, upper, numeric, alphanumeric, custom, regex)
    kind: String,

    /// Macro arguments, e.g. `16` or `length=16` `tag=session`
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,
}

impl GenerateCommand {
    /// Resolve the macro and print its value.
    ///
    /// # Errors
    ///
    /// Returns the resolution error for unknown kinds, malformed lengths,
    /// missing charsets or patterns, and rejected regex patterns.
    pub fn execute(self, engine: &FakerEngine) -> Result<()> {
        let value = self.resolve(engine)?;
        println!("{value}");
        Ok(())
    }

    fn resolve(&self, engine: &FakerEngine) -> Result<String> {
        let placeholder = self.placeholder(engine.prefix());
        tracing::debug!("Resolving {}", placeholder.literal);
        Ok(engine.try_resolve(&placeholder)?)
    }

    fn placeholder(&self, prefix: &str) -> Placeholder {
        let raw_args = self.args.join(", ");
        Placeholder {
            literal: render_placeholder(prefix, &self.kind, &raw_args),
            kind: self.kind.clone(),
            raw_args,
        }
    }
}
