//! Minimal CLI: num_of_cases → to_tie.hpp
use anyhow::Context;
use clap::Parser;

use crate::config::GeneratorConfig;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate the `to_tie` dispatch header for aggregates of up to num_of_cases + 1 fields
#[derive(Parser, Debug)]
#[command(name = "to_tie generator", version)]
pub struct CommandLineInterface {
    /// Number of cases to generate
    num_of_cases: u32,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    /// Exits with a usage message on a missing or non-integer argument.
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn num_of_cases(&self) -> u32 {
        self.num_of_cases
    }
    pub fn run(&self) -> anyhow::Result<()> {
        let cfg = GeneratorConfig::default();
        crate::output::generate(self.num_of_cases, &cfg)
            .with_context(|| format!("generating {} for num_of_cases = {}", cfg.output.display(), self.num_of_cases))?;
        Ok(())
    }
}
