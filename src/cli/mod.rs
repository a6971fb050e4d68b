// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the typeahead command-line interface.
//!
//! Two subcommands: `complete` to run prefix completion over an input record,
//! and `inspect` to parse a record and report vocabulary and index
//! statistics. Both read a file argument or, when it is omitted, stdin to
//! EOF.

pub mod display;

use clap::{Parser, Subcommand};

use typeahead::DEFAULT_LIMIT;

#[derive(Parser)]
#[command(
    name = "typeahead",
    about = "Ranked prefix completion over a weighted vocabulary",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Complete the record's prefixes and print one block per match
    Complete {
        /// Input file; reads stdin to EOF when omitted
        file: Option<String>,

        /// Maximum completions returned per prefix
        #[arg(short = 'k', long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Emit results as a JSON array instead of plain blocks
        #[arg(long)]
        json: bool,
    },

    /// Parse a record and display vocabulary and index statistics
    Inspect {
        /// Input file; reads stdin to EOF when omitted
        file: Option<String>,

        /// Index limit used for the statistics
        #[arg(short = 'k', long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}
