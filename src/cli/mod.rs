// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the collections command-line interface.
//!
//! Two subcommands: `render` builds a collection from the command line,
//! applies inserts and removals, and prints it; `stress` runs the
//! million-element bulk-append and tail-removal scenarios against a time
//! budget.

pub mod display;
pub mod input;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use input::InsertSpec;

#[derive(Parser)]
#[command(
    name = "collections",
    about = "Build, edit and render growable collections",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a collection of strings and print its rendering
    Render {
        /// Elements, in order (ignored when --text or --input is given)
        items: Vec<String>,

        /// Split this text into elements instead of using ITEMS
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,

        /// Read the text to split from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Separator used to split --text/--input
        #[arg(short, long, default_value = ",")]
        separator: String,

        /// Trim whitespace around each split element
        #[arg(long)]
        trim: bool,

        /// Drop empty elements after splitting
        #[arg(long)]
        remove_empty: bool,

        /// Insert VALUE at INDEX (repeatable, applied in order)
        #[arg(long, value_name = "INDEX=VALUE")]
        insert: Vec<InsertSpec>,

        /// Remove the element at INDEX (repeatable, applied after inserts)
        #[arg(long, value_name = "INDEX")]
        remove: Vec<usize>,

        /// Print only the element at INDEX
        #[arg(long, value_name = "INDEX")]
        get: Option<usize>,

        /// Print JSON instead of the bracketed rendering
        #[arg(long)]
        json: bool,

        /// Report count and capacity on stderr
        #[arg(long)]
        stats: bool,
    },

    /// Time bulk append and tail-to-head removal of a large collection
    Stress {
        /// Number of elements
        #[arg(long, default_value = "1000000")]
        size: usize,

        /// Fail if either phase takes longer than this many milliseconds
        #[arg(long, default_value = "10000")]
        budget_ms: u64,
    },
}
