// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

use collections::Collection;

mod cli;
use cli::display;
use cli::input::{split_elements, strip_trailing_newline, InsertSpec, SplitOptions};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Render {
            items,
            text,
            input,
            separator,
            trim,
            remove_empty,
            insert,
            remove,
            get,
            json,
            stats,
        } => {
            let options = SplitOptions {
                separator,
                trim,
                remove_empty,
            };
            load_elements(items, text, input, &options).and_then(|elements| {
                run_render(elements, &insert, &remove, get, json, stats)
            })
        }
        Commands::Stress { size, budget_ms } => run_stress(size, budget_ms),
    };

    if let Err(e) = outcome {
        display::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Positional items, or the split contents of `--text` / `--input`.
fn load_elements(
    items: Vec<String>,
    text: Option<String>,
    input: Option<std::path::PathBuf>,
    options: &SplitOptions,
) -> Result<Vec<String>> {
    if let Some(text) = text {
        return Ok(split_elements(&text, options));
    }
    if let Some(path) = input {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(split_elements(strip_trailing_newline(&content), options));
    }
    Ok(items)
}

fn run_render(
    elements: Vec<String>,
    inserts: &[InsertSpec],
    removals: &[usize],
    get: Option<usize>,
    json: bool,
    stats: bool,
) -> Result<()> {
    let mut collection = Collection::from(elements);

    for spec in inserts {
        collection
            .insert_at(spec.index, spec.value.clone())
            .with_context(|| format!("insert_at({}, {})", spec.index, spec.value))?;
    }
    for &index in removals {
        collection
            .remove_at(index)
            .with_context(|| format!("remove_at({})", index))?;
    }

    if stats {
        display::status("count", &display::format_count(collection.count()));
        display::status("capacity", &display::format_count(collection.capacity()));
    }

    match (get, json) {
        (Some(index), false) => {
            let element = collection
                .get(index)
                .with_context(|| format!("get({})", index))?;
            println!("{}", element);
        }
        (Some(index), true) => {
            let element = collection
                .get(index)
                .with_context(|| format!("get({})", index))?;
            println!("{}", serde_json::to_string(element)?);
        }
        (None, false) => println!("{}", collection),
        (None, true) => println!("{}", serde_json::to_string(&collection)?),
    }
    Ok(())
}

/// Bulk-append `size` elements, then remove them one by one from the highest
/// index down to 0, timing both phases against `budget_ms`.
fn run_stress(size: usize, budget_ms: u64) -> Result<()> {
    let budget = budget_ms as f64;
    eprintln!(
        "stress: {} elements, {}",
        display::format_count(size),
        display::detail(&format!("budget {}ms per phase", budget_ms))
    );

    let mut collection = Collection::new();
    let start = Instant::now();
    collection.add_range(0..size);
    let append_ms = start.elapsed().as_secs_f64() * 1000.0;
    display::status("add_range", &display::timing_ms(append_ms, budget));
    display::status(
        "capacity",
        &display::format_count(collection.capacity()),
    );

    if collection.count() != size || collection.capacity() < collection.count() {
        bail!(
            "add_range left count {} and capacity {}, expected count {}",
            collection.count(),
            collection.capacity(),
            size
        );
    }

    let start = Instant::now();
    for index in (0..size).rev() {
        collection
            .remove_at(index)
            .with_context(|| format!("remove_at({})", index))?;
    }
    let removal_ms = start.elapsed().as_secs_f64() * 1000.0;
    display::status("remove_at", &display::timing_ms(removal_ms, budget));

    let rendering = collection.to_string();
    if rendering != "[]" {
        bail!("expected [] after removing every element, got {}", rendering);
    }
    if append_ms > budget || removal_ms > budget {
        bail!(
            "over budget: add_range {:.1}ms, remove_at {:.1}ms, budget {}ms",
            append_ms,
            removal_ms,
            budget_ms
        );
    }

    display::success("within budget");
    Ok(())
}
