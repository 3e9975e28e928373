// Copyright 2024 Martin Pool

//! `factorial-calculator`: compute 5! by iterative multiplication and print it.

mod factorial;

use std::env;
use std::io;

use anyhow::Result;
use tracing::debug;
use tracing::Level;
use tracing_subscriber::prelude::*;

use crate::factorial::factorial;

/// The fixed demonstration input; process arguments are never read.
const DEMO_INPUT: i32 = 5;

/// Set up a global tracing subscriber writing to stderr, keeping stdout
/// reserved for the demonstration line.
///
/// The level defaults to `info` and can be changed through the
/// `FACTORIAL_TRACE_LEVEL` environment variable.
fn setup_global_trace() -> Result<()> {
    let level = match env::var("FACTORIAL_TRACE_LEVEL") {
        Ok(value) => value.parse()?,
        Err(_) => Level::INFO,
    };
    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(level_filter);
    tracing_subscriber::registry().with(stderr_layer).init();
    Ok(())
}

fn main() -> Result<()> {
    setup_global_trace()?;
    let number = DEMO_INPUT;
    let result = factorial(number);
    debug!(number, result, "computed factorial");
    println!("Factorial of {number} is: {result}");
    Ok(())
}
