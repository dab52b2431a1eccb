use root_poly::modules::input::{*};
use root_poly::modules::reconstruct::{*};
use root_poly::modules::report::Report;
use std::io::{self, Read, Write};
use anyhow::Context;
use tracing_subscriber::EnvFilter;


fn main() -> anyhow::Result<()> {

    // logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    // read the whole input blob
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).context("failed to read standard input")?;

    // decode roots, build, verify
    let parsed = parse(&text).context("failed to parse input")?;
    let outcome = reconstruct(&parsed);

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", Report::new(&parsed, &outcome))?;
    stdout.flush()?;
    Ok(())
}
