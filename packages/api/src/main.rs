use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use webcache::cli::Cli;
use webcache::{WebCache, browser, logging, render};

fn main() -> ExitCode {
    let cli = Cli::parse_lenient();
    logging::init_tracing(cli.verbose);

    for flag in &cli.ignored {
        tracing::debug!(target: "webcache::cli", flag = flag.as_str(), "ignoring unrecognised flag");
    }

    let result = run(&cli);

    // Independent of the fetch outcome.
    if cli.open_browser {
        browser::open_in_browser(&cli.url, &mut io::stdout());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("webcache: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let client = WebCache::builder().cache_dir(&cli.cache_dir).build()?;

    let outcome = client
        .process(&cli.url)
        .with_context(|| format!("could not fetch {}", cli.url))?;

    let mut stdout = io::stdout().lock();
    render::write_outcome(&outcome, &mut stdout)?;
    stdout.flush()?;

    tracing::debug!(
        target: "webcache::client",
        source = ?outcome.source(),
        key = %outcome.key(),
        "done"
    );
    Ok(())
}
