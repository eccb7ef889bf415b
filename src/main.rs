use std::io;

mod cli;
mod download;
mod guide;
mod progress;
mod sources;

use download::HttpFetcher;
use guide::Outcome;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();

    if args.list {
        sources::list_sources(&mut io::stdout().lock())?;
        return Ok(());
    }

    let fetcher = HttpFetcher::new(args.timeout())?;
    let outcome = guide::run(
        io::stdin().lock(),
        io::stdout().lock(),
        &fetcher,
        &args.guide_options(),
    )?;

    match outcome {
        Outcome::Downloaded(path) => log::info!("model saved to {}", path.display()),
        Outcome::Failed => log::debug!("walkthrough finished without a model"),
        Outcome::Skipped => log::debug!("download skipped"),
    }

    Ok(())
}
