use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::guide::GuideOptions;

/// Guides you through getting a MobileFaceNet / MediaPipe face model.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Directory the downloaded model is saved to
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Download the MediaPipe model without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// List the known model sources and exit
    #[arg(long)]
    pub list: bool,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

impl CliArgs {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn guide_options(&self) -> GuideOptions {
        GuideOptions {
            dir: self.dir.clone(),
            assume_yes: self.yes,
        }
    }
}
