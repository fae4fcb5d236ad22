use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "trusthub", version, about = "Trust Hub privacy portal for the terminal")]
pub struct Cli {
    /// Settings file (JSON). Defaults to the platform config dir when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Section shown at startup (cookies, rights, policies, security, transparency).
    #[arg(long, value_name = "ID")]
    pub section: Option<String>,

    /// Report the global privacy control signal as set.
    #[arg(long, conflicts_with = "no_gpc")]
    pub gpc: bool,

    /// Report the global privacy control signal as explicitly unset.
    #[arg(long)]
    pub no_gpc: bool,

    /// Open the identifier modal with this value on startup.
    #[arg(long, value_name = "UUID")]
    pub show_uuid: Option<String>,

    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl Cli {
    pub fn global_privacy_control(&self) -> Option<bool> {
        match (self.gpc, self.no_gpc) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
