// Command line interface module
// Resolves where settings live and which values the window starts with

use clap::Parser;
use std::path::PathBuf;

use crate::settings::{default_settings_path, Settings, SettingsStore};

/// dockshell - A dockable desktop application shell
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "dockshell")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Settings file to load on startup and write on exit
    #[arg(short, long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Ignore the settings file and start from defaults (it is still written on exit)
    #[arg(long, default_value = "false")]
    pub reset_settings: bool,
}

/// Settings the application starts with, and where they are saved
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub settings: Settings,
    pub settings_path: PathBuf,
}

impl Args {
    pub fn settings_path(&self) -> PathBuf {
        self.settings.clone().unwrap_or_else(default_settings_path)
    }

    /// Defaults, then the settings file unless `--reset-settings` was given.
    /// A broken settings file is logged and otherwise ignored.
    pub fn startup_config(&self) -> StartupConfig {
        let settings_path = self.settings_path();
        let mut store = SettingsStore::default();

        if self.reset_settings {
            log::info!("Ignoring {} (--reset-settings)", settings_path.display());
        } else {
            match store.load(&settings_path) {
                Ok(true) => log::info!("Loaded settings from {}", settings_path.display()),
                Ok(false) => log::info!(
                    "No settings at {}, using defaults",
                    settings_path.display()
                ),
                Err(err) => log::warn!("{}", err),
            }
        }

        StartupConfig {
            settings: store.get().clone(),
            settings_path,
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
