use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod data;
mod ions;
mod report;

pub use config::Config;

/// midkit - MID table input parsing and reporting
#[derive(Parser)]
#[command(name = "midkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an ion definitions file and list the compounds
    Ions {
        /// Ion definitions file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the parsed MID tables as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a data file list and print the file names
    Data {
        /// Data file list path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Write MID tables for every ion definition to a report file
    Report {
        /// Ion definitions file path
        #[arg(value_name = "IONS")]
        ions: PathBuf,

        /// Data file list path
        #[arg(value_name = "DATA")]
        data: PathBuf,

        /// Report file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Overwrite OUTPUT instead of appending to it
        #[arg(long, overrides_with = "append")]
        truncate: bool,

        /// Append to OUTPUT even if the config file asks to truncate
        #[arg(long, overrides_with = "truncate")]
        append: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Ions { file, json } => ions::run(file, json, &config),
        Commands::Data { file } => data::run(file, &config),
        Commands::Report {
            ions,
            data,
            output,
            truncate,
            append,
        } => report::run(ions, data, output, truncate, append, &config),
    }
}

/// Section heading for terminal output
pub(crate) fn heading(text: &str) -> String {
    #[cfg(feature = "colorized_output")]
    {
        console::style(text).bold().cyan().to_string()
    }
    #[cfg(not(feature = "colorized_output"))]
    {
        text.to_string()
    }
}

/// Warning line for terminal output
pub(crate) fn warning(text: &str) -> String {
    #[cfg(feature = "colorized_output")]
    {
        console::style(text).yellow().to_string()
    }
    #[cfg(not(feature = "colorized_output"))]
    {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_flags(args: &[&str]) -> (bool, bool) {
        let mut argv = vec!["midkit", "report", "ions.txt", "data.txt", "out.csv"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Report { truncate, append, .. } => (truncate, append),
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_last_write_mode_flag_wins() {
        assert_eq!(report_flags(&[]), (false, false));
        assert_eq!(report_flags(&["--truncate"]), (true, false));
        assert_eq!(report_flags(&["--append"]), (false, true));
        assert_eq!(report_flags(&["--truncate", "--append"]), (false, true));
        assert_eq!(report_flags(&["--append", "--truncate"]), (true, false));
    }
}
