use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Compute distance, mean speed and calories from workout sensor packages"
)]
pub struct Cli {
    /// Packages as CODE:values, e.g. RUN:15000,1,75 or SWM:720,1,80,25,40.
    ///
    /// Without packages or --file, the built-in sample packages are used.
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Read packages from a file, one per line ('#' starts a comment).
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One summary sentence per workout
    Text,
    /// One JSON object per workout
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fitcalc"]).unwrap();
        assert!(cli.packages.is_empty());
        assert!(cli.file.is_none());
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn test_packages_and_flags() {
        let cli = Cli::try_parse_from([
            "fitcalc",
            "RUN:15000,1,75",
            "WLK:9000,1,75,180",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.packages.len(), 2);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.verbose, 2);
    }
}
