pub mod extract;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::category::Category;

pub use extract::{package_label, run, RunConfig};

/// optx - Extract maimai opt package data to JSON
#[derive(Parser, Debug)]
#[command(name = "optx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Opt package root containing category directories (music, chara, ...)
    pub path: PathBuf,

    /// Output directory for the JSON files
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Package label used in output file names (default: derived from PATH)
    #[arg(long, short)]
    pub package: Option<String>,

    /// Only extract these categories
    #[arg(long, value_name = "CATEGORY", num_args = 1..)]
    pub only: Vec<Category>,

    /// Worker threads (default: one per category)
    #[arg(long, short)]
    pub jobs: Option<usize>,

    /// Manifest file (default: ./optx.yaml when present)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Skip documents that fail to parse instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter directive for the requested verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "optx=warn",
            1 => "optx=debug",
            _ => "optx=trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::try_parse_from([
            "optx",
            "A000/opt",
            "--output",
            "out",
            "--only",
            "music",
            "course",
            "--jobs",
            "2",
            "--skip-invalid",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.path, PathBuf::from("A000/opt"));
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert_eq!(cli.only, vec![Category::Music, Category::Course]);
        assert_eq!(cli.jobs, Some(2));
        assert!(cli.skip_invalid);
        assert_eq!(cli.log_directive(), "optx=trace");
    }

    #[test]
    fn test_path_is_required() {
        let err = Cli::try_parse_from(["optx"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["optx", "A000/opt", "--only", "songs"]).is_err());
    }

    #[test]
    fn test_default_verbosity() {
        let cli = Cli::try_parse_from(["optx", "A000/opt"]).unwrap();
        assert_eq!(cli.log_directive(), "optx=warn");
    }
}
