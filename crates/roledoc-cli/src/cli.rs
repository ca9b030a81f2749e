//! CLI argument parsing using clap derive

use clap::Parser;
use roledoc_blocks::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};
use std::path::PathBuf;

/// Generate markdown documentation for the rules of a Kubernetes ClusterRole
///
/// Without --out the table is printed. With --out it is written between the
/// start and end markers of the given markdown file, which is created if it
/// does not exist.
#[derive(Parser, Debug)]
#[command(name = "roledoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Policy file holding the rules to document (a single ClusterRole)
    #[arg(short = 'i', long = "in", value_name = "FILE", env = "ROLEDOC_IN")]
    pub input: Option<PathBuf>,

    /// Markdown file to update instead of printing the table
    #[arg(short = 'o', long = "out", value_name = "FILE", env = "ROLEDOC_OUT")]
    pub output: Option<PathBuf>,

    /// Line marking the start of the generated block
    #[arg(
        long,
        value_name = "MARKER",
        env = "ROLEDOC_START_MARKER",
        default_value = DEFAULT_START_MARKER
    )]
    pub start_marker: String,

    /// Line marking the end of the generated block
    #[arg(
        long,
        value_name = "MARKER",
        env = "ROLEDOC_END_MARKER",
        default_value = DEFAULT_END_MARKER
    )]
    pub end_marker: String,

    /// Exit with an error instead of writing when --out is out of date
    #[arg(long, requires = "output")]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["roledoc", "--in", "role.yaml"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("role.yaml")));
        assert_eq!(cli.output, None);
        assert_eq!(cli.start_marker, DEFAULT_START_MARKER);
        assert_eq!(cli.end_marker, DEFAULT_END_MARKER);
        assert!(!cli.check);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["roledoc", "-i", "role.yaml", "-o", "README.md"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("README.md")));
    }

    #[test]
    fn test_check_requires_output() {
        assert!(Cli::try_parse_from(["roledoc", "--in", "role.yaml", "--check"]).is_err());
    }
}
