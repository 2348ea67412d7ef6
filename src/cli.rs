use clap::Parser;
use std::path::PathBuf;

/// domainics - turn a CSV of domain expiration dates into a yearly reminder calendar
#[derive(Debug, Parser)]
#[command(name = "domainics")]
#[command(about = "Convert a CSV of domain expiration dates into an ICS calendar", long_about = None)]
#[command(version)]
pub struct Cli {
    /// CSV file with `Domain Name` and `Domain expiration date` columns
    pub input: Option<PathBuf>,

    /// ICS file to write (defaults to the input path with an .ics extension)
    pub output: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_paths() {
        let cli = Cli::parse_from(["domainics", "list.csv", "out.ics", "-v"]);
        assert_eq!(cli.input, Some(PathBuf::from("list.csv")));
        assert_eq!(cli.output, Some(PathBuf::from("out.ics")));
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_paths_are_optional() {
        let cli = Cli::parse_from(["domainics", "--config", "c.toml"]);
        assert!(cli.input.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }
}
