use clap::Parser;
use std::path::PathBuf;

/// Load a flat-file bank ledger and print its accounts
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Load a flat-file bank ledger and print its accounts", long_about = None)]
pub struct CliArgs {
    /// Directory holding accounts.csv, owners.csv, and account_owners.csv
    #[arg(
        value_name = "DATA_DIR",
        default_value = "support",
        help = "Directory containing the three data files"
    )]
    pub data_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::default_dir(&["program"], "support")]
    #[case::explicit_dir(&["program", "data/prod"], "data/prod")]
    fn test_data_dir_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.data_dir, Path::new(expected));
    }

    #[rstest]
    #[case::unknown_flag(&["program", "--format", "json"])]
    #[case::extra_positional(&["program", "support", "extra"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
