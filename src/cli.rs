use std::path::PathBuf;

use clap::Parser;

use crate::{constants, Config};

/// Pre-compresses static site assets into .gz and .br siblings
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about)]
pub struct Cli {
    /// Site output directory to walk
    #[clap(value_parser, default_value = constants::DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Disable progress spinner
    #[clap(short = 'P', long)]
    pub no_progress: bool,

    /// Verbose output
    #[clap(short, long)]
    pub verbose: bool,

    /// Follow symbolic links while walking
    #[clap(long)]
    pub follow_links: bool,
}

impl Cli {
    /// Converts CLI arguments into a Config
    pub fn into_config(self) -> Config {
        Config {
            root: self.root,
            show_progress: !self.no_progress,
            verbose: self.verbose,
            follow_links: self.follow_links,
        }
    }

    /// Validates the arguments before the walk starts
    pub fn validate(&self) -> Result<(), String> {
        if !self.root.exists() {
            return Err(format!("root directory does not exist: {:?}", self.root));
        }
        if !self.root.is_dir() {
            return Err(format!("root path is not a directory: {:?}", self.root));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let args = vec!["precompress", "public", "--no-progress", "--follow-links"];

        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.root, PathBuf::from("public"));
        assert!(cli.no_progress);
        assert!(cli.follow_links);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_root_defaults_to_site_dir() {
        let cli = Cli::try_parse_from(vec!["precompress"]).unwrap();
        assert_eq!(cli.root, PathBuf::from(constants::DEFAULT_ROOT));
    }

    #[test]
    fn test_config_conversion() {
        let cli = Cli {
            root: PathBuf::from("dist"),
            no_progress: true,
            verbose: true,
            follow_links: false,
        };

        let config = cli.into_config();
        assert_eq!(config.root, PathBuf::from("dist"));
        assert!(!config.show_progress);
        assert!(config.verbose);
        assert!(!config.follow_links);
    }

    #[test]
    fn test_validation() {
        let dir = tempdir().unwrap();

        // Valid: an existing directory
        let cli = Cli {
            root: dir.path().to_path_buf(),
            no_progress: false,
            verbose: false,
            follow_links: false,
        };
        assert!(cli.validate().is_ok());

        // Invalid: missing root
        let mut invalid = cli.clone();
        invalid.root = dir.path().join("missing");
        assert!(invalid.validate().is_err());

        // Invalid: root is a file
        let file_path = dir.path().join("file.html");
        File::create(&file_path).unwrap();
        let mut invalid = cli;
        invalid.root = file_path;
        assert!(invalid.validate().is_err());
    }
}
