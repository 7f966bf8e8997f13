use crate::config::toml_config::SiteConfig;
use crate::core::text::Casing;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "follow-the-crypto")]
#[command(about = "Render campaign-finance datasets as display-ready views")]
pub struct CliConfig {
    /// Path to a TOML site configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Constants API base URL (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Directory of dataset JSON files (overrides the config file)
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List individuals, sorted by identifier
    Individuals,
    /// List races by outside spending
    Races {
        #[arg(long)]
        full_page: bool,
    },
    /// Show the most recent independent expenditures
    Expenditures {
        #[arg(long)]
        full_page: bool,
    },
    /// Resolve donor identities for a JSON array of contributions
    Donors {
        #[arg(short, long)]
        input: String,
    },
    /// Apply the site's casing rules to free text from a filing
    Normalize {
        #[arg(long = "as", value_enum, default_value = "phrase")]
        casing: Casing,
        #[arg(required = true)]
        text: Vec<String>,
    },
}

impl CliConfig {
    /// Loads the config file (if any) and applies command-line overrides.
    pub fn site_config(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = Some(endpoint.clone());
        }
        if let Some(dir) = &self.data_dir {
            config.source.directory = Some(dir.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;

    #[test]
    fn test_parse_subcommand_and_overrides() {
        let cli = CliConfig::parse_from([
            "follow-the-crypto",
            "--data-dir",
            "./data",
            "--format",
            "json",
            "races",
            "--full-page",
        ]);

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Command::Races { full_page: true }));

        let config = cli.site_config().unwrap();
        assert_eq!(config.data_dir(), Some("./data"));
        assert_eq!(config.endpoint(), None);
    }

    #[test]
    fn test_parse_normalize() {
        let cli = CliConfig::parse_from([
            "follow-the-crypto",
            "normalize",
            "--as",
            "last-first",
            "DOE, JOHN A",
            "ARMSTRONG, BRIAN",
        ]);
        match cli.command {
            Command::Normalize { casing, text } => {
                assert_eq!(casing, Casing::LastFirst);
                assert_eq!(text, vec!["DOE, JOHN A", "ARMSTRONG, BRIAN"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(CliConfig::try_parse_from(["follow-the-crypto", "normalize"]).is_err());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig::parse_from([
            "follow-the-crypto",
            "--config",
            "/nonexistent/site.toml",
            "individuals",
        ]);
        assert!(cli.site_config().is_err());
    }
}
