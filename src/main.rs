use anyhow::Context;
use clap::Parser;
use follow_the_crypto::config::{CliConfig, Command, OutputFormat};
use follow_the_crypto::core::expenditures::rows_to_csv;
use follow_the_crypto::domain::model::Contribution;
use follow_the_crypto::utils::{logger, validation::Validate};
use follow_the_crypto::{
    AnySource, IndividualsPage, Page, RacesPage, RecentExpendituresPage, ReferenceTables,
    Rendered, SiteConfig, SiteError,
};
use serde::Serialize;
use std::fmt::Display;

fn exit_with(e: &SiteError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn emit<T: Serialize + Display>(rendered: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", rendered),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rendered)?),
        OutputFormat::Csv => anyhow::bail!("CSV output is only available for expenditures"),
    }
    Ok(())
}

fn source_for(config: &SiteConfig) -> AnySource {
    if let Err(e) = config.validate() {
        exit_with(&e);
    }
    AnySource::from_config(config).unwrap_or_else(|e| exit_with(&e))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.site_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let verbose = cli.verbose || config.verbose();
    if cli.json_logs || config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.reference.validate() {
        exit_with(&e);
    }
    let tables: &ReferenceTables = &config.reference;

    match &cli.command {
        Command::Individuals => {
            let source = source_for(&config);
            emit(&IndividualsPage.render(&source).await, cli.format)?;
        }
        Command::Races { full_page } => {
            let source = source_for(&config);
            let page = RacesPage {
                tables,
                full_page: *full_page,
            };
            emit(&page.render(&source).await, cli.format)?;
        }
        Command::Expenditures { full_page } => {
            let source = source_for(&config);
            let page = RecentExpendituresPage {
                tables,
                full_page: *full_page,
            };
            let rendered = page.render(&source).await;
            match (cli.format, &rendered) {
                (OutputFormat::Csv, Rendered::Ready { view }) => print!("{}", rows_to_csv(&view.rows)?),
                (OutputFormat::Csv, Rendered::Unavailable { message, .. }) => eprintln!("{}", message),
                (format, rendered) => emit(rendered, format)?,
            }
        }
        Command::Donors { input } => {
            let data = std::fs::read_to_string(input)
                .with_context(|| format!("reading contributions from {}", input))?;
            let contributions: Vec<Contribution> = serde_json::from_str(&data)
                .with_context(|| format!("parsing contributions in {}", input))?;
            tracing::info!("Resolving {} contributions", contributions.len());

            let donors: Vec<_> = contributions
                .iter()
                .map(|contribution| tables.resolve_donor(contribution))
                .collect();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&donors)?),
                OutputFormat::Text => {
                    for donor in &donors {
                        println!("{}", donor);
                    }
                }
                OutputFormat::Csv => anyhow::bail!("CSV output is only available for expenditures"),
            }
        }
        Command::Normalize { casing, text } => {
            let normalized: Vec<String> = text
                .iter()
                .map(|s| tables.titlecase.apply(*casing, s))
                .collect();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&normalized)?),
                OutputFormat::Text => {
                    for line in &normalized {
                        println!("{}", line);
                    }
                }
                OutputFormat::Csv => anyhow::bail!("CSV output is only available for expenditures"),
            }
        }
    }

    Ok(())
}
