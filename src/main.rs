// src/main.rs

use anyhow::Context;
use clap::Parser;
use climate_directory::{
    AppError, CategoryKey, ClientConfig, Command, CommandLineInput, DirectoryApi,
    DirectoryHttpClient, FilterState, HubPage, LandingPage, ListingRequest, Member, Organization,
    Project, QueryFragment, ResourceKind,
};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use serde::Serialize;
use std::sync::Arc;

const LOG_FILE_NAME: &str = "climate_directory.log";

/// Sets up logging configuration.
///
/// Console output goes to stderr so stdout stays valid JSON.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("stderr", Box::new(stderr_appender)),
        )
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Loads whatever the command asks for and prints it as JSON.
async fn execute(command: Command, config: &ClientConfig) -> Result<(), AppError> {
    let client = DirectoryHttpClient::new(config.api_url.clone(), config.timeout)?;
    let api = DirectoryApi::new(Arc::new(client));
    let token = config.token.as_ref();

    match command {
        Command::Hub { category_key } => {
            let category_key = CategoryKey::parse(&category_key)?;
            let page = HubPage::load(&api, category_key, config.token.clone()).await?;
            log::info!(
                "Hub '{}': {} projects, {} organizations loaded",
                page.hub().name,
                page.projects().len(),
                page.organizations().len()
            );
            print_json(&page.view())
        }
        Command::Landing => {
            let page = LandingPage::load(&api, token).await?;
            print_json(&page)
        }
        Command::List {
            resource,
            page,
            hub,
            filters,
            search,
        } => {
            let category = hub.as_deref().map(CategoryKey::parse).transpose()?;
            let fragment = match search {
                Some(term) => QueryFragment::search(&term),
                None => QueryFragment::from_filters(&FilterState::from_pairs(&filters)?),
            };
            let request = ListingRequest::new(page)
                .in_hub(category)
                .with_fragment(Some(fragment));

            match resource {
                ResourceKind::Projects => {
                    print_json(&api.fetch_page::<Project>(&request, token).await?)
                }
                ResourceKind::Organizations => {
                    print_json(&api.fetch_page::<Organization>(&request, token).await?)
                }
                ResourceKind::Members => {
                    print_json(&api.fetch_page::<Member>(&request, token).await?)
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))?;

    let config = ClientConfig::resolve(&cli)?;

    if let Err(e) = execute(cli.command, &config).await {
        if e.is_transport() {
            eprintln!("Could not retrieve data from the server.");
        }
        return Err(e).context("climate-directory failed");
    }

    Ok(())
}
