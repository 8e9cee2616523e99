// src/config.rs
use crate::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, FIRST_PAGE, TOKEN_ENV_VAR};
use crate::error::AppError;
use crate::types::{ApiBaseUrl, AuthToken, ResourceKind};
use clap::{Parser, Subcommand};
use std::time::Duration;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Root URL of the directory API (e.g. "https://api.climateconnect.earth")
    #[arg(long, env = "API_URL", global = true)]
    pub api_url: Option<String>,

    /// Session token to authenticate requests with
    #[arg(long, env = TOKEN_ENV_VAR, global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Raw Cookie header to read the session token from (used when --token is absent)
    #[arg(long, global = true)]
    pub cookie: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a hub page (hub info, first projects and organizations, filter options)
    Hub {
        /// Hub slug or hub page URL (e.g. "food")
        category_key: String,
    },

    /// Load the landing page (featured projects and organizations, hub list)
    Landing,

    /// Fetch one page of a listing
    List {
        #[arg(value_enum)]
        resource: ResourceKind,

        /// Page number, starting at 1
        #[arg(long, default_value_t = FIRST_PAGE)]
        page: u32,

        /// Restrict the listing to one hub
        #[arg(long)]
        hub: Option<String>,

        /// Filter as key=value or key=v1,v2 (repeatable)
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Free-text search; replaces any filters
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Resolved client configuration, validated and ready to build an API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: ApiBaseUrl,
    pub token: Option<AuthToken>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        let api_url = cli.api_url.as_deref().ok_or_else(|| {
            AppError::MissingConfiguration(
                "API_URL environment variable or --api-url not set".to_string(),
            )
        })?;
        let api_url = ApiBaseUrl::parse(api_url)?;

        let token = match (&cli.token, &cli.cookie) {
            (Some(token), _) => Some(AuthToken::new(token.as_str())?),
            (None, Some(cookie)) => AuthToken::from_cookie_header(cookie),
            (None, None) => None,
        };

        Ok(Self {
            api_url,
            token,
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }
}
