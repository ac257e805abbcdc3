//! filmbuff - movie listing CLI backed by a movie database API.

/// Application configuration (TOML) and settings form.
mod config;
/// Listing page rendering.
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{
    AppConfig, FORM_ID, FormSubmission, build_form, resolve_config_path, submit_form,
};
use crate::render::{render_json, render_text};
use filmbuff_api::listing::MovieListing;
use filmbuff_api::movie_api::MovieApiConnector;

/// Log filter used when `RUST_LOG` is not set.
///
/// The connector logs raw response bodies at INFO; keep those out of
/// normal output.
const DEFAULT_LOG_FILTER: &str = "info,filmbuff_api=warn";

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show the movie listing page.
    Movies(MoviesArgs),
    /// Movie API settings.
    Config(ConfigCommand),
}

/// Output format of the listing page.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One tab-separated line per movie.
    Text,
    /// The full page model as JSON.
    Json,
}

/// Arguments for the `movies` subcommand.
#[derive(clap::Args)]
struct MoviesArgs {
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show the settings form with current values.
    Show,
    /// Save new settings.
    Set(ConfigSetArgs),
}

/// Arguments for the `config set` subcommand.
#[derive(clap::Args)]
struct ConfigSetArgs {
    /// API base URL (default: stored value or <https://api.themoviedb.org>).
    #[arg(long)]
    api_base_url: Option<String>,
    /// API key (v3 auth). Required unless already stored.
    #[arg(long)]
    api_key: Option<String>,
}

/// Runs the `movies` subcommand.
///
/// Recoverable API failures still render the page, with zero movies.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the connector
/// configuration is incomplete.
#[instrument(skip_all)]
async fn run_movies(args: &MoviesArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    let connector = MovieApiConnector::builder()
        .api_base_url(config.movie_api_config.api_base_url.as_str())
        .api_key(config.movie_api_config.api_key.as_str())
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build movie API connector")?;

    let page = MovieListing::new(connector).view().await;

    match args.format {
        OutputFormat::Text => {
            for line in render_text(&page) {
                tracing::info!("{line}");
            }
        }
        OutputFormat::Json => tracing::info!("{}", render_json(&page)?),
    }

    Ok(())
}

/// Runs the `config show` subcommand.
fn run_config_show(dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    tracing::info!("Form: {FORM_ID} ({})", config_path.display());
    for field in build_form(&config) {
        let value = if field.secret {
            mask_secret(&field.default_value)
        } else {
            field.default_value.clone()
        };
        let required = if field.required { " *" } else { "" };
        tracing::info!("{}{required}: {value}", field.title);
        tracing::info!("    {}", field.description);
    }

    Ok(())
}

/// Runs the `config set` subcommand.
fn run_config_set(args: ConfigSetArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let submission = FormSubmission {
        api_base_url: args.api_base_url,
        api_key: args.api_key,
    };

    let message = submit_form(&config_path, &submission)?;
    tracing::info!("{message}");

    Ok(())
}

/// Masks all but the last four characters of a secret.
fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len == 0 {
        return String::from("(not set)");
    }
    if len <= 4 {
        return String::from("****");
    }
    let tail: String = secret.chars().skip(len.saturating_sub(4)).collect();
    format!("****{tail}")
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::Movies(args) => run_movies(&args, cli.dir.as_ref()).await,
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::Show => run_config_show(cli.dir.as_ref()),
            ConfigSubcommands::Set(args) => run_config_set(args, cli.dir.as_ref()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "(not set)");
        assert_eq!(mask_secret("abc"), "****");
        assert_eq!(mask_secret("0123456789abcdef"), "****cdef");
    }

    #[test]
    fn test_cli_parses_movies_json() {
        // Arrange & Act
        let cli = Cli::try_parse_from(["filmbuff", "movies", "--format", "json"]);

        // Assert
        assert!(matches!(
            cli,
            Ok(Cli {
                command: Commands::Movies(MoviesArgs {
                    format: OutputFormat::Json
                }),
                ..
            })
        ));
    }
}
