//! `job-board` CLI entry-point.
//!
//! Available sub-commands:
//! - `ping`   — connect and health-check the store.
//! - `list`   — print every job listing.
//! - `get`    — print one job listing.
//! - `create` — insert a job listing.
//! - `update` — change title, description and/or url of a listing.
//! - `delete` — remove a listing.
//!
//! Any store error is fatal: it is logged and the process exits with status 1.

use clap::{Parser, Subcommand};
use db::{CreateJobListingInput, DbConfig, JobStore, UpdateJobListingInput};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "job-board",
    about = "Create, read, update and delete job listings",
    version
)]
struct Cli {
    /// Document store address.
    #[arg(long, global = true, default_value = db::config::DEFAULT_URI)]
    uri: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Connect and check that the primary node answers.
    Ping,
    /// List every job listing.
    List,
    /// Show a single job listing.
    Get { id: String },
    /// Create a job listing.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        url: String,
    },
    /// Update a job listing. Omitted fields are left as they are.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },
    /// Delete a job listing.
    Delete { id: String },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let store = db::connect_with(DbConfig::with_uri(cli.uri)).await?;

    match cli.command {
        Command::Ping => {
            store.ping().await?;
            info!("document store is healthy");
        }
        Command::List => print_json(&store.get_jobs().await?)?,
        Command::Get { id } => print_json(&store.get_job(&id).await?)?,
        Command::Create {
            title,
            description,
            company,
            url,
        } => {
            let input = CreateJobListingInput {
                title,
                description,
                company,
                url,
            };
            print_json(&store.create_job_listing(input).await?)?;
        }
        Command::Update {
            id,
            title,
            description,
            url,
        } => {
            let input = UpdateJobListingInput {
                title,
                description,
                url,
            };
            print_json(&store.update_job_listing(&id, input).await?)?;
        }
        Command::Delete { id } => print_json(&store.delete_job_listing(&id).await?)?,
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn uri_defaults_to_fixed_address() {
        let cli = Cli::parse_from(["job-board", "list"]);
        assert_eq!(cli.uri, "mongodb://localhost:27017");
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn update_flags_are_optional() {
        let cli = Cli::parse_from(["job-board", "update", "abc", "--title", "Senior Engineer"]);
        match cli.command {
            Command::Update {
                id,
                title,
                description,
                url,
            } => {
                assert_eq!(id, "abc");
                assert_eq!(title.as_deref(), Some("Senior Engineer"));
                assert!(description.is_none());
                assert!(url.is_none());
            }
            _ => panic!("expected update"),
        }
    }

    #[test]
    fn create_requires_all_fields() {
        let res = Cli::try_parse_from(["job-board", "create", "--title", "Engineer"]);
        assert!(res.is_err());
    }
}
