//! CLI argument definitions using clap
//!
//! Commands:
//! - animaldb serve [--config <path>] [--host] [--port] [--data] [--public]
//! - animaldb init [--data <path>]
//! - animaldb query [--data <path>] [--id] [--trait ...] [--diet ...] [--species ...] [--name ...]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// animaldb - an append-only animal record store served over HTTP
#[derive(Parser, Debug)]
#[command(name = "animaldb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve(ServeArgs),

    /// Create an empty mirror file
    Init {
        /// Mirror file to create
        #[arg(long, default_value = "./data/animals.json")]
        data: PathBuf,
    },

    /// Filter or look up records in a mirror file and print them as JSON
    Query(QueryArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Optional JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Mirror file
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Static front-end directory
    #[arg(long)]
    pub public: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Mirror file
    #[arg(long, default_value = "./data/animals.json")]
    pub data: PathBuf,

    /// Look up a single record by id (filters are ignored)
    #[arg(long)]
    pub id: Option<String>,

    /// Required personality trait (repeatable)
    #[arg(long = "trait")]
    pub traits: Vec<String>,

    /// Required diet (repeatable; every value must match)
    #[arg(long)]
    pub diet: Vec<String>,

    #[arg(long)]
    pub species: Vec<String>,

    #[arg(long)]
    pub name: Vec<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["animaldb", "serve", "--port", "4000", "--data", "x.json"])
            .unwrap();
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(4000));
                assert_eq!(args.data, Some(PathBuf::from("x.json")));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_repeated_traits() {
        let cli = Cli::try_parse_from([
            "animaldb", "query", "--trait", "shy", "--trait", "calm", "--diet", "omnivore",
        ])
        .unwrap();
        match cli.command {
            Command::Query(args) => {
                assert_eq!(args.traits, vec!["shy", "calm"]);
                assert_eq!(args.diet, vec!["omnivore"]);
                assert_eq!(args.data, PathBuf::from("./data/animals.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
