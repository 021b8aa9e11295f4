pub mod render;

use std::{io::Write, path::PathBuf};

use clap::{Parser, Subcommand};
use error_stack::{Result, ResultExt};
use thiserror::Error;

use crate::config::app_config::AppConfig;
use crate::domain::blockchain::{
    chain_state::ChainState, explorer::ExplorerLinkBuilder, rpc_server::RpcServer,
    transaction::Transaction,
};
use render::{render_line, LinkedCell};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to load configuration")]
    Config,
    #[error("Failed to read transaction file")]
    ReadInput,
    #[error("Transaction file is not a JSON list of transactions")]
    ParseInput,
    #[error("Failed to build explorer link")]
    Link,
    #[error("Failed to write output")]
    Output,
}

#[derive(Parser, Debug)]
#[command(name = "tx-cells")]
#[command(version)]
#[command(about = "Render wallet transaction list cells and block explorer links")]
pub struct Cli {
    /// Config file, with or without extension
    #[arg(long, global = true, default_value = "Config")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the block explorer URL of a transaction
    Link {
        /// Network to link to; defaults to the configured one
        #[arg(long)]
        network: Option<RpcServer>,
        id: String,
    },
    /// Render the list cells of a JSON file of transactions
    List {
        file: PathBuf,
        /// Latest block height known to the wallet
        #[arg(long)]
        height: u64,
        #[arg(long)]
        network: Option<RpcServer>,
        /// Emit one JSON object per cell instead of a text table
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: Command, config: &AppConfig, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Link { network, id } => {
            let explorer = ExplorerLinkBuilder::new(network.unwrap_or(config.network.server));
            let url = explorer
                .transaction_url(&id)
                .change_context(CliError::Link)?;
            writeln!(out, "{url}").change_context(CliError::Output)
        }
        Command::List {
            file,
            height,
            network,
            json,
        } => {
            let contents = std::fs::read_to_string(&file)
                .change_context(CliError::ReadInput)
                .attach_printable_lazy(|| format!("Path: {}", file.display()))?;
            let transactions: Vec<Transaction> = serde_json::from_str(&contents)
                .change_context(CliError::ParseInput)
                .attach_printable_lazy(|| format!("Path: {}", file.display()))?;

            let explorer = ExplorerLinkBuilder::new(network.unwrap_or(config.network.server));
            list(&transactions, &explorer, ChainState::new(height), config, json, out)
        }
    }
}

fn list(
    transactions: &[Transaction],
    explorer: &ExplorerLinkBuilder,
    chain_state: ChainState,
    config: &AppConfig,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let presenter = config.display.presenter();
    let server = explorer.server();
    tracing::info!(
        count = transactions.len(),
        network = server.name(),
        chain_id = server.chain_id(),
        height = chain_state.latest_block,
        "Rendering transactions"
    );

    if !json {
        writeln!(
            out,
            "# {} (chain {}, {}) at block {}",
            server.name(),
            server.chain_id(),
            server.symbol(),
            chain_state.latest_block
        )
        .change_context(CliError::Output)?;
    }

    for transaction in transactions {
        let cell = presenter.present(transaction, &chain_state);
        // A bad id only costs the row its link.
        let link = match explorer.transaction_url(&transaction.id) {
            Ok(url) => Some(url),
            Err(report) => {
                tracing::warn!(id = %transaction.id, "No explorer link: {report:?}");
                None
            }
        };

        if json {
            let line = serde_json::to_string(&LinkedCell {
                cell: &cell,
                explorer_url: link.as_ref().map(|url| url.as_str()),
            })
            .change_context(CliError::Output)?;
            writeln!(out, "{line}").change_context(CliError::Output)?;
        } else {
            writeln!(out, "{}", render_line(&cell, link.as_ref()))
                .change_context(CliError::Output)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(command: Command, config: &AppConfig) -> Result<String, CliError> {
        let mut out = Vec::new();
        run(command, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn write_transactions(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "tx-cells-{}-{name}.json",
            std::process::id()
        ));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_cli_parses_link() {
        let cli = Cli::try_parse_from(["tx-cells", "link", "--network", "kovan", "0xabc"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("Config"));
        assert!(matches!(
            cli.command,
            Command::Link {
                network: Some(RpcServer::Kovan),
                ..
            }
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_network() {
        assert!(Cli::try_parse_from(["tx-cells", "link", "--network", "goerli", "0xabc"]).is_err());
    }

    #[test]
    fn test_link_uses_configured_network() {
        let mut config = AppConfig::default();
        config.network.server = RpcServer::Ropsten;

        let output = run_to_string(
            Command::Link {
                network: None,
                id: "0xabc".to_owned(),
            },
            &config,
        )
        .unwrap();

        assert_eq!(output, "https://ropsten.etherscan.io/tx/0xabc\n");
    }

    #[test]
    fn test_link_invalid_id() {
        let report = run_to_string(
            Command::Link {
                network: None,
                id: String::new(),
            },
            &AppConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(report.current_context(), CliError::Link));
    }

    #[test]
    fn test_list_text() {
        let path = write_transactions(
            "list-text",
            r#"[
                {"id": "0x1", "from": "0xa", "to": "0xb", "value": "1000000000000000000",
                 "direction": "incoming", "blockNumber": 90},
                {"id": "bad id", "from": "0xa", "to": "0xb", "value": "0",
                 "direction": "outgoing", "blockNumber": 100}
            ]"#,
        );

        let output = run_to_string(
            Command::List {
                file: path.clone(),
                height: 100,
                network: None,
                json: false,
            },
            &AppConfig::default(),
        )
        .unwrap();
        std::fs::remove_file(path).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "# Ethereum (chain 1, ETH) at block 100");
        assert!(lines[1].starts_with("completed Received"));
        assert!(lines[1].ends_with("https://etherscan.io/tx/0x1"));
        assert!(lines[2].starts_with("pending   Sending"));
        assert!(lines[2].ends_with("  -"));
    }

    #[test]
    fn test_list_json() {
        let path = write_transactions(
            "list-json",
            r#"[{"id": "0x1", "from": "0xa", "to": "0xb", "value": "1", "direction": "outgoing",
                 "isError": true}]"#,
        );

        let output = run_to_string(
            Command::List {
                file: path.clone(),
                height: 100,
                network: Some(RpcServer::OraclesTest),
                json: true,
            },
            &AppConfig::default(),
        )
        .unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(output.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["title"], "Error");
        assert_eq!(value["backgroundColor"], "veryLightRed");
        assert_eq!(
            value["explorerUrl"],
            "https://explorer.sokol.poa.network/tx/0x1"
        );
    }

    #[test]
    fn test_list_rejects_malformed_file() {
        let path = write_transactions("list-malformed", r#"{"not": "a list"}"#);

        let report = run_to_string(
            Command::List {
                file: path.clone(),
                height: 1,
                network: None,
                json: false,
            },
            &AppConfig::default(),
        )
        .unwrap_err();
        std::fs::remove_file(path).unwrap();

        assert!(matches!(report.current_context(), CliError::ParseInput));
    }
}
