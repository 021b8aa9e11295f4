use strum::{Display, EnumIter, EnumString};

/// Networks the wallet can talk to. Every variant must have a row in each of the tables below.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RpcServer {
    #[default]
    Main,
    Kovan,
    Ropsten,
    OraclesTest,
}

impl RpcServer {
    pub fn chain_id(&self) -> u64 {
        match self {
            RpcServer::Main => 1,
            RpcServer::Kovan => 42,
            RpcServer::Ropsten => 3,
            RpcServer::OraclesTest => 12648,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RpcServer::Main => "Ethereum",
            RpcServer::Kovan => "Kovan",
            RpcServer::Ropsten => "Ropsten",
            RpcServer::OraclesTest => "Oracles Test",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RpcServer::Main | RpcServer::Kovan | RpcServer::Ropsten => "ETH",
            RpcServer::OraclesTest => "POA",
        }
    }

    /// Base URL of the public block explorer, without a trailing slash.
    pub fn explorer_base_url(&self) -> &'static str {
        match self {
            RpcServer::Main => "https://etherscan.io",
            RpcServer::Kovan => "https://kovan.etherscan.io",
            RpcServer::Ropsten => "https://ropsten.etherscan.io",
            RpcServer::OraclesTest => "https://explorer.sokol.poa.network",
        }
    }
}
