pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod formatting;

pub use application::transaction_presenter::TransactionPresenter;
pub use domain::blockchain::{
    chain_state::ChainState,
    explorer::{ExplorerLinkBuilder, ExplorerLinkError},
    rpc_server::RpcServer,
    transaction::{Operation, Transaction, TransactionDirection},
};
pub use domain::presentation::cell::{TransactionCell, TransactionState};
