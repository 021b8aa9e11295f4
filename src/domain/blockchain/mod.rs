pub mod chain_state;
pub mod explorer;
pub mod rpc_server;
pub mod transaction;
