use error_stack::{Report, Result, ResultExt};
use reqwest::Url;
use thiserror::Error;

use super::rpc_server::RpcServer;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplorerLinkError {
    #[error("Transaction id cannot be turned into an explorer URL")]
    InvalidTransactionId,
}

/// Builds links to transactions on the public block explorer of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerLinkBuilder {
    server: RpcServer,
}

impl ExplorerLinkBuilder {
    pub fn new(server: RpcServer) -> Self {
        Self { server }
    }

    pub fn server(&self) -> RpcServer {
        self.server
    }

    pub fn transaction_url(&self, id: &str) -> Result<Url, ExplorerLinkError> {
        if id.is_empty() {
            return Err(Report::new(ExplorerLinkError::InvalidTransactionId)
                .attach_printable("Transaction id is empty"));
        }

        // Anything outside the unreserved set would be escaped or would end the path early, and
        // the link would no longer point at `/tx/<id>`.
        if let Some(c) = id.chars().find(|c| !is_unreserved(*c)) {
            return Err(Report::new(ExplorerLinkError::InvalidTransactionId)
                .attach_printable(format!("Unexpected character {c:?} in transaction id"))
                .attach_printable(format!("Transaction id: {id:?}")));
        }

        let base_url = self.server.explorer_base_url();
        let url = Url::parse(&format!("{base_url}/tx/{id}"))
            .change_context(ExplorerLinkError::InvalidTransactionId)
            .attach_printable_lazy(|| format!("Transaction id: {id:?}"))
            .attach_printable_lazy(|| format!("Network: {}", self.server))?;

        tracing::trace!(server = %self.server, %url, "Built explorer link");
        Ok(url)
    }
}

fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}
