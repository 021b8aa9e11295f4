#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionDirection {
    Incoming,
    Outgoing,
}

/// A decoded contract-level action (e.g. a token transfer) laid over a raw transaction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub title: Box<str>,
    /// Base-unit integer, as a decimal string.
    pub value: Box<str>,
    pub decimals: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Box<str>,
    pub from: Box<str>,
    pub to: Box<str>,
    /// Base-unit integer, as a decimal string. Kept as text so that malformed values from the
    /// synchronization layer survive deserialization.
    pub value: Box<str>,
    pub direction: TransactionDirection,
    #[serde(default)]
    pub is_error: bool,
    /// `None` while the block is not known yet.
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub operation: Option<Operation>,
}

impl Transaction {
    /// Address of the other party: the sender for incoming transfers, the recipient otherwise.
    pub fn counterparty(&self) -> &str {
        match self.direction {
            TransactionDirection::Incoming => &self.from,
            TransactionDirection::Outgoing => &self.to,
        }
    }
}
