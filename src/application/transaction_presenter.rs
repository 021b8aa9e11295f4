use crate::domain::{
    blockchain::{
        chain_state::ChainState,
        transaction::{Transaction, TransactionDirection},
    },
    presentation::cell::{
        ColorToken, FontToken, FontWeight, StatusIcon, TransactionCell, TransactionState,
    },
};
use crate::formatting::amount_formatter::{parse_base_units, AmountFormatter, ETHER_DECIMALS};

const SUBTITLE_FONT: FontToken = FontToken {
    size: 12,
    weight: FontWeight::Thin,
};

const AMOUNT_FONT: FontToken = FontToken {
    size: 16,
    weight: FontWeight::Semibold,
};

/// Derives list-cell display records from transactions. Holds formatting settings only; every
/// value is recomputed from its inputs on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionPresenter {
    formatter: AmountFormatter,
    default_decimals: u32,
}

impl Default for TransactionPresenter {
    fn default() -> Self {
        Self::new(AmountFormatter::short(), ETHER_DECIMALS)
    }
}

impl TransactionPresenter {
    /// `default_decimals` applies to raw transaction values; operations carry their own.
    pub fn new(formatter: AmountFormatter, default_decimals: u32) -> Self {
        Self {
            formatter,
            default_decimals,
        }
    }

    pub fn present(&self, transaction: &Transaction, chain_state: &ChainState) -> TransactionCell {
        let state = state(transaction, chain_state);
        tracing::debug!(id = %transaction.id, %state, "Derived transaction state");

        TransactionCell {
            state,
            title: title(transaction, state).to_owned(),
            subtitle: transaction.counterparty().to_owned(),
            amount: self.amount(transaction),
            background_color: background_color(state),
            amount_text_color: amount_text_color(transaction.direction),
            subtitle_text_color: ColorToken::Gray,
            status_icon: status_icon(state, transaction.direction),
            subtitle_font: SUBTITLE_FONT,
            amount_font: AMOUNT_FONT,
        }
    }

    /// Signed amount text. A magnitude rendered as exactly `"0"` stays unsigned.
    pub fn amount(&self, transaction: &Transaction) -> String {
        let (value, decimals) = match &transaction.operation {
            Some(operation) => (&*operation.value, operation.decimals),
            None => (&*transaction.value, self.default_decimals),
        };

        let units = parse_base_units(value).unwrap_or_else(|report| {
            tracing::warn!(id = %transaction.id, "Falling back to zero amount: {report:?}");
            Default::default()
        });
        let magnitude = self.formatter.format(units, decimals);

        if magnitude == "0" {
            return magnitude;
        }

        match transaction.direction {
            TransactionDirection::Incoming => format!("+{magnitude}"),
            TransactionDirection::Outgoing => format!("-{magnitude}"),
        }
    }
}

/// Errors win over confirmations. Only an exact zero confirmations count is pending, so an
/// unknown block renders as completed.
pub fn state(transaction: &Transaction, chain_state: &ChainState) -> TransactionState {
    if transaction.is_error {
        return TransactionState::Error;
    }

    match chain_state.confirmations(transaction.block_number) {
        Some(0) => TransactionState::Pending,
        _ => TransactionState::Completed,
    }
}

pub fn title(transaction: &Transaction, state: TransactionState) -> &str {
    if let Some(operation) = &transaction.operation {
        return &operation.title;
    }

    match (state, transaction.direction) {
        (TransactionState::Completed, TransactionDirection::Incoming) => "Received",
        (TransactionState::Completed, TransactionDirection::Outgoing) => "Sent",
        (TransactionState::Error, _) => "Error",
        (TransactionState::Pending, TransactionDirection::Incoming) => "Receiving",
        (TransactionState::Pending, TransactionDirection::Outgoing) => "Sending",
    }
}

pub fn background_color(state: TransactionState) -> ColorToken {
    match state {
        TransactionState::Completed => ColorToken::White,
        TransactionState::Error => ColorToken::VeryLightRed,
        TransactionState::Pending => ColorToken::VeryLightOrange,
    }
}

pub fn amount_text_color(direction: TransactionDirection) -> ColorToken {
    match direction {
        TransactionDirection::Incoming => ColorToken::Green,
        TransactionDirection::Outgoing => ColorToken::Red,
    }
}

pub fn status_icon(state: TransactionState, direction: TransactionDirection) -> StatusIcon {
    match (state, direction) {
        (TransactionState::Error, _) => StatusIcon::Error,
        (TransactionState::Completed, TransactionDirection::Incoming) => StatusIcon::Received,
        (TransactionState::Completed, TransactionDirection::Outgoing) => StatusIcon::Sent,
        (TransactionState::Pending, _) => StatusIcon::Pending,
    }
}
