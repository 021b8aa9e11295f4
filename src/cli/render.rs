use reqwest::Url;

use crate::domain::presentation::cell::TransactionCell;

/// One plain-text row per cell. Columns are padded so a list reads as a table.
pub fn render_line(cell: &TransactionCell, link: Option<&Url>) -> String {
    let link = link.map(Url::as_str).unwrap_or("-");
    format!(
        "{:<9} {:<20} {:>16}  {}  {}",
        cell.state.to_string(),
        cell.title,
        cell.amount,
        cell.subtitle,
        link
    )
}

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LinkedCell<'a> {
    #[serde(flatten)]
    pub cell: &'a TransactionCell,
    pub explorer_url: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use crate::application::transaction_presenter::TransactionPresenter;
    use crate::domain::blockchain::{
        chain_state::ChainState,
        transaction::{Transaction, TransactionDirection},
    };

    use super::*;

    fn cell() -> TransactionCell {
        let tx = Transaction {
            id: "0xabc".into(),
            from: "0xsender".into(),
            to: "0xrecipient".into(),
            value: "2000000000000000000".into(),
            direction: TransactionDirection::Incoming,
            is_error: false,
            block_number: Some(5),
            operation: None,
        };
        TransactionPresenter::default().present(&tx, &ChainState::new(10))
    }

    #[test]
    fn test_render_line_with_link() {
        let url = Url::parse("https://etherscan.io/tx/0xabc").unwrap();
        let line = render_line(&cell(), Some(&url));

        assert!(line.starts_with("completed Received"));
        assert!(line.contains("+2"));
        assert!(line.contains("0xsender"));
        assert!(line.ends_with("https://etherscan.io/tx/0xabc"));
    }

    #[test]
    fn test_render_line_without_link() {
        assert!(render_line(&cell(), None).ends_with("  -"));
    }

    #[test]
    fn test_linked_cell_json() {
        let cell = cell();
        let json = serde_json::to_value(LinkedCell {
            cell: &cell,
            explorer_url: Some("https://etherscan.io/tx/0xabc"),
        })
        .unwrap();

        assert_eq!(json["title"], "Received");
        assert_eq!(json["amount"], "+2");
        assert_eq!(json["backgroundColor"], "white");
        assert_eq!(json["statusIcon"], "received");
        assert_eq!(json["state"], "completed");
        assert_eq!(json["explorerUrl"], "https://etherscan.io/tx/0xabc");
    }
}
