use strum::Display;

/// Recomputed from the transaction and the chain tip on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, serde::Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransactionState {
    Completed,
    Pending,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, serde::Serialize)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    White,
    Gray,
    Green,
    Red,
    VeryLightRed,
    VeryLightOrange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, serde::Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    Received,
    Sent,
    Pending,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Thin,
    Semibold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FontToken {
    pub size: u8,
    pub weight: FontWeight,
}

/// Everything a list renderer needs to draw one transaction row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCell {
    pub state: TransactionState,
    pub title: String,
    pub subtitle: String,
    pub amount: String,
    pub background_color: ColorToken,
    pub amount_text_color: ColorToken,
    pub subtitle_text_color: ColorToken,
    pub status_icon: StatusIcon,
    pub subtitle_font: FontToken,
    pub amount_font: FontToken,
}
