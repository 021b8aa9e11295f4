pub mod amount_formatter;
