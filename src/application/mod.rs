pub mod transaction_presenter;
