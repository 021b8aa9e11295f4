pub mod blockchain;
pub mod presentation;
