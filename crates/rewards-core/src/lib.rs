//! Core domain types for the rewards summary.
//!
//! Holds the transaction and cashback models, the fixed-rate cashback
//! calculations, money formatting, cashout input review, CLI settings and the
//! shared error type.

pub mod calculations;
pub mod cashout;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
