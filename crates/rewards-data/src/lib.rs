//! Data layer for the rewards summary.
//!
//! Provides the [`source::TransactionSource`] seam with its placeholder and
//! JSON-file implementations, and the pipeline that turns an account's
//! bookings into a derived cashback snapshot.

pub mod analysis;
pub mod source;

pub use rewards_core as core;
