//! Reusable dashboard building blocks.

pub mod cashout_panel;
pub mod header;
pub mod summary_card;
