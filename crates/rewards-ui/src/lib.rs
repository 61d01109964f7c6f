//! Terminal UI layer for the rewards summary.
//!
//! Provides themes, the header, summary cards and cashout panel components,
//! the history table, the cashback trend chart, a plain-text report, and the
//! main application event loop built on top of [`ratatui`].

pub mod app;
pub mod components;
pub mod history_table;
pub mod report;
pub mod themes;
pub mod trend_chart;

pub use rewards_core as core;
