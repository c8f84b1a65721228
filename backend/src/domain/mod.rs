//! # Domain Module
//!
//! Filtering and summary logic for the vehicle tax dashboard, independent of
//! HTTP and of how the table was loaded.
//!
//! ## Module Organization
//!
//! - **models**: records, the immutable table, selections and summaries
//! - **currency**: Rupiah formatting with a silent zero fallback
//! - **cascading_filter**: region → sub-region → block choice sets and narrowing
//! - **aggregator**: grouped sums and the grand total
//! - **dashboard_service**: assembles the full dashboard view for one selection
//! - **commands**: query/command inputs used by the REST layer

pub mod aggregator;
pub mod cascading_filter;
pub mod commands;
pub mod currency;
pub mod dashboard_service;
pub mod models;

pub use aggregator::{aggregate, grand_total};
pub use cascading_filter::CascadingFilter;
pub use currency::{format_rupiah, CurrencyFormat, CurrencyFormatter};
pub use dashboard_service::{DashboardService, DashboardSettings, DashboardView, DisplayLabels};
