//! Text layout: metrics, wrapping/truncation and field formatting.

/// Field formatting (rating, runtime, counts, release year).
pub mod format;
/// Greedy word wrap with ellipsis truncation inside a [`LayoutBox`](layout::LayoutBox).
pub mod layout;
/// Font measurement capability.
pub mod metrics;
