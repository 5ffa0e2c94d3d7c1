//! Integration tests for sampling and plot statistics
//!
//! Tests are organized by topic:
//! - `sampler` - Seeded generation, sample sizes and supports
//! - `plot_stats` - Boxplot and histogram statistics over generated samples
