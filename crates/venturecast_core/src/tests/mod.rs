//! Integration tests for the venturecast calculation engine
//!
//! Tests are organized by topic:
//! - `dcf` - DCF valuation and derived financial metrics
//! - `valuation` - The four valuation heuristics and their average
//! - `revenue` - Segment revenue projection and revenue-stream NPV
//! - `infra` - Infrastructure cost scaling
//! - `funding` - Allocation normalization and round metrics
//! - `usage` - Workload token counts and tier recommendation
//! - `engine` - Recomputation coordination and sink notification

mod funding;
mod revenue;
mod usage;
mod valuation;
