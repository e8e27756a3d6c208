//! Timing comparison reports for plane/polyhedron intersection benchmarks.
//!
//! Reads the timing files written by the `irl`, `r3d` and `voftools`
//! benchmark drivers, cross-checks their layout, and renders fixed-width
//! comparison tables and LaTeX row fragments normalized against `irl`.
//!
//! Pipeline: [`reader`] → [`aggregate`] → [`table`] → [`report`], with
//! [`latex`] reading the same aggregated data.

pub mod aggregate;
pub mod error;
pub mod format;
pub mod latex;
pub mod model;
pub mod reader;
pub mod report;
pub mod table;

#[cfg(test)]
mod testutil;

pub use aggregate::{TimingData, aggregate};
pub use error::{Result, TimingError};
pub use model::{Case, Metric, Tool};
