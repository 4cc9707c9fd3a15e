//! Result records and the ordered graph table.

use indexmap::IndexMap;

/// Column order shared by every rendered table.
pub const COLUMNS: [&str; 9] = [
    "graph",
    "order",
    "size",
    "time",
    "iterations",
    "modularity",
    "technique",
    "labels",
    "tolerance",
];

/// One result line from the log, tagged with the graph it ran on.
///
/// Numeric fields are `f64` across the board: the log renders everything as
/// decimal text, and integer-looking fields (order, iterations, labels) share
/// the same extraction path as the timings.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    /// Graph identifier, stripped of path and `.mtx` suffix.
    pub graph: String,
    /// Vertex count of the graph at the time the result was emitted.
    pub order: f64,
    /// Edge count of the graph at the time the result was emitted.
    pub size: f64,
    /// Elapsed milliseconds; 0 for a no-op baseline.
    pub time: f64,
    /// Iteration count; 0 for a no-op baseline.
    pub iterations: f64,
    /// Modularity quality score.
    pub modularity: f64,
    /// Algorithm variant label; `"noop"` for the baseline measurement.
    pub technique: String,
    /// Label-count parameter; 0 when the log line carried none.
    pub labels: f64,
    /// Convergence-tolerance parameter; 0 when the log line carried none.
    pub tolerance: f64,
}

impl ResultRecord {
    /// Field values rendered as text, in [`COLUMNS`] order.
    pub fn values(&self) -> [String; 9] {
        [
            self.graph.clone(),
            self.order.to_string(),
            self.size.to_string(),
            self.time.to_string(),
            self.iterations.to_string(),
            self.modularity.to_string(),
            self.technique.clone(),
            self.labels.to_string(),
            self.tolerance.to_string(),
        ]
    }
}

/// Graph name mapped to its result records, in log order.
///
/// Insertion order is significant on both axes: the map iterates graphs in
/// first-seen order, and each record vector preserves the order result lines
/// appeared in the log.
pub type LogTable = IndexMap<String, Vec<ResultRecord>>;
