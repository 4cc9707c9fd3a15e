//! Line-pattern state machine over the raw benchmark log.
//!
//! The log interleaves progress and result lines for multiple graphs. Four
//! line shapes carry data; everything else is noise and is skipped. Patterns
//! are tried in a fixed priority order and at most one fires per line.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::record::{LogTable, ResultRecord};

/// `Loading graph .../<name>.mtx ...` - a new graph becomes active.
static GRAPH_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Loading graph .*/(.*?)\.mtx \.\.\.").unwrap());

/// `order: <N> size: <M> {} (symmetricize)`, with an optional bracketed tag.
static ORDER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^order: (\d+) size: (\d+) (?:\[\w+\] )?\{\} \(symmetricize\)").unwrap()
});

/// `[<modularity> modularity] noop` - the untimed baseline measurement.
static NOOP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\S+?) modularity\] noop").unwrap());

/// `[<time> ms; <iters> iters.; <modularity> modularity] <technique>`,
/// optionally followed by `{labels=<L>, tolerance=<T>}`.
static RESULT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(\S+?) ms; (\d+) iters\.; (\S+?) modularity\] (\w+)(?:\s+\{labels=(\d+), tolerance=(\S+?)\})?",
    )
    .unwrap()
});

/// Snapshot of the graph currently being benchmarked.
///
/// Reassigned whole on every graph-load line; order lines mutate it in
/// place, so result records emitted after a later order line see the
/// updated counts.
#[derive(Debug, Clone)]
struct LogState {
    graph: String,
    order: f64,
    size: f64,
}

/// Decimal float extraction with the input-trust behavior of the log
/// producer: malformed numeric text becomes NaN, not an error.
fn num(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

/// Processes one log line, returning the state to carry into the next line.
///
/// `line_no` is one-based and only used for error reporting.
fn read_line(
    line: &str,
    line_no: usize,
    table: &mut LogTable,
    state: Option<LogState>,
) -> Result<Option<LogState>> {
    if let Some(caps) = GRAPH_LINE.captures(line) {
        let graph = caps[1].to_string();
        table.entry(graph.clone()).or_default();
        return Ok(Some(LogState {
            graph,
            order: 0.0,
            size: 0.0,
        }));
    }

    if let Some(caps) = ORDER_LINE.captures(line) {
        let mut state = state.ok_or(Error::NoActiveGraph { line: line_no })?;
        state.order = num(&caps[1]);
        state.size = num(&caps[2]);
        return Ok(Some(state));
    }

    if let Some(caps) = NOOP_LINE.captures(line) {
        let state = state.ok_or(Error::NoActiveGraph { line: line_no })?;
        let record = ResultRecord {
            graph: state.graph.clone(),
            order: state.order,
            size: state.size,
            time: 0.0,
            iterations: 0.0,
            modularity: num(&caps[1]),
            technique: "noop".to_string(),
            labels: 0.0,
            tolerance: 0.0,
        };
        table[&state.graph].push(record);
        return Ok(Some(state));
    }

    if let Some(caps) = RESULT_LINE.captures(line) {
        let state = state.ok_or(Error::NoActiveGraph { line: line_no })?;
        let record = ResultRecord {
            graph: state.graph.clone(),
            order: state.order,
            size: state.size,
            time: num(&caps[1]),
            iterations: num(&caps[2]),
            modularity: num(&caps[3]),
            technique: caps[4].to_string(),
            labels: caps.get(5).map_or(0.0, |m| num(m.as_str())),
            tolerance: caps.get(6).map_or(0.0, |m| num(m.as_str())),
        };
        table[&state.graph].push(record);
        return Ok(Some(state));
    }

    Ok(state)
}

/// Parses raw log text into a table of result records grouped by graph.
///
/// Graphs appear in the table in first-seen order; records within a graph
/// appear in the order their result lines occur in the log. Lines matching
/// none of the four known patterns are ignored.
///
/// # Errors
///
/// Returns [`Error::NoActiveGraph`] if an order or result line precedes the
/// first graph-load line; such a log is malformed input.
pub fn parse(text: &str) -> Result<LogTable> {
    let mut table = LogTable::new();
    let mut state = None;
    for (index, line) in text.lines().enumerate() {
        state = read_line(line, index + 1, &mut table, state)?;
    }
    tracing::debug!(
        graphs = table.len(),
        records = table.values().map(Vec::len).sum::<usize>(),
        "parsed log"
    );
    Ok(table)
}
