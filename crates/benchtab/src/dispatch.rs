//! Output-mode decision and table hand-off.

use std::path::Path;

use crate::error::{Error, Result};
use crate::record::LogTable;
use crate::table::render_csv;

/// Persistence collaborator for rendered tables.
///
/// The library never touches the filesystem itself; the CLI supplies a sink
/// that writes to disk, and tests supply one that records what would have
/// been written.
pub trait TableSink {
    /// Persists one rendered table at the given path.
    fn write_table(&mut self, path: &Path, contents: &str) -> Result<()>;
}

/// Writes the parsed table according to `command` and the shape of `out`.
///
/// `csv` writes one combined table at `out`; `csv-dir` writes one table per
/// graph at `<out>/<graph>.csv`. An extensionless `out` looks like a
/// directory, so `csv` is treated as `csv-dir` in that case.
///
/// # Errors
///
/// Returns [`Error::UnknownCommand`] for any other command string, and
/// propagates rendering and sink failures unchanged.
pub fn dispatch(
    command: &str,
    table: &LogTable,
    out: &Path,
    sink: &mut dyn TableSink,
) -> Result<()> {
    let per_graph = command == "csv-dir" || out.extension().is_none();
    match command {
        "csv" | "csv-dir" if per_graph => {
            for (graph, rows) in table {
                let path = out.join(format!("{graph}.csv"));
                sink.write_table(&path, &render_csv(rows)?)?;
            }
            tracing::debug!(tables = table.len(), out = %out.display(), "wrote per-graph tables");
            Ok(())
        }
        "csv" => {
            let rows: Vec<_> = table.values().flatten().cloned().collect();
            sink.write_table(out, &render_csv(&rows)?)?;
            tracing::debug!(rows = rows.len(), out = %out.display(), "wrote combined table");
            Ok(())
        }
        other => Err(Error::UnknownCommand(other.to_string())),
    }
}
