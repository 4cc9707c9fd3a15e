//! Benchtab CLI - converts graph-clustering benchmark logs to CSV tables.
//!
//! The library does the parsing and rendering; this binary is the thin I/O
//! shell around it: read the log, normalize line endings, hand rendered
//! tables to the filesystem with the platform line-ending convention.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use benchtab::TableSink;
use clap::Parser;

/// Convert a graph-clustering benchmark log into CSV tables.
///
/// With `csv`, all graphs land in one combined table at OUTPUT. With
/// `csv-dir` (or whenever OUTPUT has no file extension), each graph gets its
/// own `<OUTPUT>/<graph>.csv`.
#[derive(Parser)]
#[command(name = "benchtab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output mode: "csv" or "csv-dir"
    command: String,

    /// Path to the benchmark log
    log: PathBuf,

    /// Output file (csv) or directory (csv-dir)
    output: PathBuf,
}

#[cfg(windows)]
const EOL: &str = "\r\n";
#[cfg(not(windows))]
const EOL: &str = "\n";

/// Reads the log as text with CRLF/CR line endings normalized to LF.
fn read_log(path: &Path) -> std::io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Filesystem-backed sink; rendered tables arrive LF-terminated and are
/// written with the platform line-ending convention.
struct FsSink;

impl TableSink for FsSink {
    fn write_table(&mut self, path: &Path, contents: &str) -> benchtab::Result<()> {
        if EOL == "\n" {
            fs::write(path, contents)?;
        } else {
            fs::write(path, contents.replace('\n', EOL))?;
        }
        Ok(())
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = read_log(&cli.log)
        .with_context(|| format!("Failed to read log at {}", cli.log.display()))?;
    let table = benchtab::parse(&text)
        .with_context(|| format!("Malformed log at {}", cli.log.display()))?;
    tracing::info!(
        graphs = table.len(),
        "parsed {}, writing to {}",
        cli.log.display(),
        cli.output.display()
    );
    benchtab::dispatch(&cli.command, &table, &cli.output, &mut FsSink)
        .with_context(|| format!("Failed to write output to {}", cli.output.display()))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
Loading graph /data/foo.mtx ...
order: 10 size: 20 {} (symmetricize)
[5.2 ms; 3 iters.; 0.42 modularity] louvain {labels=2, tolerance=0.01}
Loading graph /data/bar.mtx ...
order: 30 size: 40 {} (symmetricize)
[0.5 modularity] noop
";

    #[test]
    fn test_read_log_normalizes_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.log");
        fs::write(&path, "a\r\nb\rc\n").unwrap();
        assert_eq!(read_log(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_fs_sink_writes_platform_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        FsSink.write_table(&path, "h\n\"a\"\n").unwrap();
        let written = fs::read(&path).unwrap();
        assert_eq!(written, format!("h{EOL}\"a\"{EOL}").into_bytes());
    }

    #[test]
    fn test_run_combined_csv() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("bench.log");
        fs::write(&log, LOG).unwrap();
        let out = dir.path().join("out.csv");

        run(&Cli {
            command: "csv".to_string(),
            log,
            output: out.clone(),
        })
        .unwrap();

        let csv = fs::read_to_string(&out).unwrap();
        // Header plus one row per result line across both graphs.
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_run_per_graph_csv() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("bench.log");
        fs::write(&log, LOG).unwrap();

        run(&Cli {
            command: "csv-dir".to_string(),
            log,
            output: dir.path().to_path_buf(),
        })
        .unwrap();

        assert!(dir.path().join("foo.csv").is_file());
        assert!(dir.path().join("bar.csv").is_file());
    }

    #[test]
    fn test_run_rejects_unknown_command() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("bench.log");
        fs::write(&log, LOG).unwrap();

        let err = run(&Cli {
            command: "tsv".to_string(),
            log,
            output: dir.path().join("out.tsv"),
        })
        .unwrap_err();
        assert!(err.to_string().contains("out.tsv"));
    }
}
