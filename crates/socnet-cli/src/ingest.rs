//! CSV ingestion: `source,target,weight` lines into edge records.
//!
//! The first line is a header and is skipped. Malformed lines, including
//! ones that are not valid UTF-8, are logged and dropped; only an
//! unreadable file fails the load.

use socnet_graph::{EdgeRecord, GraphBuilder, LoadReport};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}

/// Parses one data line. `line_no` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<EdgeRecord, IngestError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(IngestError::MalformedLine {
            line: line_no,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    };

    let weight: f64 = weight.parse().map_err(|_| IngestError::MalformedLine {
        line: line_no,
        reason: format!("invalid weight {:?}", weight),
    })?;
    if !weight.is_finite() {
        return Err(IngestError::MalformedLine {
            line: line_no,
            reason: format!("non-finite weight {}", weight),
        });
    }

    Ok(EdgeRecord::new(*source, *target, weight))
}

/// Reads every well-formed record from `path`.
///
/// Returns the records plus the number of lines that were skipped.
pub fn read_records(path: &Path) -> Result<(Vec<EdgeRecord>, usize), IngestError> {
    let io_err = |source: std::io::Error| IngestError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(io_err)?);

    let mut records = Vec::new();
    let mut skipped = 0;
    for (idx, raw) in reader.split(b'\n').enumerate().skip(1) {
        let mut raw = raw.map_err(io_err)?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let parsed = match String::from_utf8(raw) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => parse_line(&line, idx + 1),
            Err(_) => Err(IngestError::MalformedLine {
                line: idx + 1,
                reason: "invalid UTF-8".to_string(),
            }),
        };
        match parsed {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping {}", e);
                skipped += 1;
            }
        }
    }
    Ok((records, skipped))
}

/// Loads `path` into `builder`, folding parse failures into the report.
pub fn load_into(path: &Path, builder: &mut GraphBuilder) -> Result<LoadReport, IngestError> {
    let (records, unparsed) = read_records(path)?;
    let mut report = builder.add_records(records);
    report.skipped += unparsed;

    info!(
        "Ingested {}: {} edges accepted, {} records skipped",
        path.display(),
        report.accepted,
        report.skipped
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        write_csv_bytes(contents.as_bytes())
    }

    fn write_csv_bytes(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_parse_line() {
        let record = parse_line(" alice , bob , 2.5 ", 2).unwrap();
        assert_eq!(record, EdgeRecord::new("alice", "bob", 2.5));
    }

    #[test]
    fn test_parse_line_bad_weight() {
        let err = parse_line("alice,bob,heavy", 7).unwrap_err();
        assert!(matches!(err, IngestError::MalformedLine { line: 7, .. }));
        assert!(parse_line("alice,bob,NaN", 7).is_err());
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        assert!(parse_line("alice,bob", 3).is_err());
        assert!(parse_line("alice,bob,1,extra", 3).is_err());
    }

    #[test]
    fn test_load_skips_header_blank_and_malformed() {
        let file = write_csv("source,target,weight\na,b,1\n\nb,c,oops\n,c,1\nc,d,3\r\n");
        let mut builder = GraphBuilder::seeded(0);

        let report = load_into(file.path(), &mut builder).unwrap();
        assert_eq!(
            report,
            LoadReport {
                accepted: 2,
                skipped: 2
            }
        );

        let graph = builder.build();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.shortest_hop_path("a", "b").unwrap().hops, 1);
        assert!(graph.lookup("c").is_ok());
    }

    #[test]
    fn test_load_skips_invalid_utf8_line() {
        let file = write_csv_bytes(b"source,target,weight\na,b,1\n\xff\xfe,c,1\nc,d,2\n");
        let mut builder = GraphBuilder::seeded(0);

        let report = load_into(file.path(), &mut builder).unwrap();
        assert_eq!(
            report,
            LoadReport {
                accepted: 2,
                skipped: 1
            }
        );

        let graph = builder.build();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.shortest_hop_path("c", "d").unwrap().hops, 1);
    }

    #[test]
    fn test_read_records_counts_invalid_utf8() {
        let file = write_csv_bytes(b"source,target,weight\na,b,1\n\xffx,y,1\n");
        let (records, skipped) = read_records(file.path()).unwrap();
        assert_eq!(records, vec![EdgeRecord::new("a", "b", 1.0)]);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = read_records(&missing).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
