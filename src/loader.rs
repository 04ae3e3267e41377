//! CSV loading of course records.
//!
//! Lines have the form `number,name[,prerequisite...]`. The file is mapped
//! into memory and scanned twice: once to learn which course numbers the file
//! declares, then again to build records whose prerequisites are limited to
//! those declared numbers.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use log::{debug, info, warn};

use crate::course::Course;
use crate::error::{CatalogError, Result};
use crate::hash_table::ChainedHashTable;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped_lines: usize,
    pub dropped_prerequisites: usize,
}

fn find_next(data: &[u8], mut position: usize, char: u8) -> usize {
    while position < data.len() && data[position] != char {
        position += 1;
    }
    position
}

fn lines(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut position = 0;
    std::iter::from_fn(move || {
        if position >= data.len() {
            return None;
        }
        let end = find_next(data, position, b'\n');
        let mut line = &data[position..end];
        if let [rest @ .., b'\r'] = line {
            line = rest;
        }
        position = end + 1;
        Some(line)
    })
}

fn text(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}

/// Parses course records out of raw CSV bytes into `table`.
pub fn load_bytes(data: &[u8], table: &mut ChainedHashTable) -> LoadReport {
    let declared: HashSet<&[u8]> = lines(data)
        .filter_map(|line| line.split(|&b| b == b',').next())
        .filter(|number| !number.is_empty())
        .collect();

    let mut report = LoadReport::default();

    for (line_no, line) in lines(data).enumerate() {
        let mut fields = line.split(|&b| b == b',');

        let number = match fields.next() {
            Some(number) if !number.is_empty() => number,
            _ => {
                warn!("line {}: missing course number, skipped", line_no + 1);
                report.skipped_lines += 1;
                continue;
            }
        };
        let name = match fields.next() {
            Some(name) => name,
            None => {
                warn!("line {}: course {} has no name, skipped", line_no + 1, text(number));
                report.skipped_lines += 1;
                continue;
            }
        };

        let mut prerequisites = Vec::new();
        for prerequisite in fields.filter(|field| !field.is_empty()) {
            if declared.contains(prerequisite) {
                prerequisites.push(text(prerequisite));
            } else {
                warn!(
                    "line {}: prerequisite {} of {} is not a known course, dropped",
                    line_no + 1,
                    text(prerequisite),
                    text(number)
                );
                report.dropped_prerequisites += 1;
            }
        }

        table.insert(Course::new(text(number), text(name), prerequisites));
        report.loaded += 1;
    }

    report
}

/// Loads every course in the CSV file at `path` into `table`.
pub fn load_courses(path: &Path, table: &mut ChainedHashTable) -> Result<LoadReport> {
    info!("Loading CSV file {}", path.display());

    let io_error = |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;

    // Mapping a zero-length file fails, and there is nothing to load anyway.
    if file.metadata().map_err(io_error)?.len() == 0 {
        debug!("{} is empty", path.display());
        return Ok(LoadReport::default());
    }

    // SAFETY: the mapping is read-only and dropped before returning; the file
    // is not expected to be truncated while it is being loaded.
    let mmaped = unsafe { memmap::Mmap::map(&file) }.map_err(io_error)?;

    let report = load_bytes(&mmaped, table);
    info!(
        "Loaded {} courses from {} ({} lines skipped, {} prerequisites dropped)",
        report.loaded,
        path.display(),
        report.skipped_lines,
        report.dropped_prerequisites
    );

    Ok(report)
}
