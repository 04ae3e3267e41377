use std::path::PathBuf;

use clap::Parser;
use log::{error, info, LevelFilter};

use crate::hash_table::{ChainedHashTable, DEFAULT_CAPACITY};
use crate::loader::load_courses;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Interactive course planner", long_about = None)]
pub struct Config {
    /// Number of hash table buckets
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY, value_parser = parse_capacity)]
    pub capacity: usize,

    /// CSV file to load before the menu starts
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(short, long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Builds the table the menu starts with, preloading `file` when given.
    /// A file that cannot be read is logged and leaves the table empty.
    pub fn open_table(&self) -> ChainedHashTable {
        let mut table = ChainedHashTable::with_capacity(self.capacity);
        info!("Course table ready with {} buckets", table.capacity());

        if let Some(path) = &self.file {
            if let Err(e) = load_courses(path, &mut table) {
                error!("{}", e);
            }
        }

        table
    }
}

fn parse_capacity(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let config = Config::try_parse_from(["course_planner"]).unwrap();
        assert_eq!(config.capacity, 179);
        assert!(config.file.is_none());
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn parses_all_flags() {
        let config = Config::try_parse_from([
            "course_planner",
            "--capacity",
            "31",
            "--file",
            "courses.csv",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.capacity, 31);
        assert_eq!(config.file, Some(PathBuf::from("courses.csv")));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn open_table_without_file_is_empty() {
        let config = Config {
            capacity: 31,
            ..Config::default()
        };

        let table = config.open_table();
        assert_eq!(table.capacity(), 31);
        assert!(table.is_empty());
    }

    #[test]
    fn open_table_with_missing_file_is_empty() {
        let config = Config {
            file: Some(PathBuf::from("/nonexistent/courses.csv")),
            ..Config::default()
        };

        assert!(config.open_table().is_empty());
    }

    #[test]
    fn rejects_zero_capacity() {
        assert!(Config::try_parse_from(["course_planner", "--capacity", "0"]).is_err());
    }
}
