//! In-memory course catalog backed by a fixed-capacity chained hash table.

pub mod cli;
pub mod config;
pub mod course;
pub mod error;
pub mod hash_table;
pub mod loader;
pub mod logger;
pub mod ordered_dump;

pub use course::Course;
pub use error::CatalogError;
pub use hash_table::{course_hash, ChainedHashTable, DEFAULT_CAPACITY};
pub use loader::{load_courses, LoadReport};
pub use ordered_dump::{enumerate_sorted, write_sorted};
