use std::io::Write;

use course_planner::logger::initialize_logger;
use log::LevelFilter;
use tempfile::NamedTempFile;

pub fn init_test_logger() {
    initialize_logger(LevelFilter::Debug);
}

pub fn csv_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[allow(dead_code)]
pub const SAMPLE_CATALOG: &str = "\
CSCI100,Introduction to Computer Science
CSCI101,Introduction to Programming in C++,CSCI100
CSCI200,Data Structures,CSCI101
MATH201,Discrete Mathematics
CSCI300,Introduction to Algorithms,CSCI200,MATH201
CSCI301,Advanced Programming in C++,CSCI101
CSCI350,Operating Systems,CSCI300
CSCI400,Large Software Development,CSCI301,CSCI350
";
