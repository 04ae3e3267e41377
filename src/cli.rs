use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, error};

use crate::error::Result;
use crate::hash_table::ChainedHashTable;
use crate::loader::load_courses;
use crate::ordered_dump::write_sorted;

const MENU: &[&str] = &[
    "  1. Load Data Structure",
    "  2. Print Course List",
    "  3. Print Course",
    "  4. Remove Course",
    "  9. Exit",
];

/// Interactive menu over a single catalog table.
pub struct Menu<R, W> {
    table: ChainedHashTable,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(table: ChainedHashTable, input: R, output: W) -> Self {
        Self {
            table,
            input,
            output,
        }
    }

    pub fn table(&self) -> &ChainedHashTable {
        &self.table
    }

    pub fn into_table(self) -> ChainedHashTable {
        self.table
    }

    /// Runs until the user picks 9 or the input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the course planner.")?;

        loop {
            writeln!(self.output)?;
            for line in MENU {
                writeln!(self.output, "{}", line)?;
            }
            writeln!(self.output)?;

            let Some(choice) = self.prompt("What would you like to do? ")? else {
                break;
            };
            debug!("menu choice {:?}", choice);

            match choice.parse::<u32>() {
                Ok(1) => self.load()?,
                Ok(2) => write_sorted(&self.table, &mut self.output)?,
                Ok(3) => self.print_course()?,
                Ok(4) => self.remove_course()?,
                Ok(9) => break,
                _ => writeln!(self.output, "{} is not a valid option.", choice)?,
            }
        }

        writeln!(self.output, "Good bye.")?;
        Ok(())
    }

    /// Writes `text` and reads one trimmed line, or `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn load(&mut self) -> Result<()> {
        let Some(path) = self.prompt("Enter file name to load from this directory:\n")? else {
            return Ok(());
        };

        match load_courses(Path::new(&path), &mut self.table) {
            Ok(report) => writeln!(self.output, "Loaded {} courses.", report.loaded)?,
            Err(e) => {
                error!("{}", e);
                writeln!(self.output, "Failed to open file {}", path)?;
            }
        }
        Ok(())
    }

    fn print_course(&mut self) -> Result<()> {
        let Some(number) = self.prompt("What course do you want to know about? ")? else {
            return Ok(());
        };
        let number = number.to_uppercase();

        match self.table.search(&number) {
            Some(course) => writeln!(self.output, "{}", course)?,
            None => writeln!(self.output, "Course Number {} not found.", number)?,
        }
        Ok(())
    }

    fn remove_course(&mut self) -> Result<()> {
        let Some(number) = self.prompt("What course do you want to remove? ")? else {
            return Ok(());
        };
        let number = number.to_uppercase();

        match self.table.remove(&number) {
            Some(_) => writeln!(self.output, "Course Number {} removed.", number)?,
            None => writeln!(self.output, "Course Number {} not found.", number)?,
        }
        Ok(())
    }
}
