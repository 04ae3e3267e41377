use std::io;

use clap::Parser;

use course_planner::cli::Menu;
use course_planner::config::Config;
use course_planner::logger::initialize_logger;
use course_planner::CatalogError;

fn main() -> Result<(), CatalogError> {
    let config = Config::parse();
    initialize_logger(config.log_level);

    let table = config.open_table();

    let stdin = io::stdin();
    let mut menu = Menu::new(table, stdin.lock(), io::stdout());
    menu.run()
}
