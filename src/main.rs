// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod error;
mod hook;
mod runner;
mod stash;
mod types;
mod ui;

use log::LevelFilter;

fn main() {
    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    init_logger(args.log_level);

    std::process::exit(run(&args));
}

/// Build the logger with an explicit level and install it for this process
fn init_logger(level: LevelFilter) {
    let logger = env_logger::Builder::new().filter_level(level).format_target(false).build();
    log::set_max_level(logger.filter());
    if let Err(e) = log::set_boxed_logger(Box::new(logger)) {
        eprintln!("Warning: Failed to install logger: {}", e);
    }
}

/// Run the hook and return the process exit code
fn run(args: &cli::CliArgs) -> i32 {
    let config = match config::load_config(args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            return e.exit_code();
        }
    };

    let plan = config::build_plan(args, config);

    match hook::run_hook(&runner::SystemRunner, &plan) {
        Ok(record) => {
            ui::print_summary(&record, args.json);
            hook::decide_exit_code(&record)
        }
        Err(e) => {
            // Command and spawn failures were logged by the runner with the child's output
            if !e.is_logged() {
                ui::print_error(&e.to_string());
            }
            e.exit_code()
        }
    }
}
