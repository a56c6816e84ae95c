use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use sudoku_batch::batch;

fn main() -> ExitCode {
    env_logger::init();

    let path = env::args().nth(1)
        .unwrap_or_else(|| String::from("puzzles.txt"));
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("ERROR: failed to open {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    match batch::check_lines(BufReader::new(file)) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: failed to read {}: {}", path, e);
            ExitCode::FAILURE
        }
    }
}
