use std::{
    env,
    error::Error,
    fs::File,
    io::{self, Read, Write},
};
mod console;
mod format;
pub mod model;
pub mod system;

pub use console::run_menu;

// From a high-level, this library runs one banking session. With no
// command-line argument it runs the interactive menu on stdin/stdout; with
// an argument pointing to an input CSV file of commands it replays that
// session and writes the resulting accounts to an output CSV file.

pub fn run() -> Result<(), Box<dyn Error>> {
    match get_file_from_cli_arg()? {
        Some(file) => {
            let mut input = io::BufReader::new(file);
            // Business failures go to stderr so the report on stdout stays
            // machine-readable.
            run_batch(&mut input, &mut io::stdout(), &mut io::stderr())
        }
        None => run_menu(&mut io::stdin().lock(), &mut io::stdout()),
    }
}

// This is a more generic version of the batch mode which simply takes the
// streams, for ease of testing. `error_logger` receives one line per
// recoverable business failure; parse errors abort the run.
#[inline]
pub fn run_batch(
    input: &mut impl Read,
    output: &mut impl Write,
    error_logger: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let commands_iter = format::csv::input::parse_commands(input);

    let final_state = system::process_commands(commands_iter, error_logger)?;

    format::csv::output::write_report(&final_state, output)?;

    Ok(())
}

fn get_file_from_cli_arg() -> Result<Option<File>, Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => Ok(None),
        2 => Ok(Some(File::open(&args[1])?)),
        _ => Err(format!("Usage: {} [commands.csv]", args[0]).into()),
    }
}
