// Everything CSV-related lives here: command input for batch mode, and the
// final-accounts report.

pub mod input;
pub mod output;
