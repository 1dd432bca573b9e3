//! spacegit binary entry point.

use std::process::ExitCode;

use spacegit::cli::{self, commands, Cli};
use spacegit::ui::output;

fn main() -> ExitCode {
    let args = Cli::parse_args();
    let json = args.json;

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match commands::as_space_error(&err) {
                Some(space_err) => output::space_error(space_err, json),
                None => output::error(format!("{:#}", err)),
            }
            ExitCode::FAILURE
        }
    }
}
