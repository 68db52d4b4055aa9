use luban_ioc::application;
use std::process::ExitCode;

fn main() -> ExitCode {
    match application::bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        // the logger may not be installed yet, e.g. on config errors
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
