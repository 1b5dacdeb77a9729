use std::process::ExitCode;

use gitcmd::ui::output;

fn main() -> ExitCode {
    match gitcmd::cli::run() {
        Ok(code) => code,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
