use std::process::ExitCode;

fn main() -> ExitCode {
    workout_dates_lib::run()
}
