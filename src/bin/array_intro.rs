use array_intro::{Lesson, LessonConfig, LessonError, Transcript};
use colored::Colorize;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn run() -> Result<(), LessonError> {
    let (config, source) = LessonConfig::from_env()?;
    match source {
        Some(path) => eprintln!("{}", format!("Loaded lesson configuration from {path}").dimmed()),
        None => eprintln!("{}", "Using the default lesson configuration".dimmed()),
    }

    let stdout = io::stdout();
    let styled = config.color && stdout.is_terminal();
    let mut out = Transcript::new(stdout.lock()).styled(styled);

    Lesson::new(config)?.run(&mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bold().red());
            ExitCode::FAILURE
        }
    }
}
