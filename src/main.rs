
use std::io::IsTerminal;
use std::process::ExitCode;

use env_logger::{Env, Target};
use log::{error, info};
use nu_ansi_term::Color::{Green, Red};

use copyfiles::abort::Abort;
use copyfiles::run::execute;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
                            .target(Target::Stdout)
                            .init();

    match execute(std::env::args_os(), std::env::consts::OS, None) {
        Ok(report) => {
            let copied = report.outcomes.iter().filter(|(_, outcome)| outcome.wrote()).count();
            info!("{}", Green.bold().paint(format!("{} item(s) copied to {}", copied, report.target)));
            ExitCode::SUCCESS
        }
        Err(err) => match err.downcast_ref::<Abort>() {
            Some(abort) => {
                if let Some(text) = abort.diagnostic() {
                    match abort {
                        Abort::TargetNotFound { .. } if std::io::stdout().is_terminal() => {
                            println!("{}", Red.bold().paint(text))
                        }
                        _ => println!("{}", text),
                    }
                }
                ExitCode::from(abort.exit_code())
            }
            None => {
                error!("{}", Red.bold().paint(format!("{:?}", err)));
                ExitCode::FAILURE
            }
        }
    }
}
