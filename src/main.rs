#[macro_use]
extern crate log;

mod app;
mod configuration;
mod connection;
mod reporter;
mod time;

use log::LevelFilter;
use signal_hook::{iterator::Signals, SIGINT};
use std::{path::PathBuf, process::exit, thread};
use structopt::StructOpt;

use self::app::error::Error;
use self::app::App;
use self::configuration::command_line::{Command, LogLevel, Opt};

fn main() {
    let options = Opt::from_args();
    let signals = Signals::new(&[SIGINT]).expect("Cannot register signal handler");

    thread::spawn(move || {
        for sig in signals.forever() {
            info!("Received signal {:?}, stopping", sig);
            exit(1);
        }
    });

    init_logging(
        options.logging.unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    );

    let code = match dispatch(options.command) {
        Ok(code) => code,
        Err(Error::Api { status, body }) => {
            error!("API Error: {} - {}", status, body);
            1
        }
        Err(timeout @ Error::Timeout { .. }) => {
            error!("Timeout: {}", timeout);
            1
        }
        Err(e) => {
            error!("Error: {}", e);
            1
        }
    };
    exit(code);
}

fn dispatch(command: Command) -> Result<i32, Error> {
    match command {
        Command::Run(options) => {
            let app = App::new(options.api.api_key.clone(), options.api.api_url.clone())?;
            app.run(&options)
        }
        Command::Status(options) => {
            let app = App::new(options.api.api_key.clone(), options.api.api_url.clone())?;
            app.status(&options)
        }
    }
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) {
    // Operator logs go to stderr; stdout is reserved for rendered report
    // output so json/github formats stay machine-readable.
    let mut dispatcher = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file).expect("Cannot open log file"))
    }
    dispatcher.apply().expect("Cannot initialize logging");
    debug!("Logging level {} enabled", level);
}
