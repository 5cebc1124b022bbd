use std::process;

use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use kmernext::{
    cli::{Args, USAGE},
    input::Input,
    run,
};

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        ErrorKind::MissingRequiredArgument
        | ErrorKind::UnknownArgument
        | ErrorKind::TooManyValues => {
            println!("{USAGE}");
            process::exit(1);
        }
        _ => {
            eprintln!(
                "{}\n {}",
                "Problem parsing arguments:".blue().bold(),
                e.to_string().trim_end().blue()
            );
            eprintln!("{USAGE}");
            process::exit(2);
        }
    });

    #[cfg(feature = "tracing")]
    init_tracing();

    match run::run(Input::from_path(&args.path), args.k) {
        Ok(out) => println!("Output written to {}", out.display()),
        Err(e) => {
            eprintln!(
                "{}\n {}",
                "Application error:".blue().bold(),
                e.to_string().blue()
            );
            process::exit(1);
        }
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
