use myshell::error::ShellError;
use myshell::flags::Flags;
use myshell::shell::Shell;
use myshell::{logging, process::signal, SHELL_NAME};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", SHELL_NAME, e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("{} {}", SHELL_NAME, env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(flags.is_set("debug"));
    signal::install_interrupt_handler()?;

    let mut shell = Shell::new(&flags)?;
    shell.run()
}
