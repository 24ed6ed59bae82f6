use clap::Parser;
use std::io;
use std::process;

/// Native-messaging host for the text-saver browser extension.
///
/// Launched by the browser, never directly by a user. Speaks length-prefixed
/// JSON over stdin/stdout; logs go to stderr (set RUST_LOG to enable).
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Arguments the browser passes at launch (extension origin for Chrome,
    /// manifest path and extension id for Firefox). Logged, otherwise unused.
    #[arg(allow_hyphen_values = true)]
    launch_args: Vec<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if !cli.launch_args.is_empty() {
        log::info!("launched with {:?}", cli.launch_args);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = textsaver_host::run(&mut stdin.lock(), &mut stdout.lock()) {
        log::error!("fatal: {}", err);
        process::exit(1);
    }
}
