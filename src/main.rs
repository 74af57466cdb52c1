use clap::Parser;
use postboard::cli_app::{handle_command, Cli};
use postboard::logger::init_logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let stdin = std::io::stdin();
    if let Err(e) = handle_command(cli, stdin.lock(), std::io::stdout()).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
