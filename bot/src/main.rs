use clap::Parser;
use std::process;
use trading_bot::{
    cli::Cli,
    errors::{BotError, EXIT_OK, EXIT_UNEXPECTED, exit_code, user_message},
    run,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // .env 不存在时忽略
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut stdout = std::io::stdout();
    let code = match run(&cli, &mut stdout).await {
        Ok(_) => EXIT_OK,
        Err(e) => {
            report(&e);
            exit_code(&e)
        }
    };
    process::exit(code);
}

fn report(err: &BotError) {
    if exit_code(err) == EXIT_UNEXPECTED {
        log::error!("Unexpected error: {:?}", err);
    }
    eprintln!("\n{}\n", user_message(err));
}
