// Legal Lens - Terminal Host Entry Point
//
// Reads one line at a time from stdin. Plain lines are analysed in the
// active input mode; `:mode`, `:reset`, `:contact` and `:quit` are
// directives. Logs go to stderr, views go to stdout.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use legal_lens::commands::{self, HostCommand};
use legal_lens::{AppState, CommandResponse, SessionView};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_view(response: CommandResponse<SessionView>) {
    if let Some(error) = response.error {
        eprintln!("{}", error);
    }
    if let Some(view) = response.data {
        println!("{}", view);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let state = AppState::from_env().context("failed to initialise application state")?;
    tracing::info!(base_url = state.config().base_url(), "legal lens ready");

    print_view(commands::get_analysis_view(&state).await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<HostCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            HostCommand::Quit => break,
            HostCommand::Mode(mode) => {
                let response = commands::set_input_mode(&state, mode).await;
                println!("Input mode: {} ({})", mode, mode.placeholder());
                print_view(response);
            }
            HostCommand::Reset => print_view(commands::reset_analysis(&state).await),
            HostCommand::Submit(query) => print_view(commands::submit_query(&state, query).await),
            HostCommand::Contact(form) => {
                let response = commands::submit_contact(&state, form).await;
                match response.error {
                    Some(error) => eprintln!("{}", error),
                    None => println!("Thank you for contacting us. We'll get back to you within 2 business hours."),
                }
            }
        }
    }

    Ok(())
}
