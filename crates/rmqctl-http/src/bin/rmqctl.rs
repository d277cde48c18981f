//! rmqctl binary.

use clap::Parser;
use rmqctl_http::{Cli, ManagementClient, handle_cli_command};

#[tokio::main]
async fn main() {
    rmqctl::telemetry::init();

    let cli = Cli::parse();
    let client = match ManagementClient::from_url(&cli.url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    handle_cli_command(&client, cli.command).await;
}
