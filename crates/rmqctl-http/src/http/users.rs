//! User CLI commands.

use super::client::ManagementClient;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List users and their tags.
    List,
}

pub async fn handle_user_command(client: &ManagementClient, user_cmd: UserCommands) {
    match user_cmd {
        UserCommands::List => {
            list_users_command(client).await;
        }
    }
}

async fn list_users_command(client: &ManagementClient) {
    match client.list_users().await {
        Ok(users) => {
            println!("Name,Tags");
            for user in users {
                println!("{},{}", user.name, user.tags.join(" "));
            }
        }
        Err(e) => {
            eprintln!("Failed to list users: {e}");
            std::process::exit(1);
        }
    }
}
