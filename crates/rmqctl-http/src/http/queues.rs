//! Queue CLI commands: listing and bulk deletion.

use super::client::ManagementClient;
use clap::Subcommand;
use rmqctl::bulk::{self, BulkResult};
use rmqctl::select::{SelectionSpec, select};

#[derive(Subcommand)]
pub enum QueueCommands {
    /// List queues across all vhosts.
    List,
    /// Delete one or more queues in a vhost.
    Delete {
        /// VHost containing the queues.
        #[arg(long)]
        vhost: String,
        /// Treat terms as regular expressions matched against queue names.
        #[arg(short = 'm', long = "match")]
        matching: bool,
        /// Queue names, or regexes with --match.
        #[arg(required = true)]
        terms: Vec<String>,
    },
}

pub async fn handle_queue_command(client: &ManagementClient, queue_cmd: QueueCommands) {
    match queue_cmd {
        QueueCommands::List => {
            list_queues_command(client).await;
        }
        QueueCommands::Delete {
            vhost,
            matching,
            terms,
        } => {
            delete_queues_command(client, &vhost, matching, terms).await;
        }
    }
}

async fn list_queues_command(client: &ManagementClient) {
    match client.list_queues().await {
        Ok(queues) => {
            println!("Name,VHost,Durable,AutoDelete");
            for queue in queues {
                println!(
                    "{},{},{},{}",
                    queue.name, queue.vhost, queue.durable, queue.auto_delete
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to list queues: {e}");
            std::process::exit(1);
        }
    }
}

async fn delete_queues_command(
    client: &ManagementClient,
    vhost: &str,
    matching: bool,
    terms: Vec<String>,
) {
    let spec = if matching {
        SelectionSpec::Pattern { patterns: terms }
    } else {
        SelectionSpec::Literal { names: terms }
    };

    let inventory = match client.list_queues().await {
        Ok(queues) => queues,
        Err(e) => {
            eprintln!("Failed to list queues: {e}");
            std::process::exit(1);
        }
    };

    let names = match select(&inventory, &spec) {
        Ok(names) => names,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let result = bulk::execute(vhost, &names, client).await;
    report_bulk_result(&result);

    if !result.all_succeeded {
        std::process::exit(1);
    }
}

fn report_bulk_result(result: &BulkResult) {
    for outcome in &result.outcomes {
        if !outcome.succeeded {
            eprintln!(
                "Failed to delete queue '{}': {}",
                outcome.queue_name, outcome.detail
            );
        }
    }

    if result.aborted {
        eprintln!("Batch aborted; remaining queues were not attempted");
    }
}
