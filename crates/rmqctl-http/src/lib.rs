//! HTTP management-API client and CLI surface for rmqctl.

pub mod http;

pub use http::cli::{Cli, Commands, handle_cli_command};
pub use http::client::{ClientError, ManagementClient};
