pub mod cli;
pub mod client;
pub mod queues;
pub mod users;
