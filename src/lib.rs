pub mod cli;
pub mod client;
pub mod domain;
pub mod errors;
pub mod helper;
pub mod prelude;
pub mod server;
pub mod store;
