use dotenv::dotenv;
use phonebook::{helper, prelude::run_app};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    helper::init_tracing();

    match run_app().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
