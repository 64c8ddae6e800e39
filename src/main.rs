pub(crate) mod calendar;
pub(crate) mod chart;
mod cli;
pub mod data;
pub(crate) mod entity;
mod server;

use std::env;

#[tokio::main]
async fn main() {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    cli::run().await;
}
