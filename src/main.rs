mod error;
mod polls;
mod store;
mod web;

use std::env;
use std::process;
use std::sync::Arc;

use chrono::Utc;
use dotenvy::dotenv;

use store::{FileBackend, PollStore};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let store_dir = env::var("VANISH_STORE_DIR")
        .unwrap_or_else(|_| String::from("data"));
    let store = PollStore::new(Box::new(FileBackend::new(&store_dir)));

    if let Err(err) = store.initialize(Utc::now()) {
        log::error!("could not initialize the poll store in '{store_dir}': {err}");
        process::exit(1);
    }

    web::setup(Arc::new(store)).await;
}
