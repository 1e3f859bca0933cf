// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod pipeline;
pub mod queue;
pub mod store;
pub mod types;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::config::load_or_default;
use crate::engine::OrderService;
use crate::pipeline::NewOrder;
use crate::queue::search_tasks;
use crate::store::JsonFileStore;

/// High-level entry point used by `main.rs`.
///
/// Loads config, opens the JSON store, runs one command and prints its
/// result as JSON on stdout.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(&args.config)?;
    let store_path = args.store.clone().unwrap_or_else(|| cfg.store.path.clone());
    debug!(store = %store_path.display(), stages = cfg.pipeline.len(), "opening order store");

    let service = OrderService::new(JsonFileStore::new(store_path), cfg.pipeline);

    match args.command {
        Command::List {
            search,
            filter,
            summary,
        } => {
            if summary {
                print_json(&service.summary().await?)
            } else {
                print_json(&service.list_filtered(&search, filter.into()).await?)
            }
        }
        Command::Create {
            customer,
            rep,
            due_date,
            mfg_id,
        } => {
            let order = service
                .create(NewOrder {
                    customer,
                    rep,
                    due_date,
                    mfg_id,
                })
                .await?;
            print_json(&order)
        }
        Command::Mutate {
            order_id,
            department,
            action,
            note,
        } => {
            let order = service
                .mutate(&order_id, &department, &action, note.as_deref())
                .await?;
            print_json(&order)
        }
        Command::Tasks { department, search } => {
            let tasks = search_tasks(service.tasks_for(&department).await?, &search);
            print_json(&tasks)
        }
        Command::Pipeline => {
            let names: Vec<&str> = service.template().names().collect();
            print_json(&names)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
