// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    missing_doc_code_examples,
    private_doc_tests,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::single_char_lifetime_names,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug,
    clippy::future_not_send
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

mod client;
mod command;
mod controller;
mod error;
mod http;
mod metadata;
mod model;
mod password;
mod render;
mod route;
mod session;
mod state;
mod storage;
mod view;

use std::process;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use client::Client;
use controller::Controller;
use error::Result;
use log::{error, warn};
use storage::{IsPersistent as _, Storage};
use url::Url;

#[derive(Debug, Subcommand)]
enum Command {
    Login(command::login::Command),
    Register(command::register::Command),
    Logout(command::logout::Command),
    Open(command::open::Command),
    Browse(command::browse::Command),
}

#[async_trait]
impl command::Command for Command {
    fn needs_catalog(&self) -> bool {
        match self {
            Self::Login(cmd) => cmd.needs_catalog(),
            Self::Register(cmd) => cmd.needs_catalog(),
            Self::Logout(cmd) => cmd.needs_catalog(),
            Self::Open(cmd) => cmd.needs_catalog(),
            Self::Browse(cmd) => cmd.needs_catalog(),
        }
    }

    async fn execute<C: Client + Send + Sync, S: Storage>(
        self,
        controller: &mut Controller<C, S>,
    ) -> Result<()> {
        match self {
            Self::Login(cmd) => cmd.execute(controller).await,
            Self::Register(cmd) => cmd.execute(controller).await,
            Self::Logout(cmd) => cmd.execute(controller).await,
            Self::Open(cmd) => cmd.execute(controller).await,
            Self::Browse(cmd) => cmd.execute(controller).await,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The base URL of the myFlix API.
    #[arg(long, env = "MYFLIX_URL", default_value = metadata::DEFAULT_API_URL, value_parser = Url::parse)]
    url: Url,

    /// Keep the session in memory only. Nothing is read from or written to
    /// disk.
    #[arg(long)]
    no_persist: bool,

    #[clap(subcommand)]
    command: Command,
}

fn get_storage(args: &Args) -> Box<dyn Storage> {
    let storage: Box<dyn Storage> = if args.no_persist {
        Box::new(storage::Memory::new())
    } else if let Some(file_storage) = storage::File::new("storage.json") {
        Box::new(file_storage)
    } else {
        Box::new(storage::Memory::new())
    };

    if !args.no_persist && !storage.is_persistent() {
        warn!("We could not find a data directory, so your session will not be remembered");
    }
    storage
}

async fn run(args: Args) -> Result<()> {
    let storage = get_storage(&args);
    let client = http::Client::new(args.url)?;

    let mut controller = Controller::new(client, storage);
    if command::Command::needs_catalog(&args.command) {
        controller.mount().await;
    } else {
        controller.mount_without_catalog().await;
    }

    command::Command::execute(args.command, &mut controller).await
}

#[tokio::main]
async fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("MYFLIX_LOG", "warn")
        .write_style("MYFLIX_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    if let Err(e) = run(Args::parse()).await {
        error!("We encountered an error: {}", e);
        process::exit(1);
    };
}
