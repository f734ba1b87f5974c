// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use tokio::io::{self, AsyncBufReadExt as _, AsyncWriteExt as _};

use crate::{client::Client, controller::Controller, error::Result, storage::Storage};

pub(crate) mod browse;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod open;
pub(crate) mod register;

#[async_trait]
pub(crate) trait Command {
    /// Whether the catalog has to be loaded before the command runs.
    fn needs_catalog(&self) -> bool {
        true
    }

    async fn execute<C: Client + Send + Sync, S: Storage>(
        self,
        controller: &mut Controller<C, S>,
    ) -> Result<()>;
}

/// Asks for a single line of visible input on the terminal.
pub(crate) async fn prompt_line(label: &str) -> Result<Option<String>> {
    let mut stderr = io::stderr();
    stderr.write_all(format!("{label}: ").as_bytes()).await?;
    stderr.flush().await?;

    let mut lines = io::BufReader::new(io::stdin()).lines();
    Ok(lines
        .next_line()
        .await?
        .map(|line| line.trim().to_owned())
        .filter(|line| !line.is_empty()))
}
