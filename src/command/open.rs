// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use async_trait::async_trait;
use clap::Parser;

use crate::{client::Client, controller::Controller, error::Result, storage::Storage};

/// Show the page at a path, like `/movies/<ID>` or `/genres/<NAME>`.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The path to show.
    #[clap(default_value = "/")]
    path: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute<C: Client + Send + Sync, S: Storage>(
        self,
        controller: &mut Controller<C, S>,
    ) -> Result<()> {
        controller.render(&mut io::stdout().lock(), &self.path)?;
        Ok(())
    }
}
