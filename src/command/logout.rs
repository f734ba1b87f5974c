// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{client::Client, controller::Controller, error::Result, storage::Storage};

/// Forget the saved session.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    fn needs_catalog(&self) -> bool {
        false
    }

    async fn execute<C: Client + Send + Sync, S: Storage>(
        self,
        controller: &mut Controller<C, S>,
    ) -> Result<()> {
        let username = controller.state().session.username().map(str::to_owned);
        controller.handle_logout().await?;

        match username {
            Some(username) => println!("Logged out {username}."),
            None => println!("Not logged in."),
        }
        Ok(())
    }
}
