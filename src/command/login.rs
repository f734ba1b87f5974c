// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use async_trait::async_trait;
use clap::Parser;
use secrecy::ExposeSecret as _;

use crate::{
    client::Client,
    controller::Controller,
    error::{Error, Result},
    model::Credentials,
    password::{Prompt as _, RpasswordPrompt},
    storage::Storage,
};

/// Log in and show the catalog.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The account to log in as. Prompted for when omitted.
    #[arg(long, short)]
    username: Option<String>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute<C: Client + Send + Sync, S: Storage>(
        self,
        controller: &mut Controller<C, S>,
    ) -> Result<()> {
        let username = match self.username {
            Some(username) => username,
            None => super::prompt_line("Username")
                .await?
                .ok_or(Error::Cancelled)?,
        };
        let password = RpasswordPrompt.prompt("Password").await?;

        log_in(
            controller,
            &Credentials {
                username,
                password: password.expose_secret().clone(),
            },
        )
        .await?;

        controller.render(&mut io::stdout().lock(), "/")?;
        Ok(())
    }
}

/// Exchanges credentials for a session and hands it to the controller.
pub(crate) async fn log_in<C: Client + Send + Sync, S: Storage>(
    controller: &mut Controller<C, S>,
    credentials: &Credentials,
) -> Result<()> {
    let auth = controller.client().login(credentials).await?;
    controller.handle_login_success(auth).await
}

#[cfg(test)]
mod tests {
    use crate::{
        controller::tests::Fake,
        error::{self, Error, Result},
        storage::{Key, Memory},
    };

    use super::*;

    fn credentials(password: &str) -> Credentials {
        Credentials {
            username: "zag".to_owned(),
            password: password.to_owned(),
        }
    }

    #[tokio::test]
    async fn successful_login_is_persisted() -> Result<()> {
        let mut storage = Memory::new();
        let fake = Fake::serving(vec![]);
        let mut controller = Controller::new(fake.clone(), storage.clone());

        log_in(&mut controller, &credentials("hunter2")).await?;

        assert_eq!(controller.state().session.username(), Some("zag"));
        assert_eq!(storage.get(Key::Token).await?.as_deref(), Some("zag-token"));
        assert_eq!(fake.fetches(), ["zag-token"]);
        Ok(())
    }

    #[tokio::test]
    async fn rejected_login_changes_nothing() -> Result<()> {
        let mut storage = Memory::new();
        let fake = Fake::serving(vec![]);
        let mut controller = Controller::new(fake.clone(), storage.clone());

        let result = log_in(&mut controller, &credentials("wrong")).await;

        assert!(matches!(
            result,
            Err(Error::Api(error::Api::Status(401)))
        ));
        assert!(!controller.state().session.is_authenticated());
        assert_eq!(storage.get(Key::Token).await?, None);
        assert!(fake.fetches().is_empty());
        Ok(())
    }
}
