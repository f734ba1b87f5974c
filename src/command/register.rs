// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use secrecy::ExposeSecret as _;

use crate::{
    client::Client,
    controller::Controller,
    error::Result,
    model::Registration,
    password::{Prompt as _, RpasswordPrompt},
    storage::Storage,
};

/// Create a new account.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The name to log in with.
    #[arg(long, short)]
    username: String,

    /// The email address to associate with the account.
    #[arg(long, short)]
    email: String,

    /// Your date of birth, as YYYY-MM-DD.
    #[arg(long, short)]
    birthday: Option<String>,
}

#[async_trait]
impl super::Command for Command {
    fn needs_catalog(&self) -> bool {
        false
    }

    async fn execute<C: Client + Send + Sync, S: Storage>(
        self,
        controller: &mut Controller<C, S>,
    ) -> Result<()> {
        let password = RpasswordPrompt.prompt("Choose a password").await?;
        let registration = Registration {
            username: self.username,
            password: password.expose_secret().clone(),
            email: self.email,
            birthday: self.birthday,
        };

        register(controller, &registration).await?;
        println!(
            "Registered {}. Run `{} login` to sign in.",
            registration,
            *crate::metadata::CLIENT_TYPE_ID
        );
        Ok(())
    }
}

pub(crate) async fn register<C: Client + Send + Sync, S: Storage>(
    controller: &mut Controller<C, S>,
    registration: &Registration,
) -> Result<()> {
    let payload = controller.client().register(registration).await?;
    controller.handle_registration_success(payload);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{controller::tests::Fake, error::Result, storage::Memory};

    use super::*;

    #[tokio::test]
    async fn registration_is_recorded() -> Result<()> {
        let mut controller = Controller::new(Fake::default(), Memory::new());
        register(
            &mut controller,
            &Registration {
                username: "zag".to_owned(),
                password: "hunter2".to_owned(),
                email: "z@example.com".to_owned(),
                birthday: Some("1990-01-01".to_owned()),
            },
        )
        .await?;

        assert_eq!(
            controller.state().registration,
            Some(serde_json::json!({ "Username": "zag" }))
        );
        assert!(!controller.state().session.is_authenticated());
        Ok(())
    }
}
