// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use secrecy::{ExposeSecret as _, SecretString};
use tokio::task;

use crate::error::{Error, Result};

#[async_trait]
pub(crate) trait Prompt: Send + Sync {
    async fn prompt(&self, label: &str) -> Result<SecretString>;
}

/// Reads a password from the terminal without echoing it.
pub(crate) struct RpasswordPrompt;

#[async_trait]
impl Prompt for RpasswordPrompt {
    async fn prompt(&self, label: &str) -> Result<SecretString> {
        let label = format!("{label}: ");
        let password = task::spawn_blocking(move || {
            rpassword::prompt_password(label).map(SecretString::new)
        })
        .await??;

        if password.expose_secret().is_empty() {
            return Err(Error::Cancelled);
        }
        Ok(password)
    }
}
