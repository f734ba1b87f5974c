// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use secrecy::SecretString;

use crate::{
    error::Result,
    model::{AuthData, Credentials, Movie, Registration},
};

/// The remote movie API.
#[async_trait]
pub(crate) trait Client {
    async fn movies(&self, token: &SecretString) -> Result<Vec<Movie>>;

    async fn login(&self, credentials: &Credentials) -> Result<AuthData>;

    async fn register(&self, registration: &Registration) -> Result<serde_json::Value>;
}
