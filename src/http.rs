// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use log::debug;
use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use crate::{
    client,
    error::{self, Result},
    metadata,
    model::{AuthData, Credentials, Movie, Registration},
};

/// Talks to the myFlix REST API over HTTP.
pub(crate) struct Client {
    http: reqwest::Client,
    base: Url,
}

impl Client {
    pub(crate) fn new(mut base: Url) -> Result<Self> {
        // Endpoints are joined onto the base, so it has to look like a
        // directory.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .user_agent(metadata::USER_AGENT.as_str())
            .build()?;
        Ok(Self { http, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path).map_err(error::Api::from)?)
    }
}

#[async_trait]
impl client::Client for Client {
    async fn movies(&self, token: &SecretString) -> Result<Vec<Movie>> {
        let url = self.endpoint("movies")?;
        debug!("Fetching the catalog from {}", url);

        Ok(self
            .http
            .get(url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthData> {
        let url = self.endpoint("login")?;
        debug!("Logging in as {} at {}", credentials.username, url);

        Ok(self
            .http
            .post(url)
            .json(credentials)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    async fn register(&self, registration: &Registration) -> Result<serde_json::Value> {
        let url = self.endpoint("users")?;
        debug!("Registering {} at {}", registration, url);

        Ok(self
            .http
            .post(url)
            .json(registration)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}
