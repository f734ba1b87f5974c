// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{io, mem};

use log::{debug, error, warn};
use secrecy::{ExposeSecret as _, SecretString};

use crate::{
    client::Client,
    error::{Error, Result},
    model::{AuthData, Movie},
    render,
    route::Route,
    state::{Action, AppState},
    storage::{Key, Storage},
    view::View,
};

/// Owns the session, the catalog and the storage that outlives them both.
/// Every event handler runs to completion before the next one starts.
pub(crate) struct Controller<C, S> {
    client: C,
    storage: S,
    state: AppState,
}

impl<C: Client + Send + Sync, S: Storage> Controller<C, S> {
    pub(crate) fn new(client: C, storage: S) -> Self {
        Self {
            client,
            storage,
            state: AppState::default(),
        }
    }

    pub(crate) const fn state(&self) -> &AppState {
        &self.state
    }

    pub(crate) const fn client(&self) -> &C {
        &self.client
    }

    fn dispatch(&mut self, action: Action) {
        debug!("Applying {:?}", action);
        self.state = mem::take(&mut self.state).reduce(action);
    }

    /// Restores a saved session, if there is one, and loads its catalog.
    pub(crate) async fn mount(&mut self) {
        if let Some(token) = self.restore().await {
            self.fetch_catalog(&token).await;
        }
    }

    /// Restores a saved session without touching the catalog.
    pub(crate) async fn mount_without_catalog(&mut self) {
        _ = self.restore().await;
    }

    // A token with no username still loads the catalog, but nobody is logged
    // in. An unreadable store counts as an empty one.
    async fn restore(&mut self) -> Option<SecretString> {
        let saved = async {
            let token = self.storage.get(Key::Token).await?;
            let username = self.storage.get(Key::User).await?;
            Ok::<_, Error>((token, username))
        }
        .await;

        let (token, username) = match saved {
            Ok((Some(token), username)) => (SecretString::new(token), username),
            Ok((None, _)) => {
                debug!("No saved session to restore");
                return None;
            }
            Err(e) => {
                warn!("We could not read the saved session, so nobody is logged in: {}", e);
                return None;
            }
        };

        match username.filter(|username| !username.is_empty()) {
            Some(username) => self.dispatch(Action::LoggedIn {
                username,
                token: token.clone(),
            }),
            None => debug!("The saved session has a token but no username"),
        }
        Some(token)
    }

    /// Replaces the catalog with the server's. Failures are logged and leave
    /// the current catalog in place.
    pub(crate) async fn fetch_catalog(&mut self, token: &SecretString) {
        match self.client.movies(token).await {
            Ok(catalog) => self.dispatch(Action::CatalogLoaded(catalog)),
            Err(e) => error!("We could not fetch the movie catalog: {}", e),
        }
    }

    /// Fetches the catalog again for the current session, if any.
    pub(crate) async fn reload(&mut self) {
        match self.state.session.token().cloned() {
            Some(token) => self.fetch_catalog(&token).await,
            None => debug!("Not reloading the catalog without a session"),
        }
    }

    pub(crate) async fn handle_login_success(&mut self, auth: AuthData) -> Result<()> {
        let AuthData { user, token } = auth;

        self.dispatch(Action::LoggedIn {
            username: user.username.clone(),
            token: token.clone(),
        });
        self.storage
            .set(Key::Token, token.expose_secret())
            .await?;
        self.storage.set(Key::User, &user.username).await?;

        self.fetch_catalog(&token).await;
        Ok(())
    }

    pub(crate) async fn handle_logout(&mut self) -> Result<()> {
        self.dispatch(Action::LoggedOut);

        let removed = async {
            self.storage.remove(Key::User).await?;
            self.storage.remove(Key::Token).await?;
            Ok::<_, Error>(())
        }
        .await;
        if let Err(e) = removed {
            warn!("We could not remove the saved session, so we are clearing storage: {}", e);
            self.storage.clear().await?;
        }
        Ok(())
    }

    pub(crate) fn handle_registration_success(&mut self, payload: serde_json::Value) {
        self.dispatch(Action::Registered(payload));
    }

    pub(crate) fn select_movie(&mut self, movie: Movie) {
        self.dispatch(Action::MovieSelected(movie));
    }

    pub(crate) fn deselect_movie(&mut self) {
        self.dispatch(Action::MovieDeselected);
    }

    /// Renders the page for `path`, chrome included.
    pub(crate) fn render<W: io::Write>(&self, out: &mut W, path: &str) -> io::Result<()> {
        let route = Route::parse(path);
        if route.is_none() {
            debug!("No route matches {}", path);
        }
        let view = View::resolve(&self.state, route.as_ref());
        render::page(out, &self.state.session, &view)
    }
}
