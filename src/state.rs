// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use secrecy::SecretString;

use crate::{model::Movie, session::Session};

/// Everything the client knows during one session.
#[derive(Clone, Debug, Default)]
pub(crate) struct AppState {
    pub(crate) session: Session,
    /// The most recent successful catalog fetch, in server order.
    pub(crate) catalog: Vec<Movie>,
    pub(crate) selected: Option<Movie>,
    pub(crate) registration: Option<serde_json::Value>,
}

#[derive(Clone, Debug)]
pub(crate) enum Action {
    LoggedIn {
        username: String,
        token: SecretString,
    },
    LoggedOut,
    CatalogLoaded(Vec<Movie>),
    Registered(serde_json::Value),
    MovieSelected(Movie),
    MovieDeselected,
}

impl AppState {
    #[must_use]
    pub(crate) fn reduce(self, action: Action) -> Self {
        match action {
            Action::LoggedIn { username, token } => Self {
                session: Session::new_authenticated(username, token),
                ..self
            },
            // The catalog outlives the session; see DESIGN.md.
            Action::LoggedOut => Self {
                session: Session::LoggedOut,
                ..self
            },
            Action::CatalogLoaded(catalog) => Self { catalog, ..self },
            Action::Registered(payload) => Self {
                registration: Some(payload),
                ..self
            },
            Action::MovieSelected(movie) => Self {
                selected: Some(movie),
                ..self
            },
            Action::MovieDeselected => Self {
                selected: None,
                ..self
            },
        }
    }

    pub(crate) const fn is_registered(&self) -> bool {
        self.registration.is_some()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret as _;

    use crate::model::tests::movie;

    use super::*;

    fn logged_in(username: &str) -> Action {
        Action::LoggedIn {
            username: username.to_owned(),
            token: SecretString::new(format!("{username}-token")),
        }
    }

    #[test]
    fn login_replaces_previous_session() {
        let state = AppState::default()
            .reduce(logged_in("first"))
            .reduce(logged_in("second"));

        assert_eq!(state.session.username(), Some("second"));
        assert_eq!(
            state.session.token().map(|t| t.expose_secret().as_str()),
            Some("second-token")
        );
    }

    #[test]
    fn catalog_is_replaced_wholesale() {
        let state = AppState::default()
            .reduce(Action::CatalogLoaded(vec![
                movie("1", "Horror", "A"),
                movie("2", "Comedy", "B"),
            ]))
            .reduce(Action::CatalogLoaded(vec![movie("3", "Drama", "C")]));

        assert_eq!(
            state.catalog.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            ["3"]
        );
    }

    #[test]
    fn logout_keeps_catalog_and_selection() {
        let catalog = vec![movie("1", "Horror", "A")];
        let state = AppState::default()
            .reduce(logged_in("zag"))
            .reduce(Action::CatalogLoaded(catalog.clone()))
            .reduce(Action::MovieSelected(catalog[0].clone()))
            .reduce(Action::LoggedOut);

        assert!(!state.session.is_authenticated());
        assert_eq!(state.catalog, catalog);
        assert_eq!(state.selected.as_ref(), catalog.first());
    }

    #[test]
    fn select_and_deselect() {
        let state = AppState::default().reduce(Action::MovieSelected(movie("1", "Horror", "A")));
        assert_eq!(state.selected.as_ref().map(|m| m.id.as_str()), Some("1"));

        let state = state.reduce(Action::MovieDeselected);
        assert!(state.selected.is_none());
    }

    #[test]
    fn registration_is_remembered() {
        let state = AppState::default();
        assert!(!state.is_registered());

        let state = state.reduce(Action::Registered(serde_json::json!({ "Username": "zag" })));
        assert!(state.is_registered());
    }
}
