// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use secrecy::SecretString;

#[derive(Clone, Debug, Default)]
pub(crate) enum Session {
    #[default]
    LoggedOut,
    LoggedIn {
        username: String,
        token: SecretString,
    },
}

impl Session {
    pub(crate) fn new_authenticated(username: String, token: SecretString) -> Self {
        Self::LoggedIn { username, token }
    }

    pub(crate) fn username(&self) -> Option<&str> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn { username, .. } => Some(username),
        }
    }

    pub(crate) const fn token(&self) -> Option<&SecretString> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn { token, .. } => Some(token),
        }
    }

    pub(crate) const fn is_authenticated(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }
}
