// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Genre {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Director {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) bio: String,
    #[serde(default, alias = "BirthYear", deserialize_with = "deserialize_year")]
    pub(crate) birth: Option<String>,
}

/// A single catalog record. Rendered as one card (table row) in the catalog
/// grid.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Tabled)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Movie {
    #[serde(rename = "_id")]
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[serde(default)]
    #[tabled(skip)]
    pub(crate) description: String,
    #[tabled(rename = "Genre", display_with = "Self::format_genre")]
    pub(crate) genre: Genre,
    #[tabled(rename = "Director", display_with = "Self::format_director")]
    pub(crate) director: Director,
    #[serde(default)]
    #[tabled(skip)]
    pub(crate) image_path: String,
}

impl Movie {
    fn format_genre(genre: &Genre) -> String {
        genre.name.clone()
    }

    fn format_director(director: &Director) -> String {
        director.name.clone()
    }
}

// The catalog has been seen with both `1937` and `"1937"`.
fn deserialize_year<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i64),
        Text(String),
    }

    Ok(
        Option::<Year>::deserialize(deserializer)?.map(|year| match year {
            Year::Number(n) => n.to_string(),
            Year::Text(s) => s,
        }),
    )
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct User {
    #[serde(rename = "Username")]
    pub(crate) username: String,
}

/// The payload handed back by a successful login.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct AuthData {
    pub(crate) user: User,
    pub(crate) token: SecretString,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Registration {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) birthday: Option<String>,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)
    }
}
