// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use crate::{
    model::{Director, Movie},
    route::Route,
    state::AppState,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Movie,
    Director,
    Genre,
}

impl Kind {
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Director => "director",
            Self::Genre => "genre",
        }
    }
}

/// What a route resolves to against the current state. Borrows from the
/// state, so it is rebuilt on every navigation.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum View<'state> {
    Nothing,
    Login,
    Catalog(&'state [Movie]),
    Registration,
    Movie(&'state Movie),
    Director(&'state Director),
    Genre {
        genre: &'state Movie,
        movies: &'state [Movie],
    },
    NotFound {
        kind: Kind,
        key: &'state str,
    },
}

impl<'state> View<'state> {
    pub(crate) fn resolve(state: &'state AppState, route: Option<&'state Route>) -> Self {
        let catalog = state.catalog.as_slice();
        let Some(route) = route else {
            return Self::Nothing;
        };

        match route {
            Route::Root if state.session.is_authenticated() => Self::Catalog(catalog),
            Route::Root => Self::Login,
            Route::Register if state.is_registered() => Self::Nothing,
            Route::Register => Self::Registration,
            // Detail routes wait for a catalog before they look anything up.
            Route::MovieDetail(_) | Route::DirectorDetail(_) | Route::GenreDetail(_)
                if catalog.is_empty() =>
            {
                Self::Nothing
            }
            Route::MovieDetail(id) => catalog
                .iter()
                .find(|m| m.id == *id)
                .map_or(Self::not_found(Kind::Movie, id), Self::Movie),
            Route::DirectorDetail(name) => catalog
                .iter()
                .find(|m| m.director.name == *name)
                .map_or(Self::not_found(Kind::Director, name), |m| {
                    Self::Director(&m.director)
                }),
            Route::GenreDetail(name) => catalog
                .iter()
                .find(|m| m.genre.name == *name)
                .map_or(Self::not_found(Kind::Genre, name), |genre| Self::Genre {
                    genre,
                    movies: catalog,
                }),
        }
    }

    const fn not_found(kind: Kind, key: &'state str) -> Self {
        Self::NotFound { kind, key }
    }
}
