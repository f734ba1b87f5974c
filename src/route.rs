// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use percent_encoding::percent_decode_str;

/// A client-side location. Parsed once per navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Root,
    Register,
    MovieDetail(String),
    DirectorDetail(String),
    GenreDetail(String),
}

impl Route {
    /// Matches a path against the known routes. Returns `None` for paths that
    /// have no view of their own.
    pub(crate) fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Root);
        }

        let segments = trimmed.split('/').collect::<Vec<_>>();
        match segments.as_slice() {
            ["register"] => Some(Self::Register),
            ["movies", id] => decode(id).map(Self::MovieDetail),
            ["directors", name] => decode(name).map(Self::DirectorDetail),
            ["genres", name] => decode(name).map(Self::GenreDetail),
            _ => None,
        }
    }
}

fn decode(segment: &str) -> Option<String> {
    let decoded = percent_decode_str(segment).decode_utf8().ok()?;
    if decoded.is_empty() {
        None
    } else {
        Some(decoded.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Root));
        assert_eq!(Route::parse(""), Some(Route::Root));
        assert_eq!(Route::parse("/register"), Some(Route::Register));
        assert_eq!(
            Route::parse("/movies/5f2c"),
            Some(Route::MovieDetail("5f2c".to_owned()))
        );
        assert_eq!(
            Route::parse("/directors/Ridley%20Scott"),
            Some(Route::DirectorDetail("Ridley Scott".to_owned()))
        );
        assert_eq!(
            Route::parse("/genres/Comedy/"),
            Some(Route::GenreDetail("Comedy".to_owned()))
        );
    }

    #[test]
    fn raw_spaces_are_accepted() {
        assert_eq!(
            Route::parse("/genres/Science Fiction"),
            Some(Route::GenreDetail("Science Fiction".to_owned()))
        );
    }

    #[test]
    fn ignores_query_and_fragment() {
        assert_eq!(
            Route::parse("/movies/1?autoplay=1#top"),
            Some(Route::MovieDetail("1".to_owned()))
        );
    }

    #[test]
    fn unmatched_paths() {
        assert_eq!(Route::parse("/profile"), None);
        assert_eq!(Route::parse("/movies"), None);
        assert_eq!(Route::parse("/movies/1/cast"), None);
        assert_eq!(Route::parse("/genres/%FF"), None);
    }
}
