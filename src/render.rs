// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use tabled::{
    settings::{object::Segment, Alignment, Modify, Style},
    Table,
};

use crate::{
    metadata,
    model::{Director, Movie},
    session::Session,
    view::View,
};

/// Writes a view between the header and footer that every page carries.
pub(crate) fn page<W: Write>(out: &mut W, session: &Session, view: &View<'_>) -> io::Result<()> {
    header(out, session)?;
    body(out, view)?;
    footer(out)
}

fn header<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    match session.username() {
        Some(username) => writeln!(out, "{} | {}", *metadata::CLIENT_DISPLAY_NAME, username),
        None => writeln!(out, "{}", *metadata::CLIENT_DISPLAY_NAME),
    }?;
    writeln!(out)
}

fn footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "myFlix Movie Database: all time favorite movie collection")
}

fn body<W: Write>(out: &mut W, view: &View<'_>) -> io::Result<()> {
    match view {
        View::Nothing => Ok(()),
        View::Login => writeln!(
            out,
            "You are not logged in. Run `{} login` to sign in.",
            *metadata::CLIENT_TYPE_ID
        ),
        View::Registration => writeln!(
            out,
            "Create an account with `{} register --username <NAME> --email <EMAIL>`.",
            *metadata::CLIENT_TYPE_ID
        ),
        View::Catalog(movies) => cards(out, movies.iter()),
        View::Movie(movie) => movie_detail(out, movie),
        View::Director(director) => director_detail(out, director),
        View::Genre { genre, movies } => {
            writeln!(out, "{}", genre.genre.name)?;
            if !genre.genre.description.is_empty() {
                writeln!(out, "{}", genre.genre.description)?;
            }
            writeln!(out)?;
            cards(
                out,
                movies
                    .iter()
                    .filter(|m| m.genre.name == genre.genre.name),
            )
        }
        View::NotFound { kind, key } => {
            writeln!(out, r#"No {} named "{}" in the catalog."#, kind.name(), key.escape_default())
        }
    }
}

fn cards<'movie, W: Write, I: IntoIterator<Item = &'movie Movie>>(
    out: &mut W,
    movies: I,
) -> io::Result<()> {
    let movies = movies.into_iter().collect::<Vec<_>>();
    if movies.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        Table::new(movies)
            .with(Style::rounded())
            .with(Modify::new(Segment::all()).with(Alignment::left()))
    )
}

fn movie_detail<W: Write>(out: &mut W, movie: &Movie) -> io::Result<()> {
    writeln!(out, "{}", movie.title)?;
    if !movie.description.is_empty() {
        writeln!(out, "{}", movie.description)?;
    }
    writeln!(out)?;
    writeln!(out, "Genre:    {}", movie.genre.name)?;
    writeln!(out, "Director: {}", movie.director.name)?;
    if !movie.image_path.is_empty() {
        writeln!(out, "Image:    {}", movie.image_path)?;
    }
    Ok(())
}

fn director_detail<W: Write>(out: &mut W, director: &Director) -> io::Result<()> {
    writeln!(out, "{}", director.name)?;
    if let Some(birth) = &director.birth {
        writeln!(out, "Born {birth}")?;
    }
    if !director.bio.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", director.bio)?;
    }
    Ok(())
}
