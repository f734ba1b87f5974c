// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use async_trait::async_trait;
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt as _, BufReader};

use crate::{client::Client, controller::Controller, error::Result, storage::Storage};

/// Browse interactively. Each line read is a path to show or one of
/// `select <ID>`, `back`, `reload`, `logout`, `quit`.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The path to show before reading any input.
    #[clap(default_value = "/")]
    path: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Input<'line> {
    Navigate(&'line str),
    Select(&'line str),
    Back,
    Reload,
    Logout,
    Quit,
    Unknown(&'line str),
}

impl<'line> Input<'line> {
    fn parse(line: &'line str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if line.starts_with('/') {
            return Some(Self::Navigate(line));
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        Some(match (word, rest.trim()) {
            ("select", id) if !id.is_empty() => Self::Select(id),
            ("back", "") => Self::Back,
            ("reload", "") => Self::Reload,
            ("logout", "") => Self::Logout,
            ("quit" | "exit", "") => Self::Quit,
            _ => Self::Unknown(line),
        })
    }
}

#[async_trait]
impl super::Command for Command {
    async fn execute<C: Client + Send + Sync, S: Storage>(
        self,
        controller: &mut Controller<C, S>,
    ) -> Result<()> {
        let input = BufReader::new(tokio::io::stdin());
        session(controller, &self.path, input, &mut StdoutWriter).await
    }
}

struct StdoutWriter;

impl Write for StdoutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

async fn session<C, S, R, W>(
    controller: &mut Controller<C, S>,
    start: &str,
    input: R,
    out: &mut W,
) -> Result<()>
where
    C: Client + Send + Sync,
    S: Storage,
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    let mut location = start.to_owned();
    controller.render(out, &location)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(input) = Input::parse(&line) else {
            continue;
        };

        match input {
            Input::Navigate(path) => {
                path.clone_into(&mut location);
                controller.render(out, &location)?;
            }
            Input::Select(id) => {
                let movie = controller
                    .state()
                    .catalog
                    .iter()
                    .find(|m| m.id == id)
                    .cloned();
                match movie {
                    Some(movie) => {
                        writeln!(out, "Selected {}.", movie.title)?;
                        controller.select_movie(movie);
                    }
                    None => writeln!(out, "No movie with ID {id} in the catalog.")?,
                }
            }
            Input::Back => {
                controller.deselect_movie();
                controller.render(out, &location)?;
            }
            Input::Reload => {
                controller.reload().await;
                controller.render(out, &location)?;
            }
            Input::Logout => {
                controller.handle_logout().await?;
                controller.render(out, &location)?;
            }
            Input::Quit => break,
            Input::Unknown(line) => writeln!(out, "Unknown command: {line}")?,
        }
    }

    Ok(())
}
