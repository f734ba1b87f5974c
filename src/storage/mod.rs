// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

mod file;
mod memory;

use async_trait::async_trait;

use crate::error::Result;

pub(crate) use file::File;
pub(crate) use memory::Memory;

/// The keys the client keeps in durable storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Key {
    Token,
    User,
}

impl Key {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::User => "user",
        }
    }
}

pub(crate) trait IsPersistent {
    fn is_persistent(&self) -> bool;
}

impl<T: IsPersistent + ?Sized> IsPersistent for Box<T> {
    fn is_persistent(&self) -> bool {
        (**self).is_persistent()
    }
}

/// A string-keyed store that may survive across invocations.
#[async_trait]
pub(crate) trait Storage: Send + Sync + IsPersistent {
    async fn get(&mut self, key: Key) -> Result<Option<String>>;
    async fn set(&mut self, key: Key, value: &str) -> Result<()>;
    async fn remove(&mut self, key: Key) -> Result<()>;
    /// Drops everything, whatever state the store is in.
    async fn clear(&mut self) -> Result<()>;
}

#[async_trait]
impl<T: Storage + ?Sized> Storage for Box<T> {
    async fn get(&mut self, key: Key) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&mut self, key: Key, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&mut self, key: Key) -> Result<()> {
        (**self).remove(key).await
    }

    async fn clear(&mut self) -> Result<()> {
        (**self).clear().await
    }
}
