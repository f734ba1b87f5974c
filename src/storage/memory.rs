// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;

use super::{IsPersistent, Key, Storage};

/// Storage that lives only as long as the process. Clones share their data.
#[derive(Clone, Default)]
pub(crate) struct Memory {
    data: Arc<RwLock<HashMap<Key, String>>>,
}

impl Memory {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl IsPersistent for Memory {
    fn is_persistent(&self) -> bool {
        false
    }
}

#[async_trait]
impl Storage for Memory {
    async fn get(&mut self, key: Key) -> Result<Option<String>> {
        let guard = self.data.read().await;
        Ok(guard.get(&key).cloned())
    }

    async fn set(&mut self, key: Key, value: &str) -> Result<()> {
        let mut guard = self.data.write().await;
        _ = guard.insert(key, value.to_owned());
        Ok(())
    }

    async fn remove(&mut self, key: Key) -> Result<()> {
        let mut guard = self.data.write().await;
        _ = guard.remove(&key);
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        self.data.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Result;

    use super::*;

    #[tokio::test]
    async fn clones_share_data() -> Result<()> {
        let mut storage = Memory::new();
        let mut observer = storage.clone();

        storage.set(Key::Token, "abc").await?;
        assert_eq!(observer.get(Key::Token).await?.as_deref(), Some("abc"));
        assert_eq!(observer.get(Key::User).await?, None);

        observer.remove(Key::Token).await?;
        assert_eq!(storage.get(Key::Token).await?, None);

        storage.set(Key::User, "U").await?;
        storage.clear().await?;
        assert_eq!(observer.get(Key::User).await?, None);
        Ok(())
    }
}
