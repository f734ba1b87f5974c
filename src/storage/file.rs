// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;

use crate::{error::Result, metadata};

use super::{IsPersistent, Key, Storage};

/// Storage backed by a JSON object in the user's data directory.
pub(crate) struct File {
    path: PathBuf,
}

impl File {
    pub(crate) fn new<P: AsRef<Path>>(file: P) -> Option<Self> {
        metadata::PROJECT_DIRS
            .as_ref()
            .map(|dirs| Self::new_at(dirs.data_dir().join(file)))
    }

    pub(crate) fn new_at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<BTreeMap<String, String>> {
        match fs::File::open(&self.path) {
            Ok(fp) => Ok(serde_json::from_reader(io::BufReader::new(fp))?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, data: &BTreeMap<String, String>) -> Result<()> {
        if data.is_empty() {
            return self.delete();
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(&self.path)?;
        serde_json::to_writer(file, data)?;
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            Ok(()) | Err(_) => Ok(()),
        }
    }
}

impl IsPersistent for File {
    fn is_persistent(&self) -> bool {
        true
    }
}

#[async_trait]
impl Storage for File {
    async fn get(&mut self, key: Key) -> Result<Option<String>> {
        Ok(self.read()?.remove(key.as_str()))
    }

    async fn set(&mut self, key: Key, value: &str) -> Result<()> {
        let mut data = self.read()?;
        _ = data.insert(key.as_str().to_owned(), value.to_owned());
        self.write(&data)
    }

    async fn remove(&mut self, key: Key) -> Result<()> {
        let mut data = self.read()?;
        if data.remove(key.as_str()).is_some() {
            self.write(&data)?;
        }
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        self.delete()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, Result};

    use super::*;

    #[tokio::test]
    async fn survives_reopening() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("storage.json");

        let mut storage = File::new_at(&path);
        assert_eq!(storage.get(Key::Token).await?, None);
        storage.set(Key::Token, "T").await?;
        storage.set(Key::User, "U").await?;

        let mut reopened = File::new_at(&path);
        assert_eq!(reopened.get(Key::Token).await?.as_deref(), Some("T"));
        assert_eq!(reopened.get(Key::User).await?.as_deref(), Some("U"));
        Ok(())
    }

    #[tokio::test]
    async fn removing_every_key_deletes_the_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");

        let mut storage = File::new_at(&path);
        storage.set(Key::User, "U").await?;
        assert!(path.exists());

        storage.remove(Key::User).await?;
        storage.remove(Key::Token).await?;
        assert!(!path.exists());
        assert_eq!(storage.get(Key::User).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_garbage() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2]")?;

        let mut storage = File::new_at(&path);
        assert!(matches!(storage.get(Key::Token).await, Err(Error::Json(_))));

        storage.clear().await?;
        assert!(!path.exists());
        assert_eq!(storage.get(Key::Token).await?, None);
        storage.clear().await?;
        Ok(())
    }
}
