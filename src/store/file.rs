use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::model::{
    Admin, Author, Book, Format, Genre, Instance, Language, Production, Reader, User,
};
use crate::store::traits::{DatasetStore, StoreError};

/// Store backed by one JSON file per dataset under a data directory.
///
/// Each `<dataset>.json` file holds a JSON array of records with the column
/// names used in the dump. Row order in the file is preserved, which is what
/// gives books their positional keys.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    async fn load<T: DeserializeOwned>(
        &self,
        dataset: &'static str,
    ) -> Result<Vec<T>, StoreError> {
        let path = self.data_dir.join(format!("{dataset}.json"));
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            log::error!("failed to read {}: {}", path.display(), e);
            StoreError::unavailable(dataset, e)
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            log::error!("failed to parse {}: {}", path.display(), e);
            StoreError::unavailable(dataset, e)
        })
    }
}

#[async_trait::async_trait]
impl DatasetStore for FileStore {
    async fn load_books(&self) -> Result<Vec<Book>, StoreError> {
        self.load("books").await
    }

    async fn load_instances(&self) -> Result<Vec<Instance>, StoreError> {
        self.load("instances").await
    }

    async fn load_admins(&self) -> Result<Vec<Admin>, StoreError> {
        self.load("admins").await
    }

    async fn load_users(&self) -> Result<Vec<User>, StoreError> {
        self.load("users").await
    }

    async fn load_readers(&self) -> Result<Vec<Reader>, StoreError> {
        self.load("readers").await
    }

    async fn load_languages(&self) -> Result<Vec<Language>, StoreError> {
        self.load("language").await
    }

    async fn load_genres(&self) -> Result<Vec<Genre>, StoreError> {
        self.load("genre").await
    }

    async fn load_formats(&self) -> Result<Vec<Format>, StoreError> {
        self.load("format").await
    }

    async fn load_authors(&self) -> Result<Vec<Author>, StoreError> {
        self.load("authors").await
    }

    async fn load_productions(&self) -> Result<Vec<Production>, StoreError> {
        self.load("productions").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_dataset(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(format!("{name}.json")), body).unwrap();
    }

    #[tokio::test]
    async fn loads_books_preserving_row_order() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            "books",
            r#"[
                {"title": "Book 1", "author": "Author 1", "year": 2022},
                {"title": "Book 2", "author": "Author 2", "year": 2021}
            ]"#,
        );

        let store = FileStore::new(dir.path());
        let books = store.load_books().await.unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Book 1");
        assert_eq!(books[1].year, 2021);
    }

    #[tokio::test]
    async fn missing_file_reports_dataset_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let err = store.load_users().await.unwrap_err();
        assert_eq!(err.dataset(), "users");
    }

    #[tokio::test]
    async fn corrupt_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), "genre", "{not json");

        let store = FileStore::new(dir.path());
        let err = store.load_genres().await.unwrap_err();
        assert_eq!(err.dataset(), "genre");
    }

    #[tokio::test]
    async fn authors_tolerate_extra_and_missing_columns() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            "authors",
            r#"[{"authorId": 5, "name": "X", "productionID": 12, "bio": "ignored"}]"#,
        );

        let store = FileStore::new(dir.path());
        let authors = store.load_authors().await.unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].author_id, 5);
        assert_eq!(authors[0].surname, "");
    }

    #[tokio::test]
    async fn every_call_rereads_the_file() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), "admins", r#"[{"adminID": 1}]"#);

        let store = FileStore::new(dir.path());
        assert_eq!(store.load_admins().await.unwrap().len(), 1);

        write_dataset(dir.path(), "admins", r#"[{"adminID": 1}, {"adminID": 2}]"#);
        assert_eq!(store.load_admins().await.unwrap().len(), 2);
    }
}
