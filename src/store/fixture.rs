use crate::model::{
    Admin, Author, Book, Format, Genre, Instance, Language, Production, Reader, User,
    STATUS_IN_LIBRARY, STATUS_IN_USE,
};
use crate::store::traits::{DatasetStore, StoreError};

/// In-memory demonstration store.
///
/// Serves a small, internally consistent snapshot without touching disk.
/// Useful for trying the server out and for tests; selected with
/// `storage.mode = "fixture"`.
#[derive(Debug, Clone, Default)]
pub struct FixtureStore;

impl FixtureStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl DatasetStore for FixtureStore {
    async fn load_books(&self) -> Result<Vec<Book>, StoreError> {
        Ok(vec![
            Book {
                title: "Book 1".to_string(),
                author: "Author 1".to_string(),
                year: 2022,
            },
            Book {
                title: "Book 2".to_string(),
                author: "Author 2".to_string(),
                year: 2021,
            },
            Book {
                title: "Book 3".to_string(),
                author: "Author 3".to_string(),
                year: 2020,
            },
        ])
    }

    async fn load_instances(&self) -> Result<Vec<Instance>, StoreError> {
        Ok(vec![
            Instance {
                instance_id: 1,
                book_id: 0,
                status: STATUS_IN_LIBRARY,
            },
            Instance {
                instance_id: 2,
                book_id: 1,
                status: STATUS_IN_USE,
            },
            Instance {
                instance_id: 3,
                book_id: 2,
                status: STATUS_IN_LIBRARY,
            },
        ])
    }

    async fn load_admins(&self) -> Result<Vec<Admin>, StoreError> {
        Ok(vec![Admin { admin_id: 1 }])
    }

    async fn load_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(vec![
            User {
                user_id: 1,
                name: "Alice".to_string(),
                password: "fixture-password".to_string(),
                login_status: "offline".to_string(),
                register_date: "2023-01-15".to_string(),
            },
            User {
                user_id: 2,
                name: "Bob".to_string(),
                password: "fixture-password".to_string(),
                login_status: "online".to_string(),
                register_date: "2023-03-02".to_string(),
            },
        ])
    }

    async fn load_readers(&self) -> Result<Vec<Reader>, StoreError> {
        Ok(vec![
            Reader {
                reader_id: 1,
                instance_ids: vec![2],
            },
            Reader {
                reader_id: 2,
                instance_ids: vec![],
            },
        ])
    }

    async fn load_languages(&self) -> Result<Vec<Language>, StoreError> {
        Ok(vec![
            Language {
                language_id: 1,
                name: "English".to_string(),
            },
            Language {
                language_id: 2,
                name: "French".to_string(),
            },
        ])
    }

    async fn load_genres(&self) -> Result<Vec<Genre>, StoreError> {
        Ok(vec![
            Genre {
                genre_id: 1,
                name: "Fantasy".to_string(),
            },
            Genre {
                genre_id: 2,
                name: "History".to_string(),
            },
        ])
    }

    async fn load_formats(&self) -> Result<Vec<Format>, StoreError> {
        Ok(vec![
            Format {
                format_id: 1,
                name: "Hardcover".to_string(),
            },
            Format {
                format_id: 2,
                name: "Paperback".to_string(),
            },
        ])
    }

    async fn load_authors(&self) -> Result<Vec<Author>, StoreError> {
        Ok(vec![
            Author {
                author_id: 1,
                name: "Author 1".to_string(),
                surname: "First".to_string(),
                patronymic: String::new(),
                production_id: 1,
            },
            Author {
                author_id: 2,
                name: "Author 2".to_string(),
                surname: "Second".to_string(),
                patronymic: String::new(),
                production_id: 1,
            },
            Author {
                author_id: 3,
                name: "Author 3".to_string(),
                surname: "Third".to_string(),
                patronymic: String::new(),
                production_id: 2,
            },
        ])
    }

    async fn load_productions(&self) -> Result<Vec<Production>, StoreError> {
        Ok(vec![
            Production {
                production_id: 1,
                name: "Production 1".to_string(),
            },
            Production {
                production_id: 2,
                name: "Production 2".to_string(),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_is_internally_consistent() {
        let store = FixtureStore::new();

        let books = store.load_books().await.unwrap();
        let instances = store.load_instances().await.unwrap();
        let readers = store.load_readers().await.unwrap();
        let authors = store.load_authors().await.unwrap();
        let productions = store.load_productions().await.unwrap();

        // Instances point at existing book rows.
        for instance in &instances {
            let index = usize::try_from(instance.book_id).unwrap();
            assert!(index < books.len(), "instance {} points past books", instance.instance_id);
        }

        // Readers hold existing instances.
        for reader in &readers {
            for held in &reader.instance_ids {
                assert!(instances.iter().any(|i| i.instance_id == *held));
            }
        }

        // Authors belong to existing productions and match book author names.
        for author in &authors {
            assert!(productions.iter().any(|p| p.production_id == author.production_id));
            assert!(books.iter().any(|b| b.author == author.name));
        }
    }
}
