use crate::model::{
    Admin, Author, Book, Format, Genre, Instance, Language, Production, Reader, User,
};

/// Failure to produce a dataset's table. Fatal for the current request;
/// there is no partial-result mode and no retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("dataset '{dataset}' unavailable: {source}")]
    DatasetUnavailable {
        dataset: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl StoreError {
    pub fn unavailable(
        dataset: &'static str,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::DatasetUnavailable {
            dataset,
            source: source.into(),
        }
    }

    /// The dataset the failure belongs to.
    pub fn dataset(&self) -> &'static str {
        match self {
            Self::DatasetUnavailable { dataset, .. } => dataset,
        }
    }
}

/// Read access to the ten dataset tables, one method per dataset.
///
/// Every call re-reads the table from its backing storage; implementations
/// must not cache across calls, so each request observes a fresh snapshot.
#[async_trait::async_trait]
pub trait DatasetStore: Send + Sync {
    async fn load_books(&self) -> Result<Vec<Book>, StoreError>;
    async fn load_instances(&self) -> Result<Vec<Instance>, StoreError>;
    async fn load_admins(&self) -> Result<Vec<Admin>, StoreError>;
    async fn load_users(&self) -> Result<Vec<User>, StoreError>;
    async fn load_readers(&self) -> Result<Vec<Reader>, StoreError>;
    async fn load_languages(&self) -> Result<Vec<Language>, StoreError>;
    async fn load_genres(&self) -> Result<Vec<Genre>, StoreError>;
    async fn load_formats(&self) -> Result<Vec<Format>, StoreError>;
    async fn load_authors(&self) -> Result<Vec<Author>, StoreError>;
    async fn load_productions(&self) -> Result<Vec<Production>, StoreError>;
}
