use crate::model::{Book, STATUS_IN_LIBRARY};
use crate::store::traits::{DatasetStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("instance {0} not found")]
    InstanceNotFound(i64),
    #[error("author {0} not found")]
    AuthorNotFound(i64),
    #[error("reader {0} not found")]
    ReaderNotFound(i64),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl InventoryError {
    /// Whether the failure is a missing entity rather than a storage fault.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

/// True iff the instance is sitting in the library, i.e. can be taken out.
pub async fn check_availability<S: DatasetStore + ?Sized>(
    store: &S,
    instance_id: i64,
) -> Result<bool, InventoryError> {
    let instances = store.load_instances().await?;
    let instance = instances
        .iter()
        .find(|i| i.instance_id == instance_id)
        .ok_or(InventoryError::InstanceNotFound(instance_id))?;

    Ok(instance.status == STATUS_IN_LIBRARY)
}

/// Number of book rows written by the given author. Book rows name their
/// author rather than referencing the authors table by id, so the join is on
/// the author's name.
pub async fn count_published_books<S: DatasetStore + ?Sized>(
    store: &S,
    author_id: i64,
) -> Result<usize, InventoryError> {
    let authors = store.load_authors().await?;
    let author = authors
        .iter()
        .find(|a| a.author_id == author_id)
        .ok_or(InventoryError::AuthorNotFound(author_id))?;

    let books = store.load_books().await?;
    Ok(books.iter().filter(|b| b.author == author.name).count())
}

/// The book records currently held by a reader, resolved through the
/// instances the reader has out. An instance pointing at a missing book row
/// is skipped. A reader with nothing borrowed gets an empty list.
pub async fn borrowed_books<S: DatasetStore + ?Sized>(
    store: &S,
    reader_id: i64,
) -> Result<Vec<Book>, InventoryError> {
    let readers = store.load_readers().await?;
    let reader = readers
        .iter()
        .find(|r| r.reader_id == reader_id)
        .ok_or(InventoryError::ReaderNotFound(reader_id))?;

    let instances = store.load_instances().await?;
    let books = store.load_books().await?;

    let mut borrowed = Vec::new();
    for held in &reader.instance_ids {
        let Some(instance) = instances.iter().find(|i| i.instance_id == *held) else {
            log::warn!("reader {reader_id} holds unknown instance {held}");
            continue;
        };
        let book = usize::try_from(instance.book_id)
            .ok()
            .and_then(|index| books.get(index));
        match book {
            Some(book) => borrowed.push(book.clone()),
            None => log::warn!(
                "instance {} points at missing book row {}",
                instance.instance_id,
                instance.book_id
            ),
        }
    }

    Ok(borrowed)
}
