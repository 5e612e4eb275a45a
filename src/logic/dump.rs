use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::{Author, AuthorEntry};
use crate::store::traits::{DatasetStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("dump serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// A record serialized without its identifier column. Indicates a defect
    /// in the record definitions, not bad data.
    #[error("identifier column '{0}' missing from record")]
    MissingIdentifier(&'static str),
}

/// Assembles the full dump document: one entry per dataset name, each table
/// remapped per its keying rule. Every dataset is loaded fresh from the
/// store; nothing is cached between calls.
pub async fn assemble_dump<S: DatasetStore + ?Sized>(store: &S) -> Result<Value, DumpError> {
    let mut dump = Map::new();

    dump.insert(
        "books".to_string(),
        key_by_row_index(&store.load_books().await?)?,
    );
    dump.insert(
        "instances".to_string(),
        key_by_id(&store.load_instances().await?, "instanceID")?,
    );
    dump.insert(
        "admins".to_string(),
        key_by_id(&store.load_admins().await?, "adminID")?,
    );
    dump.insert(
        "users".to_string(),
        key_by_id(&store.load_users().await?, "userID")?,
    );
    dump.insert(
        "readers".to_string(),
        key_by_id(&store.load_readers().await?, "readerID")?,
    );
    dump.insert(
        "language".to_string(),
        key_by_id(&store.load_languages().await?, "languageID")?,
    );
    dump.insert(
        "genre".to_string(),
        key_by_id(&store.load_genres().await?, "genreID")?,
    );
    dump.insert(
        "format".to_string(),
        key_by_id(&store.load_formats().await?, "formatID")?,
    );
    dump.insert(
        "authors".to_string(),
        authors_by_id(&store.load_authors().await?)?,
    );
    dump.insert(
        "productions".to_string(),
        key_by_id(&store.load_productions().await?, "productionID")?,
    );

    Ok(Value::Object(dump))
}

/// Assembles the dump and serializes it to the response body. Identical
/// storage yields byte-identical bodies: serde_json maps are ordered, so the
/// output carries no nondeterministic key order.
pub async fn render_dump<S: DatasetStore + ?Sized>(store: &S) -> Result<Vec<u8>, DumpError> {
    let dump = assemble_dump(store).await?;
    Ok(serde_json::to_vec(&dump)?)
}

/// Maps a table by its identifier column: key = stringified identifier,
/// value = the record's remaining columns. A duplicate identifier keeps the
/// later row; the collision is logged since it breaks the uniqueness
/// invariant the datasets are supposed to hold.
fn key_by_id<T: Serialize>(rows: &[T], id_column: &'static str) -> Result<Value, DumpError> {
    let mut table = Map::new();

    for row in rows {
        let mut fields = match serde_json::to_value(row)? {
            Value::Object(fields) => fields,
            _ => return Err(DumpError::MissingIdentifier(id_column)),
        };
        let id = fields
            .remove(id_column)
            .ok_or(DumpError::MissingIdentifier(id_column))?;
        let key = key_string(&id);

        if table.insert(key.clone(), Value::Object(fields)).is_some() {
            log::warn!("duplicate {id_column} '{key}', keeping the later row");
        }
    }

    Ok(Value::Object(table))
}

/// Maps a table without an identifier column by stringified row position,
/// keeping every column.
fn key_by_row_index<T: Serialize>(rows: &[T]) -> Result<Value, DumpError> {
    let mut table = Map::new();

    for (index, row) in rows.iter().enumerate() {
        table.insert(index.to_string(), serde_json::to_value(row)?);
    }

    Ok(Value::Object(table))
}

/// Authors get a narrower projection than the generic rule: only `name` and
/// `productionID` survive, whatever else storage carries.
fn authors_by_id(authors: &[Author]) -> Result<Value, DumpError> {
    let mut table = Map::new();

    for author in authors {
        let key = author.author_id.to_string();
        let entry = serde_json::to_value(AuthorEntry::from(author))?;

        if table.insert(key.clone(), entry).is_some() {
            log::warn!("duplicate authorId '{key}', keeping the later row");
        }
    }

    Ok(Value::Object(table))
}

fn key_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
