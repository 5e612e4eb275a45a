use serde::{Deserialize, Serialize};

/// The ten dataset names, in the order they are assembled into the dump.
pub const DATASET_NAMES: [&str; 10] = [
    "books",
    "instances",
    "admins",
    "users",
    "readers",
    "language",
    "genre",
    "format",
    "authors",
    "productions",
];

// Instance status values as persisted in storage.
pub const STATUS_IN_USE: i64 = 0;
pub const STATUS_IN_LIBRARY: i64 = 1;
pub const STATUS_OUT_OF_USE: i64 = 2;

/// A book row. Books carry no explicit identifier column; they are keyed by
/// their position in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i64,
}

/// A physical copy of a book. `book_id` is the row index of the book it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    #[serde(rename = "instanceID")]
    pub instance_id: i64,
    #[serde(rename = "bookID")]
    pub book_id: i64,
    pub status: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(rename = "adminID")]
    pub admin_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub name: String,
    pub password: String,
    #[serde(rename = "loginStatus")]
    pub login_status: String,
    #[serde(rename = "registerDate")]
    pub register_date: String,
}

/// A library reader together with the instances they currently hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reader {
    #[serde(rename = "readerID")]
    pub reader_id: i64,
    #[serde(rename = "instanceID", default)]
    pub instance_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(rename = "languageID")]
    pub language_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "genreID")]
    pub genre_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Format {
    #[serde(rename = "formatID")]
    pub format_id: i64,
    pub name: String,
}

/// An author row as stored on disk. Storage may carry more columns than the
/// dump exposes; unknown columns are ignored on load, and the dump keeps
/// only `name` and `productionID` (see [`AuthorEntry`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "authorId")]
    pub author_id: i64,
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub patronymic: String,
    #[serde(rename = "productionID")]
    pub production_id: i64,
}

/// The narrowed author projection exposed in the dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorEntry {
    pub name: String,
    #[serde(rename = "productionID")]
    pub production_id: i64,
}

impl From<&Author> for AuthorEntry {
    fn from(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
            production_id: author.production_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Production {
    #[serde(rename = "productionID")]
    pub production_id: i64,
    pub name: String,
}
