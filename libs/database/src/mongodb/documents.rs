//! Generic document helpers shared by the MongoDB-backed domains

use mongodb::{
    Database,
    bson::{Bson, DateTime, Document, to_document},
};
use serde::Serialize;
use tracing::instrument;

use super::connector::MongoError;

/// Serialize `value`, stamp `created_at`/`updated_at`, and insert it into `collection`.
///
/// Returns the identifier MongoDB assigned to the new document (hex for ObjectIds).
#[instrument(skip(db, value), fields(database = %db.name()))]
pub async fn insert_document<T>(
    db: &Database,
    collection: &str,
    value: &T,
) -> Result<String, MongoError>
where
    T: Serialize + ?Sized,
{
    let document = stamp_timestamps(to_document(value)?, DateTime::now());

    let result = db
        .collection::<Document>(collection)
        .insert_one(document)
        .await?;

    let id = id_to_string(result.inserted_id)?;
    tracing::debug!(document_id = %id, "Document inserted");
    Ok(id)
}

/// List collection names in `db`, keeping at most `limit` of them.
#[instrument(skip(db), fields(database = %db.name()))]
pub async fn list_collection_names(db: &Database, limit: usize) -> Result<Vec<String>, MongoError> {
    let mut names = db.list_collection_names().await?;
    names.truncate(limit);
    Ok(names)
}

fn stamp_timestamps(mut document: Document, now: DateTime) -> Document {
    document.insert("created_at", now);
    document.insert("updated_at", now);
    document
}

fn id_to_string(id: Bson) -> Result<String, MongoError> {
    match id {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        Bson::String(s) => Ok(s),
        other => Err(MongoError::UnexpectedId(other.to_string())),
    }
}
