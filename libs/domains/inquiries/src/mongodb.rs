use async_trait::async_trait;
use database::mongodb::insert_document;
use mongodb::Database;
use tracing::instrument;

use crate::error::{InquiryError, InquiryResult};
use crate::models::{INQUIRY_COLLECTION, Inquiry};
use crate::repository::InquiryRepository;

/// MongoDB-backed inquiry store.
///
/// Holds no database handle when storage was never enabled or failed to
/// initialize; every insert then fails with [`InquiryError::StorageUnavailable`].
#[derive(Clone)]
pub struct MongoInquiryRepository {
    db: Option<Database>,
    collection: String,
}

impl MongoInquiryRepository {
    pub fn new(db: Option<Database>) -> Self {
        Self {
            db,
            collection: INQUIRY_COLLECTION.to_string(),
        }
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.db.is_some()
    }
}

#[async_trait]
impl InquiryRepository for MongoInquiryRepository {
    #[instrument(skip(self, inquiry), fields(collection = %self.collection))]
    async fn insert(&self, inquiry: Inquiry) -> InquiryResult<String> {
        let db = self.db.as_ref().ok_or_else(|| {
            InquiryError::StorageUnavailable("Database not initialized".to_string())
        })?;

        let id = insert_document(db, &self.collection, &inquiry).await?;
        tracing::info!(inquiry_id = %id, "Inquiry stored");
        Ok(id)
    }
}
