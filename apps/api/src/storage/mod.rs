//! Object storage for uploaded résumé files.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; production uses S3 (or any
//! S3-compatible endpoint such as MinIO), tests swap in an in-memory store.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use thiserror::Error;
use tracing::info;

use crate::extract::{file_stem, ResumeFormat};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    Upload(String),
}

/// An uploaded résumé ready to be stored.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub format: ResumeFormat,
    pub bytes: Bytes,
}

/// Where a stored résumé ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub url: String,
    pub public_id: String,
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn put(&self, upload: ResumeUpload) -> Result<StoredObject, StorageError>;
}

/// `resumes/{unix_millis}_{stem}`: the object key without its extension.
pub fn public_id_for(file_name: &str, unix_millis: i64) -> String {
    format!("resumes/{unix_millis}_{}", file_stem(file_name))
}

pub struct S3ResumeStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3ResumeStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, public_base_url: String) -> Self {
        Self {
            client,
            bucket,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket, key)
    }
}

#[async_trait]
impl ResumeStore for S3ResumeStore {
    async fn put(&self, upload: ResumeUpload) -> Result<StoredObject, StorageError> {
        let public_id = public_id_for(&upload.file_name, chrono::Utc::now().timestamp_millis());
        let key = format!("{public_id}.{}", upload.format.extension());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(upload.bytes))
            .content_type(upload.format.content_type())
            .send()
            .await
            .map_err(|e| StorageError::Upload(format!("S3 upload failed: {e}")))?;

        info!("Uploaded resume to s3://{}/{}", self.bucket, key);

        Ok(StoredObject {
            url: self.object_url(&key),
            public_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_id_uses_timestamp_and_stem() {
        assert_eq!(
            public_id_for("Jane Doe CV.pdf", 1_700_000_000_000),
            "resumes/1700000000000_Jane Doe CV"
        );
    }

    #[test]
    fn test_public_id_drops_client_directories() {
        assert_eq!(public_id_for("../../etc/cv.docx", 5), "resumes/5_cv");
    }
}
