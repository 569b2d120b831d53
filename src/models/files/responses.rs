use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadUrlResponse {
    pub object_key: String,
    pub upload_url: String,
    pub public_url: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
