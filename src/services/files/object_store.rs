use sha2::{Digest, Sha256};

use crate::config::ObjectStorageConfig;
use crate::errors::{ClassroomError, Result};

/// 预签名上传地址
#[derive(Debug, Clone)]
pub struct PresignedUrl {
    pub url: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

/// 对象存储只需要两项能力：为键签发上传地址、给出键的公开地址
pub trait ObjectStore: Send + Sync {
    fn presign_put(&self, key: &str, content_type: &str) -> Result<PresignedUrl>;
    fn public_url(&self, key: &str) -> String;
}

/// 以共享密钥签名 URL 的对象存储
///
/// 签名为 `sha256(secret \n PUT \n bucket \n key \n content_type \n expires)` 的十六进制，
/// 由存储网关使用同一密钥校验。
pub struct SignedUrlObjectStore {
    endpoint: String,
    bucket: String,
    public_base_url: String,
    signing_secret: String,
    url_expiry: i64,
}

impl SignedUrlObjectStore {
    pub fn new(config: &ObjectStorageConfig) -> Result<Self> {
        if config.signing_secret.is_empty() {
            return Err(ClassroomError::validation(
                "object_storage.signing_secret must be set",
            ));
        }
        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
            signing_secret: config.signing_secret.clone(),
            url_expiry: config.url_expiry,
        })
    }

    fn signature(&self, key: &str, content_type: &str, expires: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.signing_secret.as_bytes());
        for part in ["PUT", self.bucket.as_str(), key, content_type] {
            hasher.update(b"\n");
            hasher.update(part.as_bytes());
        }
        hasher.update(b"\n");
        hasher.update(expires.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl ObjectStore for SignedUrlObjectStore {
    fn presign_put(&self, key: &str, content_type: &str) -> Result<PresignedUrl> {
        let expires_at = chrono::Utc::now() + chrono::Duration::seconds(self.url_expiry);
        let expires = expires_at.timestamp();
        let signature = self.signature(key, content_type, expires);

        Ok(PresignedUrl {
            url: format!(
                "{}/{}/{}?expires={}&signature={}",
                self.endpoint, self.bucket, key, expires, signature
            ),
            expires_at,
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SignedUrlObjectStore {
        SignedUrlObjectStore::new(&ObjectStorageConfig {
            endpoint: "https://storage.example.com/".to_string(),
            bucket: "classroom".to_string(),
            public_base_url: "https://cdn.example.com".to_string(),
            signing_secret: "secret".to_string(),
            url_expiry: 600,
            max_size: 1024,
        })
        .unwrap()
    }

    #[test]
    fn test_presign_put_embeds_expiry_and_signature() {
        let store = store();
        let presigned = store
            .presign_put("classrooms/1/abc/a.pdf", "application/pdf")
            .unwrap();

        assert!(
            presigned
                .url
                .starts_with("https://storage.example.com/classroom/classrooms/1/abc/a.pdf?expires=")
        );
        let expected = store.signature(
            "classrooms/1/abc/a.pdf",
            "application/pdf",
            presigned.expires_at.timestamp(),
        );
        assert!(presigned.url.ends_with(&format!("&signature={expected}")));
        assert_eq!(expected.len(), 64);
    }

    #[test]
    fn test_signature_depends_on_content_type() {
        let store = store();
        assert_ne!(
            store.signature("k", "image/png", 1),
            store.signature("k", "image/jpeg", 1)
        );
    }

    #[test]
    fn test_public_url() {
        assert_eq!(
            store().public_url("classrooms/1/abc/a.pdf"),
            "https://cdn.example.com/classrooms/1/abc/a.pdf"
        );
    }

    #[test]
    fn test_requires_secret() {
        let config = ObjectStorageConfig {
            endpoint: String::new(),
            bucket: String::new(),
            public_base_url: String::new(),
            signing_secret: String::new(),
            url_expiry: 600,
            max_size: 1024,
        };
        assert!(SignedUrlObjectStore::new(&config).is_err());
    }
}
