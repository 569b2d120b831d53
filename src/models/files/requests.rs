use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UploadUrlRequest {
    pub file_name: String,
    pub content_type: String,
    pub size: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterFileRequest {
    pub object_key: String,
    pub name: String,
    pub size: i64,
    pub content_type: String,
    pub post_id: Option<i64>,
    pub submission_id: Option<i64>,
}

// 文件元数据写入参数（用于存储层）
#[derive(Debug, Clone)]
pub struct CreateFileRequest {
    pub object_key: String,
    pub name: String,
    pub size: i64,
    pub content_type: String,
    pub url: String,
    pub uploader_id: i64,
    pub classroom_id: i64,
    pub post_id: Option<i64>,
    pub submission_id: Option<i64>,
}
