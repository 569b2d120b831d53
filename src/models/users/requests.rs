use serde::Deserialize;

// 用户创建参数（用于存储层，密码已哈希）
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub password_hash: String,
}

// 个人资料更新请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub password: Option<String>,
}

// 用户更新参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub password_hash: Option<String>,
}
