use serde::Serialize;

use super::entities::Post;
use crate::models::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Post>,
}
