use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSectionRequest {
    pub name: String,
    pub position: Option<i32>,
}
