use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub content: Option<String>,
}
