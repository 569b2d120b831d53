use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GradeRequest {
    pub score: f64,
    pub feedback: Option<String>,
}
