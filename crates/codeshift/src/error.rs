#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Walk failed: {0}")]
    Walk(String),

    #[error("Model request failed: {0}")]
    Model(String),
}
