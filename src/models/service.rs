use serde::{Deserialize, Serialize};

/// Servicio del catálogo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    #[serde(rename = "ServiceID")]
    pub service_id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Price", default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicePayload {
    pub title: String,
}
