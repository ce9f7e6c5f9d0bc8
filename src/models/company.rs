use serde::{Deserialize, Serialize};

use crate::models::service::Service;

/// Compañía de servicios (propiedad de un usuario)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    #[serde(rename = "CompanyID")]
    pub company_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "UserID", default)]
    pub user_id: Option<i64>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
}

/// Vínculo compañía <-> servicio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyService {
    #[serde(rename = "CompanyServiceID")]
    pub company_service_id: i64,
    #[serde(rename = "CompanyID")]
    pub company_id: i64,
    #[serde(rename = "ServiceID")]
    pub service_id: i64,
    #[serde(rename = "Price", default)]
    pub price: Option<f64>,
    #[serde(rename = "Company", default)]
    pub company: Option<Company>,
    #[serde(rename = "Service", default)]
    pub service: Option<Service>,
}

impl CompanyService {
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().map(|c| c.name.as_str()).filter(|n| !n.is_empty())
    }

    pub fn service_title(&self) -> Option<&str> {
        self.service.as_ref().map(|s| s.title.as_str()).filter(|t| !t.is_empty())
    }
}

/// Resultado de /business/companies-by-service/{title}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyOffer {
    #[serde(rename = "CompanyID")]
    pub company_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CompanyServiceID")]
    pub company_service_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyPayload {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyServiceCreate {
    pub company_id: i64,
    pub service_id: i64,
}
