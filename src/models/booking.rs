use serde::{Deserialize, Serialize};

use crate::models::company::CompanyService;

/// Reserva de un cliente
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    #[serde(rename = "BookingID")]
    pub booking_id: i64,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "UserID", default)]
    pub user_id: Option<i64>,
}

impl Booking {
    pub fn tone(&self) -> StatusTone {
        StatusTone::classify(&self.status)
    }

    /// Texto sobre el que filtra el buscador de "mis reservas"
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.booking_id,
            self.status,
            self.description.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}

/// Servicio añadido a una reserva
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingService {
    #[serde(rename = "BookingServiceID")]
    pub booking_service_id: i64,
    #[serde(rename = "BookingID")]
    pub booking_id: i64,
    #[serde(rename = "CompanyServiceID")]
    pub company_service_id: i64,
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<i32>,
    #[serde(rename = "CompanyService", default)]
    pub company_service: Option<CompanyService>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BookingCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingServiceCreate {
    pub booking_id: i64,
    pub company_service_id: i64,
    pub notes: Option<String>,
}

/// Color semántico del estado de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Requested,
    Approved,
    Cancelled,
    Neutral,
}

impl StatusTone {
    /// Clasifica por subcadena, en inglés o en ruso ("нов", "подт", "отмен")
    pub fn classify(status: &str) -> Self {
        let s = status.to_lowercase();
        if s.contains("requested") || s.contains("нов") {
            StatusTone::Requested
        } else if s.contains("approved") || s.contains("подт") {
            StatusTone::Approved
        } else if s.contains("cancel") || s.contains("отмен") {
            StatusTone::Cancelled
        } else {
            StatusTone::Neutral
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Requested => "status-badge status-requested",
            StatusTone::Approved => "status-badge status-approved",
            StatusTone::Cancelled => "status-badge status-cancelled",
            StatusTone::Neutral => "status-badge",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_uses_server_field_names() {
        let booking: Booking = serde_json::from_str(r#"{"BookingID":7,"Status":"requested"}"#).unwrap();
        assert_eq!(booking.booking_id, 7);
        assert_eq!(booking.description, None);
        assert_eq!(booking.tone(), StatusTone::Requested);
    }

    #[test]
    fn status_tone_understands_russian_statuses() {
        assert_eq!(StatusTone::classify("Подтверждено"), StatusTone::Approved);
        assert_eq!(StatusTone::classify("CANCELLED"), StatusTone::Cancelled);
        assert_eq!(StatusTone::classify("Отменено"), StatusTone::Cancelled);
        assert_eq!(StatusTone::classify("in_progress"), StatusTone::Neutral);
    }

    #[test]
    fn create_request_omits_missing_fields() {
        let request = BookingCreateRequest {
            status: Some("requested".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"status":"requested"}"#);
    }
}
