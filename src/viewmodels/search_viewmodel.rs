// ============================================================================
// SEARCH VIEWMODEL - Buscar un servicio y reservarlo en una compañía
// ============================================================================

use crate::models::booking::BookingServiceCreate;
use crate::models::{Booking, BookingCreateRequest, CompanyOffer, Service};
use crate::services::ApiClient;
use crate::state::async_result::AsyncResult;
use crate::utils::constants::BOOKING_REQUESTED_STATUS;
use crate::viewmodels::{required, ActionError};

/// Sugerencias: títulos que contienen la consulta, sin distinguir mayúsculas
pub fn filter_suggestions(catalog: &[Service], query: &str) -> Vec<Service> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|s| s.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Aviso tras buscar o reservar
#[derive(Debug, Clone, PartialEq)]
pub enum SearchNotice {
    NotFound,
    Booked { booking_id: i64, company: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchScreen {
    pub query: String,
    pub catalog: AsyncResult<Vec<Service>>,
    pub suggestions: Vec<Service>,
    pub show_suggestions: bool,
    /// Consulta con la que se obtuvieron `results`
    pub searched: String,
    pub results: Vec<CompanyOffer>,
    pub searching: bool,
    /// company_service_id en proceso de reserva
    pub booking: Option<i64>,
    pub notice: Option<SearchNotice>,
    pub error: Option<String>,
}

impl SearchScreen {
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.suggestions = self
            .catalog
            .data()
            .map(|catalog| filter_suggestions(catalog, query))
            .unwrap_or_default();
        self.show_suggestions = !self.suggestions.is_empty();
    }

    pub fn select_suggestion(&mut self, title: &str) {
        self.query = title.to_string();
        self.show_suggestions = false;
    }

    pub fn hide_suggestions(&mut self) {
        self.show_suggestions = false;
    }

    /// Marcar la búsqueda en curso. Con la consulta vacía no hay búsqueda
    /// ni mensaje: devuelve false y el estado no cambia.
    pub fn start_search(&mut self) -> bool {
        if self.searching || self.query.trim().is_empty() {
            return false;
        }
        self.searching = true;
        self.show_suggestions = false;
        self.error = None;
        self.notice = None;
        true
    }

    pub fn apply_results(&mut self, query: &str, results: Result<Vec<CompanyOffer>, ActionError>) {
        self.searching = false;
        match results {
            Ok(results) => {
                if results.is_empty() {
                    self.notice = Some(SearchNotice::NotFound);
                }
                self.searched = query.trim().to_string();
                self.results = results;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e.user_message("search_failed"));
            }
        }
    }
}

#[derive(Clone)]
pub struct SearchViewModel {
    api: ApiClient,
}

impl SearchViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load_catalog(&self) -> Result<Vec<Service>, ActionError> {
        Ok(self.api.services().await?)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<CompanyOffer>, ActionError> {
        let title = required(query, "enter_service_name")?;
        let offers = self.api.companies_by_service(&title).await?;
        log::info!("🔎 [SEARCH] '{}': {} compañías", title, offers.len());
        Ok(offers)
    }

    /// Crear la reserva y añadirle el servicio de la compañía elegida
    pub async fn book(&self, service_title: &str, offer: &CompanyOffer) -> Result<Booking, ActionError> {
        let request = BookingCreateRequest {
            user_id: None,
            description: Some(booking_description(service_title, &offer.name)),
            status: Some(BOOKING_REQUESTED_STATUS.to_string()),
        };
        let booking = self.api.create_booking(&request).await?;
        self.api
            .add_booking_service(&BookingServiceCreate {
                booking_id: booking.booking_id,
                company_service_id: offer.company_service_id,
                notes: None,
            })
            .await?;
        log::info!(
            "📅 [SEARCH] Reserva #{} creada en {}",
            booking.booking_id,
            offer.name
        );
        Ok(booking)
    }
}

fn booking_description(service_title: &str, company: &str) -> String {
    format!(
        "Бронирование услуги \"{}\" в компании \"{}\"",
        service_title.trim(),
        company
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ok_json, TestHarness};
    use futures::executor::block_on;

    fn catalog() -> Vec<Service> {
        serde_json::from_str(
            r#"[{"ServiceID":1,"Title":"Drilling"},{"ServiceID":2,"Title":"Inspection"}]"#,
        )
        .unwrap()
    }

    #[test]
    fn suggestions_match_substring_ignoring_case() {
        let titles: Vec<String> = filter_suggestions(&catalog(), "dri")
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["Drilling".to_string()]);
        assert!(filter_suggestions(&catalog(), "   ").is_empty());
        assert_eq!(filter_suggestions(&catalog(), "I").len(), 2);
    }

    #[test]
    fn selecting_a_suggestion_fills_query_and_hides_list() {
        let mut screen = SearchScreen {
            catalog: AsyncResult::Success(catalog()),
            ..SearchScreen::default()
        };
        screen.set_query("dri");
        assert!(screen.show_suggestions);
        assert_eq!(screen.suggestions.len(), 1);

        screen.select_suggestion("Drilling");
        assert_eq!(screen.query, "Drilling");
        assert!(!screen.show_suggestions);
    }

    #[test]
    fn no_match_hides_suggestions() {
        let mut screen = SearchScreen {
            catalog: AsyncResult::Success(catalog()),
            ..SearchScreen::default()
        };
        screen.set_query("xyz");
        assert!(!screen.show_suggestions);
    }

    #[test]
    fn empty_results_raise_not_found_notice() {
        let mut screen = SearchScreen {
            query: "Drilling".to_string(),
            ..SearchScreen::default()
        };
        assert!(screen.start_search());
        screen.apply_results("Drilling", Ok(Vec::new()));
        assert_eq!(screen.notice, Some(SearchNotice::NotFound));
        assert!(!screen.searching);
    }

    #[test]
    fn blank_query_does_not_start_a_search() {
        let mut screen = SearchScreen {
            query: "   ".to_string(),
            notice: Some(SearchNotice::NotFound),
            ..SearchScreen::default()
        };
        let before = screen.clone();

        assert!(!screen.start_search());
        assert_eq!(screen, before);
        assert_eq!(screen.error, None);
    }

    #[test]
    fn search_encodes_title_in_path() {
        let harness = TestHarness::new("/search");
        harness.session.set("jwt", "customer");
        harness.transport.route(
            "GET /business/companies-by-service/Well%20Testing",
            ok_json(r#"[{"CompanyID":3,"Name":"Arctic","CompanyServiceID":31}]"#),
        );

        let offers = block_on(SearchViewModel::new(harness.api.clone()).search(" Well Testing ")).unwrap();
        assert_eq!(offers[0].company_service_id, 31);
    }

    #[test]
    fn booking_creates_request_then_binds_service() {
        let harness = TestHarness::new("/search");
        harness.session.set("jwt", "customer");
        harness.transport.route("POST /bookings", ok_json(r#"{"BookingID":15,"Status":"requested"}"#));
        harness.transport.route("POST /booking-services", ok_json("{}"));

        let offer = CompanyOffer {
            company_id: 3,
            name: "Arctic".to_string(),
            company_service_id: 31,
        };
        let booking = block_on(SearchViewModel::new(harness.api.clone()).book("Drilling", &offer)).unwrap();
        assert_eq!(booking.booking_id, 15);

        let requests = harness.transport.requests();
        let create: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(create["status"], "requested");
        assert_eq!(
            create["description"],
            "Бронирование услуги \"Drilling\" в компании \"Arctic\""
        );
        assert_eq!(
            requests[1].body.as_deref(),
            Some(r#"{"booking_id":15,"company_service_id":31,"notes":null}"#)
        );
    }
}
