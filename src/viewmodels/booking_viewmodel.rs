// ============================================================================
// BOOKING VIEWMODEL - Reservas: listado, mis reservas, detalle, alta
// ============================================================================

use crate::models::booking::BookingServiceCreate;
use crate::models::{Booking, BookingCreateRequest, BookingService};
use crate::services::ApiClient;
use crate::state::async_result::AsyncResult;
use crate::utils::constants::BOOKING_REQUESTED_STATUS;
use crate::viewmodels::{required_id, ActionError};

/// Orden de "mis reservas" por BookingID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingSort {
    #[default]
    Newest,
    Oldest,
}

impl BookingSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingSort::Newest => "new",
            BookingSort::Oldest => "old",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "old" => BookingSort::Oldest,
            _ => BookingSort::Newest,
        }
    }
}

/// Filtro de texto (id, estado, descripción) + orden
pub fn filter_bookings(bookings: &[Booking], query: &str, sort: BookingSort) -> Vec<Booking> {
    let needle = query.trim().to_lowercase();
    let mut visible: Vec<Booking> = bookings
        .iter()
        .filter(|b| needle.is_empty() || b.search_text().contains(&needle))
        .cloned()
        .collect();
    match sort {
        BookingSort::Newest => visible.sort_by(|a, b| b.booking_id.cmp(&a.booking_id)),
        BookingSort::Oldest => visible.sort_by(|a, b| a.booking_id.cmp(&b.booking_id)),
    }
    visible
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingsScreen {
    pub bookings: AsyncResult<Vec<Booking>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MyBookingsScreen {
    pub bookings: AsyncResult<Vec<Booking>>,
    pub query: String,
    pub sort: BookingSort,
    pub action_error: Option<String>,
}

impl MyBookingsScreen {
    pub fn visible(&self) -> Vec<Booking> {
        self.bookings
            .data()
            .map(|all| filter_bookings(all, &self.query, self.sort))
            .unwrap_or_default()
    }

    /// (mostradas, total)
    pub fn counts(&self) -> (usize, usize) {
        let total = self.bookings.data().map(Vec::len).unwrap_or(0);
        (self.visible().len(), total)
    }
}

/// Reserva + sus servicios: solo existe si ambas cargas tuvieron éxito
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub services: Vec<BookingService>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDetailsScreen {
    pub booking_id: i64,
    pub details: AsyncResult<BookingDetails>,
    pub company_service_id: String,
    pub notes: String,
    pub busy: bool,
    pub action_error: Option<String>,
}

impl BookingDetailsScreen {
    pub fn for_booking(booking_id: i64) -> Self {
        Self {
            booking_id,
            ..Self::default()
        }
    }

    /// Aplicar el resultado de `add_service` si la pantalla sigue en la misma reserva
    pub fn finish_add(
        &mut self,
        booking_id: i64,
        result: Result<Option<BookingDetails>, ActionError>,
    ) {
        if self.booking_id != booking_id {
            return;
        }
        self.busy = false;
        match result {
            Ok(reloaded) => {
                self.company_service_id.clear();
                self.notes.clear();
                match reloaded {
                    Some(details) => self.details = AsyncResult::Success(details),
                    None => self.action_error = Some("booking_reload_failed".to_string()),
                }
            }
            Err(e) => self.action_error = Some(e.user_message("booking_service_failed")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBookingForm {
    pub user_id: String,
    pub description: String,
    pub status: String,
    pub busy: bool,
    pub created: Option<i64>,
    pub error: Option<String>,
}

impl Default for NewBookingForm {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            description: String::new(),
            status: BOOKING_REQUESTED_STATUS.to_string(),
            busy: false,
            created: None,
            error: None,
        }
    }
}

impl NewBookingForm {
    /// Campos vacíos se omiten; user_id, si viene, debe ser numérico
    pub fn to_request(&self) -> Result<BookingCreateRequest, ActionError> {
        let user_id = match self.user_id.trim() {
            "" => None,
            raw => Some(required_id(raw, "user_id_invalid")?),
        };
        Ok(BookingCreateRequest {
            user_id,
            description: non_empty(&self.description),
            status: non_empty(&self.status),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

#[derive(Clone)]
pub struct BookingViewModel {
    api: ApiClient,
}

impl BookingViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load_all(&self) -> Result<Vec<Booking>, ActionError> {
        Ok(self.api.bookings().await?)
    }

    pub async fn load_mine(&self) -> Result<Vec<Booking>, ActionError> {
        let bookings = self.api.my_bookings().await?;
        log::info!("📅 [BOOKINGS] {} reservas propias", bookings.len());
        Ok(bookings)
    }

    pub async fn delete_mine(&self, booking_id: i64) -> Result<Vec<Booking>, ActionError> {
        self.api.delete_my_booking(booking_id).await?;
        log::info!("🗑️ [BOOKINGS] Reserva {} eliminada", booking_id);
        self.load_mine().await
    }

    /// Reserva y servicios en paralelo; cualquier fallo invalida ambos
    pub async fn load_details(&self, booking_id: i64) -> Result<BookingDetails, ActionError> {
        let (booking, services) = futures::try_join!(
            self.api.booking(booking_id),
            self.api.booking_services(booking_id)
        )?;
        Ok(BookingDetails { booking, services })
    }

    /// Añadir un servicio y recargar. `Ok(None)`: añadido, pero la recarga falló
    pub async fn add_service(
        &self,
        booking_id: i64,
        company_service_id: &str,
        notes: &str,
    ) -> Result<Option<BookingDetails>, ActionError> {
        let request = BookingServiceCreate {
            booking_id,
            company_service_id: required_id(company_service_id, "company_service_id_required")?,
            notes: non_empty(notes),
        };
        self.api.add_booking_service(&request).await?;
        log::info!("➕ [BOOKINGS] Servicio añadido a la reserva {}", booking_id);

        match self.load_details(booking_id).await {
            Ok(details) => Ok(Some(details)),
            Err(e) => {
                log::warn!("⚠️ [BOOKINGS] Recarga de la reserva {} fallida: {}", booking_id, e);
                Ok(None)
            }
        }
    }

    pub async fn create(&self, form: &NewBookingForm) -> Result<Booking, ActionError> {
        let request = form.to_request()?;
        let booking = self.api.create_booking(&request).await?;
        log::info!("📅 [BOOKINGS] Reserva #{} creada", booking.booking_id);
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::error::ApiError;
    use crate::test_support::{ok_json, status, TestHarness};
    use futures::executor::block_on;

    fn bookings() -> Vec<Booking> {
        serde_json::from_str(
            r#"[
                {"BookingID":3,"Status":"approved","Description":"Cementing job"},
                {"BookingID":9,"Status":"requested","Description":"Drilling"},
                {"BookingID":5,"Status":"cancelled"}
            ]"#,
        )
        .unwrap()
    }

    fn authed(path: &str) -> TestHarness {
        let harness = TestHarness::new(path);
        harness.session.set("jwt", "customer");
        harness
    }

    #[test]
    fn filter_matches_id_status_and_description() {
        let ids = |list: Vec<Booking>| list.iter().map(|b| b.booking_id).collect::<Vec<_>>();
        assert_eq!(ids(filter_bookings(&bookings(), "", BookingSort::Newest)), vec![9, 5, 3]);
        assert_eq!(ids(filter_bookings(&bookings(), "", BookingSort::Oldest)), vec![3, 5, 9]);
        assert_eq!(ids(filter_bookings(&bookings(), "CEMENT", BookingSort::Newest)), vec![3]);
        assert_eq!(ids(filter_bookings(&bookings(), "9", BookingSort::Newest)), vec![9]);
    }

    #[test]
    fn counts_report_visible_and_total() {
        let screen = MyBookingsScreen {
            bookings: AsyncResult::Success(bookings()),
            query: "requested".to_string(),
            ..MyBookingsScreen::default()
        };
        assert_eq!(screen.counts(), (1, 3));
    }

    #[test]
    fn details_need_both_fetches() {
        let harness = authed("/bookings/7");
        harness.transport.route("GET /bookings/7", ok_json(r#"{"BookingID":7,"Status":"requested"}"#));
        harness.transport.route("GET /bookings/7/services", status(500, "db down"));

        let result = block_on(BookingViewModel::new(harness.api.clone()).load_details(7));
        assert!(matches!(result, Err(ActionError::Api(ApiError::Http { status: 500, .. }))));
    }

    #[test]
    fn details_combine_booking_and_services() {
        let harness = authed("/bookings/7");
        harness.transport.route("GET /bookings/7", ok_json(r#"{"BookingID":7,"Status":"requested"}"#));
        harness.transport.route(
            "GET /bookings/7/services",
            ok_json(r#"[{"BookingServiceID":1,"BookingID":7,"CompanyServiceID":31,"Notes":"asap"}]"#),
        );

        let details = block_on(BookingViewModel::new(harness.api.clone()).load_details(7)).unwrap();
        assert_eq!(details.booking.booking_id, 7);
        assert_eq!(details.services[0].notes.as_deref(), Some("asap"));
    }

    #[test]
    fn add_service_requires_numeric_id() {
        let harness = authed("/bookings/7");
        let result = block_on(BookingViewModel::new(harness.api.clone()).add_service(7, "abc", ""));
        assert_eq!(result, Err(ActionError::Validation("company_service_id_required")));
        assert!(harness.transport.requests().is_empty());
    }

    #[test]
    fn added_service_survives_failed_reload() {
        let harness = authed("/bookings/7");
        harness.transport.route("POST /booking-services", ok_json("{}"));

        let result = block_on(BookingViewModel::new(harness.api.clone()).add_service(7, "31", "asap"));
        assert_eq!(result, Ok(None));

        let mut screen = BookingDetailsScreen {
            company_service_id: "31".to_string(),
            busy: true,
            ..BookingDetailsScreen::for_booking(7)
        };
        screen.finish_add(7, result);
        assert!(!screen.busy);
        assert!(screen.company_service_id.is_empty());
        assert_eq!(screen.action_error.as_deref(), Some("booking_reload_failed"));
    }

    #[test]
    fn add_result_for_another_booking_is_dropped() {
        let mut screen = BookingDetailsScreen {
            busy: true,
            ..BookingDetailsScreen::for_booking(8)
        };
        let failed = Err(ActionError::Api(ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        }));
        screen.finish_add(7, failed);
        assert_eq!(screen, BookingDetailsScreen {
            busy: true,
            ..BookingDetailsScreen::for_booking(8)
        });

        screen.finish_add(8, Err(ActionError::Validation("company_service_id_required")));
        assert!(!screen.busy);
        assert_eq!(screen.action_error.as_deref(), Some("company_service_id_required"));
    }

    #[test]
    fn new_booking_form_omits_blank_fields() {
        let form = NewBookingForm {
            description: "  ".to_string(),
            ..NewBookingForm::default()
        };
        assert_eq!(
            form.to_request(),
            Ok(BookingCreateRequest {
                user_id: None,
                description: None,
                status: Some("requested".to_string()),
            })
        );

        let bad = NewBookingForm {
            user_id: "x1".to_string(),
            ..NewBookingForm::default()
        };
        assert_eq!(bad.to_request(), Err(ActionError::Validation("user_id_invalid")));
    }

    #[test]
    fn deleting_own_booking_reloads_list() {
        let harness = authed("/bookings/my");
        harness.transport.route("DELETE /bookings/9/me", ok_json("{}"));
        harness.transport.route("GET /bookings/me", ok_json("[]"));

        let list = block_on(BookingViewModel::new(harness.api.clone()).delete_mine(9)).unwrap();
        assert!(list.is_empty());
        assert_eq!(
            harness.transport.paths(),
            vec!["DELETE /bookings/9/me".to_string(), "GET /bookings/me".to_string()]
        );
    }
}
