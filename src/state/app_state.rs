// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Un único AppState (clonable, todo Rc) con la sesión, el router, el cliente
// API, la ruta actual, el idioma y el estado de cada pantalla. Las vistas
// leen de aquí; las acciones escriben y llaman a `notify`.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::router::{BrowserNavigator, Navigator, Route, Router};
use crate::services::{ApiClient, FetchTransport, HttpTransport};
use crate::state::async_result::AsyncResult;
use crate::state::reactivity::ChangeNotifier;
use crate::state::session_state::SessionStore;
use crate::utils::constants::{LANGUAGE_KEY, LOGIN_PATH};
use crate::utils::storage::{load_preference, save_preference, LocalStorageBackend, StorageBackend};
use crate::viewmodels::{
    AdminUserBookingsScreen, AdminUsersScreen, AdminViewModel, AnalyticsScreen, AuthViewModel,
    BookingDetailsScreen, BookingViewModel, BookingsScreen, CatalogViewModel, CompaniesScreen,
    CompanyViewModel, LoginForm, MyBookingsScreen, MyServicesScreen, NewBookingForm,
    ProfileScreen, RegisterForm, SearchScreen, SearchViewModel, ServicesScreen,
};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub router: Router,
    pub api: ApiClient,
    storage: Rc<dyn StorageBackend>,

    /// Ruta montada; None antes del primer render
    pub route: Rc<RefCell<Option<Route>>>,
    pub language: Rc<RefCell<String>>,

    // Pantallas
    pub login: Rc<RefCell<LoginForm>>,
    pub register: Rc<RefCell<RegisterForm>>,
    pub profile: Rc<RefCell<ProfileScreen>>,
    pub companies: Rc<RefCell<CompaniesScreen>>,
    pub services: Rc<RefCell<ServicesScreen>>,
    pub my_services: Rc<RefCell<MyServicesScreen>>,
    pub search: Rc<RefCell<SearchScreen>>,
    pub bookings: Rc<RefCell<BookingsScreen>>,
    pub my_bookings: Rc<RefCell<MyBookingsScreen>>,
    pub booking_details: Rc<RefCell<BookingDetailsScreen>>,
    pub new_booking: Rc<RefCell<NewBookingForm>>,
    pub admin_users: Rc<RefCell<AdminUsersScreen>>,
    pub analytics: Rc<RefCell<AnalyticsScreen>>,
    pub admin_user_bookings: Rc<RefCell<AdminUserBookingsScreen>>,

    // Reactivity
    pub notifier: ChangeNotifier,
}

impl AppState {
    /// Cablear el estado sobre un almacenamiento, un navegador y un transporte
    pub fn new(
        storage: Rc<dyn StorageBackend>,
        navigator: Rc<dyn Navigator>,
        transport: Rc<dyn HttpTransport>,
        backend_url: &str,
    ) -> Self {
        let session = SessionStore::new(storage.clone());
        let api = ApiClient::new(backend_url, transport, session.clone(), navigator.clone());
        let router = Router::new(session.clone(), navigator);
        let language = load_preference::<String>(storage.as_ref(), LANGUAGE_KEY)
            .unwrap_or_else(|| CONFIG.default_language.clone());

        Self {
            session,
            router,
            api,
            storage,
            route: Rc::new(RefCell::new(None)),
            language: Rc::new(RefCell::new(language)),
            login: Rc::default(),
            register: Rc::default(),
            profile: Rc::default(),
            companies: Rc::default(),
            services: Rc::default(),
            my_services: Rc::default(),
            search: Rc::default(),
            bookings: Rc::default(),
            my_bookings: Rc::default(),
            booking_details: Rc::default(),
            new_booking: Rc::default(),
            admin_users: Rc::default(),
            analytics: Rc::default(),
            admin_user_bookings: Rc::default(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Estado del navegador: localStorage + History API + fetch
    pub fn browser() -> Self {
        Self::new(
            Rc::new(LocalStorageBackend::new()),
            Rc::new(BrowserNavigator::new()),
            Rc::new(FetchTransport::new()),
            &CONFIG.backend_url,
        )
    }

    // ------------------------------------------------------------------------
    // ViewModels
    // ------------------------------------------------------------------------

    pub fn auth_vm(&self) -> AuthViewModel {
        AuthViewModel::new(self.api.clone(), self.session.clone())
    }

    pub fn company_vm(&self) -> CompanyViewModel {
        CompanyViewModel::new(self.api.clone())
    }

    pub fn catalog_vm(&self) -> CatalogViewModel {
        CatalogViewModel::new(self.api.clone())
    }

    pub fn search_vm(&self) -> SearchViewModel {
        SearchViewModel::new(self.api.clone())
    }

    pub fn booking_vm(&self) -> BookingViewModel {
        BookingViewModel::new(self.api.clone())
    }

    pub fn admin_vm(&self) -> AdminViewModel {
        AdminViewModel::new(self.api.clone())
    }

    // ------------------------------------------------------------------------
    // Navegación
    // ------------------------------------------------------------------------

    pub fn current_route(&self) -> Option<Route> {
        self.route.borrow().clone()
    }

    /// Navegar a `path`: guarda, montaje de la pantalla y carga en segundo plano
    pub fn go(&self, path: &str) {
        let route = self.enter(path);
        self.spawn_load(route);
        self.notify();
    }

    /// Navegar y montar sin lanzar cargas (la parte síncrona de `go`)
    pub fn enter(&self, path: &str) -> Route {
        let route = self.router.navigate(path);
        self.mount(&route);
        route
    }

    /// Re-evaluar la guarda sobre la URL actual. Si la vista resultante no es
    /// la montada (arranque, popstate, sesión perdida) se monta y se carga.
    pub fn sync_with_location(&self) -> Route {
        let route = self.router.resolve_current();
        if self.current_route().as_ref() != Some(&route) {
            self.mount(&route);
            self.spawn_load(route.clone());
        }
        route
    }

    pub fn logout(&self) {
        self.auth_vm().logout();
        self.go(LOGIN_PATH);
    }

    /// Fijar la ruta y dejar su pantalla en estado inicial
    fn mount(&self, route: &Route) {
        log::debug!("🧭 [STATE] Montando {}", route.path());
        *self.route.borrow_mut() = Some(route.clone());

        match route {
            Route::Login => *self.login.borrow_mut() = LoginForm::default(),
            Route::Register => *self.register.borrow_mut() = RegisterForm::default(),
            Route::Profile => *self.profile.borrow_mut() = ProfileScreen::default(),
            Route::Companies => *self.companies.borrow_mut() = CompaniesScreen::default(),
            Route::Services => *self.services.borrow_mut() = ServicesScreen::default(),
            Route::MyServices => *self.my_services.borrow_mut() = MyServicesScreen::default(),
            Route::Search => *self.search.borrow_mut() = SearchScreen::default(),
            Route::Bookings => *self.bookings.borrow_mut() = BookingsScreen::default(),
            Route::MyBookings => *self.my_bookings.borrow_mut() = MyBookingsScreen::default(),
            Route::NewBooking => *self.new_booking.borrow_mut() = NewBookingForm::default(),
            Route::BookingDetails(id) => {
                *self.booking_details.borrow_mut() = BookingDetailsScreen::for_booking(*id)
            }
            Route::AdminUsers => *self.admin_users.borrow_mut() = AdminUsersScreen::default(),
            Route::AdminAnalytics => *self.analytics.borrow_mut() = AnalyticsScreen::default(),
            Route::AdminUserBookings(id) => {
                *self.admin_user_bookings.borrow_mut() = AdminUserBookingsScreen::for_user(*id)
            }
            Route::Home | Route::Admin => {}
        }
    }

    fn spawn_load(&self, route: Route) {
        let state = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            state.load_route(&route).await;
            state.notify();
        });
    }

    /// Carga inicial de datos de una pantalla
    pub async fn load_route(&self, route: &Route) {
        match route {
            Route::Profile => {
                let result = self.auth_vm().load_profile().await;
                self.profile.borrow_mut().me = AsyncResult::from_result(result, "profile_load_failed");
            }
            Route::Companies => {
                let result = self.company_vm().load().await;
                self.companies.borrow_mut().companies =
                    AsyncResult::from_result(result, "companies_load_failed");
            }
            Route::Services => {
                let result = self.catalog_vm().load_services().await;
                self.services.borrow_mut().services =
                    AsyncResult::from_result(result, "services_load_failed");
            }
            Route::MyServices => {
                let result = self.catalog_vm().load_my_services().await;
                self.my_services.borrow_mut().data =
                    AsyncResult::from_result(result, "my_services_load_failed");
            }
            Route::Search => {
                let result = self.search_vm().load_catalog().await;
                let mut search = self.search.borrow_mut();
                search.catalog = AsyncResult::from_result(result, "services_load_failed");
                let query = search.query.clone();
                search.set_query(&query);
            }
            Route::Bookings => {
                let result = self.booking_vm().load_all().await;
                self.bookings.borrow_mut().bookings =
                    AsyncResult::from_result(result, "bookings_load_failed");
            }
            Route::MyBookings => {
                let result = self.booking_vm().load_mine().await;
                self.my_bookings.borrow_mut().bookings =
                    AsyncResult::from_result(result, "bookings_load_failed");
            }
            Route::BookingDetails(id) => {
                let result = self.booking_vm().load_details(*id).await;
                let mut screen = self.booking_details.borrow_mut();
                // Otra reserva montada mientras tanto
                if screen.booking_id == *id {
                    screen.details = AsyncResult::from_result(result, "booking_load_failed");
                }
            }
            Route::AdminUsers => {
                let result = self.admin_vm().load_users().await;
                self.admin_users.borrow_mut().users =
                    AsyncResult::from_result(result, "users_load_failed");
            }
            Route::AdminAnalytics => {
                let result = self.admin_vm().load_analytics().await;
                self.analytics.borrow_mut().users =
                    AsyncResult::from_result(result, "analytics_load_failed");
            }
            Route::AdminUserBookings(id) => {
                let result = self.admin_vm().load_user_bookings(*id).await;
                let mut screen = self.admin_user_bookings.borrow_mut();
                if screen.user_id == *id {
                    screen.bookings = AsyncResult::from_result(result, "bookings_load_failed");
                }
            }
            Route::Home
            | Route::Login
            | Route::Register
            | Route::Admin
            | Route::NewBooking => {}
        }
    }

    // ------------------------------------------------------------------------
    // Preferencias
    // ------------------------------------------------------------------------

    pub fn lang(&self) -> String {
        self.language.borrow().clone()
    }

    /// Establecer language y guardar en localStorage
    pub fn set_language(&self, lang: &str) {
        *self.language.borrow_mut() = lang.to_string();
        if let Err(e) = save_preference(self.storage.as_ref(), LANGUAGE_KEY, &lang.to_string()) {
            log::warn!("⚠️ [STATE] No se pudo guardar el idioma: {}", e);
        }
        self.notify();
    }

    // ------------------------------------------------------------------------
    // Reactivity
    // ------------------------------------------------------------------------

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(callback);
    }

    /// Notificar a todos los subscribers (re-render)
    pub fn notify(&self) {
        self.notifier.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::MemoryNavigator;
    use crate::test_support::{ok_json, status, StubTransport, TEST_BASE_URL};
    use crate::utils::storage::MemoryStorage;
    use futures::executor::block_on;

    fn app(start: &str) -> (AppState, MemoryStorage, MemoryNavigator, StubTransport) {
        let storage = MemoryStorage::new();
        let navigator = MemoryNavigator::new(start);
        let transport = StubTransport::default();
        let state = AppState::new(
            Rc::new(storage.clone()),
            Rc::new(navigator.clone()),
            Rc::new(transport.clone()),
            TEST_BASE_URL,
        );
        (state, storage, navigator, transport)
    }

    #[test]
    fn entering_protected_route_without_session_lands_on_login() {
        let (state, _, navigator, _) = app("/");
        assert_eq!(state.enter("/companies"), Route::Login);
        assert_eq!(state.current_route(), Some(Route::Login));
        assert_eq!(navigator.current_path(), "/login");
    }

    #[test]
    fn booking_details_show_single_error_when_services_fail() {
        let (state, _, _, transport) = app("/");
        state.session.set("jwt", "customer");
        transport.route("GET /bookings/7", ok_json(r#"{"BookingID":7,"Status":"requested"}"#));
        transport.route("GET /bookings/7/services", status(500, "boom"));

        let route = state.enter("/bookings/7");
        block_on(state.load_route(&route));

        let screen = state.booking_details.borrow();
        assert_eq!(screen.details, AsyncResult::Failure("booking_load_failed".to_string()));
    }

    #[test]
    fn stale_details_do_not_overwrite_newer_booking() {
        let (state, _, _, transport) = app("/");
        state.session.set("jwt", "customer");
        transport.route("GET /bookings/1", ok_json(r#"{"BookingID":1,"Status":"requested"}"#));
        transport.route("GET /bookings/1/services", ok_json("[]"));

        state.enter("/bookings/2");
        block_on(state.load_route(&Route::BookingDetails(1)));
        assert!(state.booking_details.borrow().details.is_pending());
    }

    #[test]
    fn search_catalog_reapplies_typed_query() {
        let (state, _, _, transport) = app("/");
        state.session.set("jwt", "customer");
        transport.route(
            "GET /services",
            ok_json(r#"[{"ServiceID":1,"Title":"Drilling"},{"ServiceID":2,"Title":"Inspection"}]"#),
        );

        let route = state.enter("/search");
        state.search.borrow_mut().query = "insp".to_string();
        block_on(state.load_route(&route));

        let search = state.search.borrow();
        assert!(search.show_suggestions);
        assert_eq!(search.suggestions[0].title, "Inspection");
    }

    #[test]
    fn unauthorized_load_clears_session_and_moves_to_login() {
        let (state, storage, navigator, transport) = app("/");
        state.session.set("expired", "admin");
        transport.route("GET /users", status(401, ""));

        let route = state.enter("/admin/users");
        assert_eq!(route, Route::AdminUsers);
        block_on(state.load_route(&route));

        assert!(storage.is_empty());
        assert_eq!(navigator.current_path(), "/login");
        assert_eq!(state.router.resolve_current(), Route::Login);
    }

    #[test]
    fn language_persists_across_reload() {
        let (state, storage, _, _) = app("/");
        state.set_language("EN");

        let reloaded = AppState::new(
            Rc::new(storage.clone()),
            Rc::new(MemoryNavigator::new("/")),
            Rc::new(StubTransport::default()),
            TEST_BASE_URL,
        );
        assert_eq!(reloaded.lang(), "EN");
    }
}
