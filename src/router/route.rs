// ============================================================================
// ROUTES - Tabla de rutas de la SPA
// ============================================================================

/// Nivel de acceso que exige una vista
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Profile,
    Admin,
    AdminUsers,
    AdminAnalytics,
    AdminUserBookings(i64),
    Companies,
    Services,
    Bookings,
    NewBooking,
    MyBookings,
    BookingDetails(i64),
    Search,
    MyServices,
}

impl Route {
    /// Parsear un pathname. Cualquier ruta desconocida cae en Home.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["profile"] => Route::Profile,
            ["admin"] => Route::Admin,
            ["admin", "users"] => Route::AdminUsers,
            ["admin", "analytics"] => Route::AdminAnalytics,
            ["admin", "users", id, "bookings"] => {
                id.parse().map(Route::AdminUserBookings).unwrap_or(Route::Home)
            }
            ["companies"] => Route::Companies,
            ["services"] => Route::Services,
            ["bookings"] => Route::Bookings,
            ["bookings", "new"] => Route::NewBooking,
            ["bookings", "my"] => Route::MyBookings,
            ["bookings", id] => id.parse().map(Route::BookingDetails).unwrap_or(Route::Home),
            ["search"] => Route::Search,
            ["my-services"] => Route::MyServices,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::AdminUsers => "/admin/users".to_string(),
            Route::AdminAnalytics => "/admin/analytics".to_string(),
            Route::AdminUserBookings(id) => format!("/admin/users/{}/bookings", id),
            Route::Companies => "/companies".to_string(),
            Route::Services => "/services".to_string(),
            Route::Bookings => "/bookings".to_string(),
            Route::NewBooking => "/bookings/new".to_string(),
            Route::MyBookings => "/bookings/my".to_string(),
            Route::BookingDetails(id) => format!("/bookings/{}", id),
            Route::Search => "/search".to_string(),
            Route::MyServices => "/my-services".to_string(),
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Home | Route::Login | Route::Register => Access::Public,
            Route::Admin
            | Route::AdminUsers
            | Route::AdminAnalytics
            | Route::AdminUserBookings(_) => Access::Admin,
            _ => Access::Authenticated,
        }
    }

    /// Login y registro se muestran sin cabecera
    pub fn is_auth_screen(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::Home)]
    #[case("/login", Route::Login)]
    #[case("/bookings/my", Route::MyBookings)]
    #[case("/bookings/new", Route::NewBooking)]
    #[case("/bookings/7", Route::BookingDetails(7))]
    #[case("/bookings/abc", Route::Home)]
    #[case("/admin/users/3/bookings", Route::AdminUserBookings(3))]
    #[case("/my-services/", Route::MyServices)]
    #[case("/search?q=drill", Route::Search)]
    #[case("/nowhere", Route::Home)]
    fn parses_paths(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::parse(path), expected);
    }

    #[rstest]
    #[case(Route::AdminUserBookings(12))]
    #[case(Route::BookingDetails(7))]
    #[case(Route::MyServices)]
    #[case(Route::Home)]
    fn path_parses_back(#[case] route: Route) {
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn admin_routes_require_admin() {
        assert_eq!(Route::AdminAnalytics.access(), Access::Admin);
        assert_eq!(Route::Search.access(), Access::Authenticated);
        assert_eq!(Route::Register.access(), Access::Public);
    }
}
