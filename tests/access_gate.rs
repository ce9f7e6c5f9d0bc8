//! Sesión + autenticador + guardas, de extremo a extremo sobre AppState.

use futures::executor::block_on;
use oilgas_booking::router::Route;
use oilgas_booking::state::SessionSnapshot;
use oilgas_booking::test_support::{ok_json, status, TestApp, TEST_BASE_URL};
use oilgas_booking::utils::constants::AFTER_LOGIN_PATH;
use rstest::rstest;

#[rstest]
#[case("/companies")]
#[case("/my-services")]
#[case("/bookings")]
#[case("/bookings/my")]
#[case("/bookings/new")]
#[case("/bookings/42")]
#[case("/search")]
#[case("/profile")]
#[case("/admin")]
#[case("/admin/users/3/bookings")]
fn anonymous_user_always_lands_on_login(#[case] path: &str) {
    let app = TestApp::start("/");
    assert_eq!(app.state.enter(path), Route::Login);
    assert_eq!(app.current_path(), "/login");
    // Back no vuelve a la vista protegida
    assert_eq!(app.navigator.back(), Some("/".to_string()));
}

#[rstest]
#[case("customer", "/admin", Route::Search)]
#[case("customer", "/admin/analytics", Route::Search)]
#[case("operator", "/admin/users", Route::Search)]
#[case("admin ", "/admin/users", Route::Search)]
#[case("admin", "/admin/analytics", Route::AdminAnalytics)]
#[case("admin", "/companies", Route::Companies)]
#[case("customer", "/companies", Route::Companies)]
fn admin_views_need_admin_role(#[case] role: &str, #[case] path: &str, #[case] expected: Route) {
    let app = TestApp::start("/");
    app.state.session.set("jwt", role);
    let route = app.state.enter(path);
    assert_eq!(route, expected);
    assert_ne!(route, Route::Login);
}

#[test]
fn guard_follows_session_across_a_navigation_sequence() {
    let app = TestApp::start("/");
    app.transport.route(
        "POST /auth/login",
        ok_json(r#"{"token":"jwt-7","role":"customer"}"#),
    );

    assert_eq!(app.state.enter("/bookings/my"), Route::Login);

    block_on(app.state.auth_vm().login("ivan@oilgas.ru", "secret")).unwrap();
    assert_eq!(app.state.enter(AFTER_LOGIN_PATH), Route::Companies);
    assert_eq!(app.state.enter("/bookings/my"), Route::MyBookings);
    assert_eq!(app.state.enter("/admin"), Route::Search);

    app.state.auth_vm().logout();
    assert_eq!(app.state.enter("/bookings/my"), Route::Login);
}

#[test]
fn session_survives_reload() {
    let app = TestApp::start("/");
    app.state.session.set("jwt-1", "admin");

    let reloaded = app.reload();
    assert_eq!(
        reloaded.state.session.get(),
        SessionSnapshot {
            credential: Some("jwt-1".to_string()),
            role: Some("admin".to_string()),
        }
    );
    assert_eq!(reloaded.state.enter("/admin/users"), Route::AdminUsers);
}

#[test]
fn cleared_session_redirects_next_render() {
    let app = TestApp::start("/");
    app.state.session.set("jwt-1", "customer");
    assert_eq!(app.state.enter("/search"), Route::Search);

    app.state.session.clear();
    assert_eq!(app.state.session.get(), SessionSnapshot::default());
    assert_eq!(app.state.router.resolve_current(), Route::Login);
}

#[rstest]
#[case("/companies", "GET /companies/my")]
#[case("/bookings/my", "GET /bookings/me")]
#[case("/admin/users", "GET /users")]
#[case("/profile", "GET /auth/me")]
fn any_401_ends_the_session(#[case] path: &str, #[case] call: &str) {
    let app = TestApp::start("/");
    app.state.session.set("expired", "admin");
    app.transport.otherwise(status(401, "token expired"));

    let route = app.state.enter(path);
    block_on(app.state.load_route(&route));

    let seen = app.transport.requests();
    assert_eq!(seen.len(), 1);
    let sent = format!(
        "{} {}",
        seen[0].method.as_str(),
        seen[0].url.trim_start_matches(TEST_BASE_URL)
    );
    assert_eq!(sent, call);
    assert_eq!(seen[0].header("Authorization"), Some("Bearer expired"));

    assert!(app.storage.is_empty());
    assert_eq!(app.current_path(), "/login");
    assert_eq!(app.navigator.full_loads(), vec!["/login".to_string()]);
    assert_eq!(app.state.router.resolve_current(), Route::Login);
}
