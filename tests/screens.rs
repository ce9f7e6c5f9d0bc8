//! Comportamiento de pantallas sobre un backend simulado.

use futures::executor::block_on;
use oilgas_booking::router::Route;
use oilgas_booking::state::AsyncResult;
use oilgas_booking::test_support::{ok_json, status, TestApp};

#[test]
fn booking_details_fail_as_a_whole() {
    let app = TestApp::start("/");
    app.state.session.set("jwt", "customer");
    app.transport
        .route("GET /bookings/7", ok_json(r#"{"BookingID":7,"Status":"requested"}"#))
        .route("GET /bookings/7/services", status(500, "boom"));

    let route = app.state.enter("/bookings/7");
    assert_eq!(route, Route::BookingDetails(7));
    block_on(app.state.load_route(&route));

    let screen = app.state.booking_details.borrow();
    assert!(screen.details.data().is_none());
    assert_eq!(screen.details.error(), Some("booking_load_failed"));
}

#[test]
fn booking_details_fail_when_booking_missing() {
    let app = TestApp::start("/");
    app.state.session.set("jwt", "customer");
    app.transport
        .route("GET /bookings/7", status(404, "not found"))
        .route("GET /bookings/7/services", ok_json("[]"));

    let route = app.state.enter("/bookings/7");
    block_on(app.state.load_route(&route));
    assert!(matches!(
        app.state.booking_details.borrow().details,
        AsyncResult::Failure(_)
    ));
}

#[test]
fn booking_details_render_both_parts() {
    let app = TestApp::start("/");
    app.state.session.set("jwt", "customer");
    app.transport
        .route("GET /bookings/7", ok_json(r#"{"BookingID":7,"Status":"requested"}"#))
        .route(
            "GET /bookings/7/services",
            ok_json(r#"[{"BookingServiceID":2,"BookingID":7,"CompanyServiceID":31}]"#),
        );

    let route = app.state.enter("/bookings/7");
    block_on(app.state.load_route(&route));

    let screen = app.state.booking_details.borrow();
    let details = screen.details.data().expect("details loaded");
    assert_eq!(details.booking.status, "requested");
    assert_eq!(details.services.len(), 1);
}

#[test]
fn add_service_result_stays_with_its_booking() {
    let app = TestApp::start("/");
    app.state.session.set("jwt", "customer");
    app.transport.route("POST /booking-services", status(500, "boom"));

    app.state.enter("/bookings/7");
    let result = block_on(app.state.booking_vm().add_service(7, "31", ""));

    // El usuario ya pasó a otra reserva
    app.state.enter("/bookings/8");
    app.state.booking_details.borrow_mut().finish_add(7, result);

    let screen = app.state.booking_details.borrow();
    assert_eq!(screen.booking_id, 8);
    assert_eq!(screen.action_error, None);
}

#[test]
fn search_suggestions_filter_and_select() {
    let app = TestApp::start("/");
    app.state.session.set("jwt", "customer");
    app.transport.route(
        "GET /services",
        ok_json(r#"[{"ServiceID":1,"Title":"Drilling"},{"ServiceID":2,"Title":"Inspection"}]"#),
    );

    let route = app.state.enter("/search");
    block_on(app.state.load_route(&route));

    let mut search = app.state.search.borrow_mut();
    search.set_query("dri");
    let titles: Vec<&str> = search.suggestions.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Drilling"]);
    assert!(search.show_suggestions);

    search.select_suggestion("Drilling");
    assert_eq!(search.query, "Drilling");
    assert!(!search.show_suggestions);
}

#[test]
fn search_then_book_reports_created_booking() {
    let app = TestApp::start("/");
    app.state.session.set("jwt", "customer");
    app.transport
        .route(
            "GET /business/companies-by-service/Drilling",
            ok_json(r#"[{"CompanyID":3,"Name":"Arctic Drill","CompanyServiceID":31}]"#),
        )
        .route("POST /bookings", status(201, r#"{"BookingID":44,"Status":"requested"}"#))
        .route("POST /booking-services", status(201, "{}"));

    let vm = app.state.search_vm();
    let offers = block_on(vm.search("Drilling")).unwrap();
    let booking = block_on(vm.book("Drilling", &offers[0])).unwrap();
    assert_eq!(booking.booking_id, 44);

    assert_eq!(
        app.transport.paths(),
        vec![
            "GET /business/companies-by-service/Drilling",
            "POST /bookings",
            "POST /booking-services",
        ]
    );
}

#[test]
fn registration_opens_session_and_reaches_companies() {
    let app = TestApp::start("/register");
    app.transport
        .route("POST /auth/register", ok_json(r#"{"token":"fresh","role":"customer"}"#))
        .route("GET /companies/my", ok_json("[]"));

    {
        let mut form = app.state.register.borrow_mut();
        form.name = "Olga".to_string();
        form.email = "olga@oilgas.ru".to_string();
        form.password = "pw".to_string();
    }
    let form = app.state.register.borrow().clone();
    block_on(app.state.auth_vm().register(&form)).unwrap();

    let route = app.state.enter("/companies");
    block_on(app.state.load_route(&route));
    assert_eq!(route, Route::Companies);
    assert_eq!(
        app.state.companies.borrow().companies,
        AsyncResult::Success(Vec::new())
    );
}

#[test]
fn server_failure_stays_local_to_the_screen() {
    let app = TestApp::start("/");
    app.state.session.set("jwt", "customer");
    app.transport.route("GET /bookings/me", status(500, "boom"));

    let route = app.state.enter("/bookings/my");
    block_on(app.state.load_route(&route));

    assert_eq!(
        app.state.my_bookings.borrow().bookings.error(),
        Some("bookings_load_failed")
    );
    assert!(app.state.session.is_authenticated());
    assert_eq!(app.current_path(), "/bookings/my");
}
