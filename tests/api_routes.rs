// tests/api_routes.rs
use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use urdu_roman::api::{configure_routes, static_file_handler, AppState};
use urdu_roman::clipboard::Clipboard;
use urdu_roman::config::AppConfig;
use urdu_roman::errors::Result;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct RecordingClipboard(Arc<Mutex<Vec<String>>>);

impl Clipboard for RecordingClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        self.0.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn app_state(api_base: &str, clipboard: RecordingClipboard) -> AppState {
    let config = AppConfig::from_toml_str(&format!("api_base = \"{}\"", api_base)).unwrap();
    AppState::with_clipboard(config, Arc::new(clipboard))
}

async fn mount_healthy(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "model_loaded": true,
            "device": "cpu"
        })))
        .mount(server)
        .await;
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes)
                .route("/{_:.*}", web::get().to(static_file_handler)),
        )
        .await
    };
}

#[actix_web::test]
async fn translate_success_scenario() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_json(json!({ "text_ur": "زندگی ایک سفر ہے" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "output_text": "zindagi ek safar hai" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let state = app_state(&server.uri(), RecordingClipboard::default());
    let app = init_app!(state);

    let req = test::TestRequest::post().uri("/api/v1/health").to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view["status_label"], "Connected (cpu)");

    let req = test::TestRequest::put()
        .uri("/api/v1/input")
        .set_json(json!({ "text": "زندگی ایک سفر ہے" }))
        .to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view["can_translate"], true);
    assert_eq!(view["char_count"], 16);

    let req = test::TestRequest::post().uri("/api/v1/translate").to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view["output_text"], "zindagi ek safar hai");
    assert_eq!(view["error_message"], Value::Null);
    assert_eq!(view["is_loading"], false);
}

#[actix_web::test]
async fn blank_input_never_reaches_backend() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output_text": "x" })))
        .expect(0)
        .mount(&server)
        .await;

    let state = app_state(&server.uri(), RecordingClipboard::default());
    state.session.check_health().await;
    let app = init_app!(state);

    let req = test::TestRequest::put()
        .uri("/api/v1/input")
        .set_json(json!({ "text": "    " }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post().uri("/api/v1/translate").to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view["error_message"], "Please enter some Urdu text to translate");
    assert_eq!(view["is_loading"], false);
}

#[actix_web::test]
async fn backend_detail_replaces_previous_output() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_json(json!({ "text_ur": "دل" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output_text": "dil" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_json(json!({ "text_ur": "شام" })))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "model not loaded" })))
        .mount(&server)
        .await;

    let state = app_state(&server.uri(), RecordingClipboard::default());
    state.session.check_health().await;
    let app = init_app!(state);

    for (text, expected_output) in [("دل", "dil"), ("شام", "")] {
        let req = test::TestRequest::put()
            .uri("/api/v1/input")
            .set_json(json!({ "text": text }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post().uri("/api/v1/translate").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let view: Value = test::read_body_json(resp).await;
        assert_eq!(view["output_text"], expected_output);
    }

    let view = state.session.snapshot().view();
    assert_eq!(view.error_message.as_deref(), Some("model not loaded"));
    assert!(view.output_text.is_empty());
    assert!(!view.is_loading);
}

#[actix_web::test]
async fn translate_refused_until_backend_is_healthy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output_text": "x" })))
        .expect(0)
        .mount(&server)
        .await;

    let state = app_state(&server.uri(), RecordingClipboard::default());
    let app = init_app!(state);

    let req = test::TestRequest::put()
        .uri("/api/v1/input")
        .set_json(json!({ "text": "دل" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post().uri("/api/v1/translate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["state"]["can_translate"], false);
}

#[actix_web::test]
async fn unreachable_backend_reports_disconnected() {
    let state = app_state("http://127.0.0.1:1", RecordingClipboard::default());
    let app = init_app!(state);

    let req = test::TestRequest::post().uri("/api/v1/health").to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        view["health"],
        json!({ "status": "error", "model_loaded": false, "error": "Cannot connect to API" })
    );
    assert_eq!(view["status_label"], "Disconnected");
    assert_eq!(view["can_translate"], false);
}

#[actix_web::test]
async fn samples_clear_and_dismiss() {
    let state = app_state("http://127.0.0.1:1", RecordingClipboard::default());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/v1/samples").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["samples"].as_array().unwrap().len(), 5);
    assert_eq!(body["samples"][0]["preview"].as_str().unwrap().chars().count(), 33);

    let req = test::TestRequest::post().uri("/api/v1/samples/2").to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view["input_text"], "محبت کرنے والے کم نہیں");
    assert_eq!(view["can_clear"], true);

    let req = test::TestRequest::post().uri("/api/v1/samples/9").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post().uri("/api/v1/clear").to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view["input_text"], "");
    assert_eq!(view["can_clear"], false);

    state.session.translate("").await;
    let req = test::TestRequest::post().uri("/api/v1/error/dismiss").to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view["error_message"], Value::Null);
}

#[actix_web::test]
async fn copy_sends_output_to_clipboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output_text": "dil" })))
        .mount(&server)
        .await;

    let clipboard = RecordingClipboard::default();
    let state = app_state(&server.uri(), clipboard.clone());
    let app = init_app!(state);

    let req = test::TestRequest::post().uri("/api/v1/copy").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(clipboard.0.lock().unwrap().is_empty());

    state.session.translate("دل").await;
    let req = test::TestRequest::post().uri("/api/v1/copy").to_request();
    test::call_service(&app, req).await;
    assert_eq!(*clipboard.0.lock().unwrap(), vec!["dil".to_string()]);
}

#[actix_web::test]
async fn info_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "Model not loaded" })))
        .mount(&server)
        .await;

    let state = app_state(&server.uri(), RecordingClipboard::default());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/v1/info").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Model not loaded");
}

#[actix_web::test]
async fn index_page_is_served() {
    let state = app_state("http://127.0.0.1:1", RecordingClipboard::default());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("content-type").unwrap().to_str().unwrap().starts_with("text/html"));

    let req = test::TestRequest::get().uri("/missing.png").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn translate_uses_text_sent_with_the_request() {
    let server = MockServer::start().await;
    mount_healthy(&server).await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_json(json!({ "text_ur": "دل سے نکلے ہیں" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output_text": "dil se nikle hain" })))
        .expect(1)
        .mount(&server)
        .await;

    let state = app_state(&server.uri(), RecordingClipboard::default());
    state.session.check_health().await;
    let app = init_app!(state);

    // The stored input lags behind what the page is showing.
    let req = test::TestRequest::put()
        .uri("/api/v1/input")
        .set_json(json!({ "text": "" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/translate")
        .set_json(json!({ "text": "دل سے نکلے ہیں" }))
        .to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(view["input_text"], "دل سے نکلے ہیں");
    assert_eq!(view["output_text"], "dil se nikle hain");
    assert_eq!(view["error_message"], Value::Null);
}

#[actix_web::test]
async fn transport_failure_shows_fallback_message() {
    let state = app_state("http://127.0.0.1:1", RecordingClipboard::default());

    state.session.translate("دل").await;

    let view = state.session.snapshot().view();
    assert_eq!(
        view.error_message.as_deref(),
        Some("Translation failed. Please check if the API server is running.")
    );
    assert!(view.output_text.is_empty());
    assert!(!view.is_loading);
}
