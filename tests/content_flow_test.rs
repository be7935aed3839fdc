use folio_core::adapters::content::ApiContentSource;
use folio_core::adapters::delivery::HttpRelayGateway;
use folio_core::domain::{FormField, LoadState, SubmissionStatus};
use folio_core::usecases::{ContactFormController, ContentLoader};
use httpmock::prelude::*;
use std::sync::Arc;

#[tokio::test]
async fn loads_portfolio_content_over_http() {
    let server = MockServer::start();
    let portfolio = serde_json::json!({
        "projects": [
            {"title": "Chat Archiver", "description": "Incremental backups", "technologies": ["Rust", "SQLite"]},
            {"title": "Portfolio Site", "technologies": ["React"], "live_url": "https://example.dev"}
        ],
        "experiences": [
            {"title": "Software Engineer", "organization": "Example Labs", "period": "2023 - Present"}
        ],
        "skills": [
            {"category": "Backend Development", "skills": [{"name": "Rust", "level": 80}]}
        ]
    });

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/portfolio");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(portfolio);
    });

    let source = Arc::new(ApiContentSource::new(server.url("/api/portfolio")));
    let mut loader = ContentLoader::new(source);
    loader.load().await;

    api_mock.assert();
    assert_eq!(*loader.state(), LoadState::Ready);
    assert_eq!(loader.projects().len(), 2);
    assert_eq!(loader.projects()[0].title, "Chat Archiver");
    assert_eq!(loader.projects()[1].live_url.as_deref(), Some("https://example.dev"));
    assert_eq!(loader.experiences()[0].organization, "Example Labs");
    assert_eq!(loader.skills()[0].skills[0].level, Some(80));
}

#[tokio::test]
async fn content_api_failure_surfaces_as_error_state() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/portfolio");
        then.status(503).body("maintenance");
    });

    let source = Arc::new(ApiContentSource::new(server.url("/api/portfolio")));
    let mut loader = ContentLoader::new(source);
    loader.load().await;

    let message = loader.error_message().expect("error state");
    assert!(message.contains("503"));
    assert!(loader.projects().is_empty());
}

#[tokio::test]
async fn submits_a_contact_message_over_http() {
    let server = MockServer::start();
    let relay_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/contact")
            .header("authorization", "Bearer sekret")
            .json_body(serde_json::json!({
                "name": "Jo",
                "email": "jo@example.com",
                "message": "Let's build something"
            }));
        then.status(200);
    });

    let gateway = Arc::new(HttpRelayGateway::new(
        server.url("/contact"),
        Some("sekret".to_string()),
    ));
    let mut controller = ContactFormController::new(gateway);
    controller.edit(FormField::Name, "Jo");
    controller.edit(FormField::Email, "jo@example.com");
    controller.edit(FormField::Message, "Let's build something");

    controller.submit().await;

    relay_mock.assert();
    assert_eq!(*controller.status(), SubmissionStatus::Success);
    assert!(controller.draft().name.is_empty());
}

#[tokio::test]
async fn relay_rejection_is_reported_and_the_draft_survives() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(500).body("smtp unavailable");
    });

    let gateway = Arc::new(HttpRelayGateway::new(server.url("/contact"), None));
    let mut controller = ContactFormController::new(gateway);
    controller.edit(FormField::Name, "Jo");
    controller.edit(FormField::Email, "jo@example.com");
    controller.edit(FormField::Message, "hi");

    controller.submit().await;

    match controller.status() {
        SubmissionStatus::Error(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("smtp unavailable"));
        }
        other => panic!("expected error status, got {:?}", other),
    }
    assert_eq!(controller.draft().message, "hi");
}
