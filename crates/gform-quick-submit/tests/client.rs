//! Submission and scraping against a mock form server.

use gform_quick_submit::{
    ClientConfig, FormEntry, FormItem, GformClient, GformError, SubmitRequest, UnsetValue,
};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ─────────────────────── helpers ───────────────────────

const FORM_PATH: &str = "/forms/d/e/1FAIpQLSdemo";

fn client() -> GformClient {
    GformClient::new(ClientConfig::default().with_timeout_ms(5_000)).unwrap()
}

fn form_url(server: &MockServer) -> String {
    format!("{}{FORM_PATH}", server.uri())
}

fn contact_items() -> Vec<FormItem> {
    vec![
        FormItem::unset("1037971436"),
        FormItem::new("64248411", "Jane Doe"),
        FormItem::new("1959211618", "jane@example.com"),
        FormItem::new("272465746", "Hello & welcome"),
    ]
}

const CONTACT_BODY: &str = "entry.1037971436=undefined&entry.64248411=Jane+Doe\
&entry.1959211618=jane%40example.com&entry.272465746=Hello+%26+welcome";

fn form_html() -> String {
    let question = |outer: u64, label: &str, id: u64| {
        format!(
            r#"<div class="Qr7Oae" role="listitem"><div jsmodel="CP1oW" data-params="%.@.[{outer},&quot;{label}&quot;,null,0,[[{id},null,0,null,[]]],null,null,null,null,null,[null,[]]],&quot;i1&quot;]"><span>{label}</span></div></div>"#
        )
    };
    format!(
        "<!DOCTYPE html><html><body><form action=\"formResponse\">{}{}</form></body></html>",
        question(1402911216, "Company", 1037971436),
        question(1111, "Name", 64248411),
    )
}

// ─────────────────────── submit ───────────────────────

#[tokio::test]
async fn submit_posts_encoded_entries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{FORM_PATH}/formResponse")))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(CONTACT_BODY))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let req = SubmitRequest::new(contact_items()).with_form_url(form_url(&server));
    let resp = client().submit(&req).await;

    assert!(resp.success, "unexpected failure: {:?}", resp.error);
    assert_eq!(resp.error, None);
}

#[tokio::test]
async fn submit_uses_configured_default_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{FORM_PATH}/formResponse")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        GformClient::new(ClientConfig::default().with_default_form_url(form_url(&server)))
            .unwrap();
    let req = SubmitRequest::new(contact_items()).with_form_url("default");

    assert!(client.submit(&req).await.success);
}

#[tokio::test]
async fn submit_without_any_form_url_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resp = client().submit(&SubmitRequest::new(contact_items())).await;

    assert!(!resp.success);
    assert!(resp.error.is_some());
}

async fn rejecting_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{FORM_PATH}/formResponse")))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn try_submit_non_2xx_is_rejected() {
    let server = rejecting_server().await;
    let req = SubmitRequest::new(contact_items()).with_form_url(form_url(&server));

    let err = client().try_submit(&req).await.unwrap_err();
    assert!(matches!(err, GformError::SubmitRejected { status: 400 }));
}

#[tokio::test]
async fn submit_non_2xx_is_failure_with_error() {
    let server = rejecting_server().await;
    let req = SubmitRequest::new(contact_items()).with_form_url(form_url(&server));

    let resp = client().submit(&req).await;
    assert!(!resp.success);
    assert_eq!(
        resp.error.as_deref(),
        Some("Failed to submit the form. (HTTP 400)")
    );
}

#[tokio::test]
async fn submit_skip_policy_omits_unset_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string("entry.64248411=Jane+Doe"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        GformClient::new(ClientConfig::default().with_unset_value(UnsetValue::Skip)).unwrap();
    let req = SubmitRequest::new(vec![
        FormItem::unset("1037971436"),
        FormItem::new("64248411", "Jane Doe"),
    ])
    .with_form_url(format!("{}/viewform?usp=sf_link", form_url(&server)));

    assert!(client.submit(&req).await.success);
}

#[tokio::test]
async fn submit_unreachable_endpoint_is_failure() {
    let req = SubmitRequest::new(contact_items())
        .with_form_url("http://127.0.0.1:1/forms/d/e/unreachable");
    let resp = client().submit(&req).await;

    assert!(!resp.success);
    assert!(resp.error.unwrap().starts_with("HTTP error"));
}

// ─────────────────────── fetch_entries ───────────────────────

#[tokio::test]
async fn fetch_entries_scrapes_ids_and_labels() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{FORM_PATH}/viewform")))
        .respond_with(ResponseTemplate::new(200).set_body_string(form_html()))
        .mount(&server)
        .await;

    let entries = client()
        .fetch_entries(&format!("{}/viewform", form_url(&server)))
        .await
        .unwrap();

    assert_eq!(
        entries,
        vec![
            FormEntry {
                id: "1037971436".to_string(),
                label: "Company".to_string(),
            },
            FormEntry {
                id: "64248411".to_string(),
                label: "Name".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn fetch_entries_page_without_questions_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let entries = client().fetch_entries(&form_url(&server)).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn fetch_entries_non_2xx_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client().fetch_entries(&form_url(&server)).await.unwrap_err();
    match &err {
        GformError::FetchFailed { status, reason } => {
            assert_eq!(*status, 404);
            assert_eq!(reason, "Not Found");
        }
        other => panic!("expected FetchFailed, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Failed to fetch form HTML: Not Found");
}

#[tokio::test]
async fn fetch_entries_rejects_malformed_url() {
    let err = client().fetch_entries("docs.google.com/forms").await.unwrap_err();
    assert!(matches!(err, GformError::InvalidFormUrl(_)));
}

#[tokio::test]
async fn fetch_entries_truncated_body_is_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let _ = socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 5000\r\n\r\n<html><div data-params=\"")
            .await;
        let _ = socket.shutdown().await;
    });

    let err = client()
        .fetch_entries(&format!("http://{addr}{FORM_PATH}/viewform"))
        .await
        .unwrap_err();
    assert!(matches!(err, GformError::Http(_)), "got {err:?}");
}
