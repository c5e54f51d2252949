//! Wire-level behavior: routing precedence, static file serving, MIME types,
//! traversal rejection and per-request fault containment.

use http_body_util::{BodyExt, Full};
use hyper::header::CONTENT_TYPE;
use hyper::{Method, Response, StatusCode};

mod common;

#[tokio::test]
async fn index_html_is_served_for_root_path() {
    let docroot = tempfile::tempdir().unwrap();
    std::fs::write(docroot.path().join("index.html"), "<h1>hi</h1>").unwrap();
    let server = common::start_server(docroot.path()).await;

    let response = common::client()
        .get(format!("{}/", common::base_url(&server)))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/html"
    );
    assert_eq!(response.text().await.unwrap(), "<h1>hi</h1>");

    server.stop().await;
}

#[tokio::test]
async fn missing_path_returns_404_not_found_body() {
    let docroot = tempfile::tempdir().unwrap();
    let server = common::start_server(docroot.path()).await;

    let response = common::client()
        .get(format!("{}/no/such/page", common::base_url(&server)))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/plain"
    );
    assert_eq!(response.text().await.unwrap(), "404 Not Found");

    server.stop().await;
}

#[tokio::test]
async fn routes_take_precedence_over_static_files() {
    let docroot = tempfile::tempdir().unwrap();
    std::fs::write(docroot.path().join("hello"), "from-disk").unwrap();
    let server = common::start_server(docroot.path()).await;

    server.add_route("/hello", Method::GET, |_req| async {
        Response::new(Full::new("from-handler".into()))
    });

    let body = common::client()
        .get(format!("{}/hello", common::base_url(&server)))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "from-handler");

    server.stop().await;
}

#[tokio::test]
async fn reregistration_last_writer_wins() {
    let docroot = tempfile::tempdir().unwrap();
    let server = common::start_server(docroot.path()).await;

    server.add_route("/version", Method::GET, |_req| async {
        Response::new(Full::new("first".into()))
    });
    server.add_route("/version", Method::GET, |_req| async {
        Response::new(Full::new("second".into()))
    });

    let body = common::client()
        .get(format!("{}/version", common::base_url(&server)))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "second");

    server.stop().await;
}

#[tokio::test]
async fn unmatched_non_get_returns_404() {
    let docroot = tempfile::tempdir().unwrap();
    std::fs::write(docroot.path().join("page.html"), "static").unwrap();
    let server = common::start_server(docroot.path()).await;

    // Static fallback is GET-only: even an existing file is a 404 over POST.
    let response = common::client()
        .post(format!("{}/page.html", common::base_url(&server)))
        .body("x")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "404 Not Found");

    server.stop().await;
}

#[tokio::test]
async fn traversal_outside_document_root_is_rejected() {
    let base = tempfile::tempdir().unwrap();
    let docroot = base.path().join("site");
    std::fs::create_dir(&docroot).unwrap();
    std::fs::write(base.path().join("secret.txt"), "top secret").unwrap();
    let server = common::start_server(&docroot).await;

    for path in ["/../secret.txt", "/a/../../secret.txt", "/../../secret.txt"] {
        let response = common::raw_get(&server, path).await;
        assert!(
            !response.contains("top secret"),
            "out-of-root file served for {path}"
        );
        assert!(response.starts_with("HTTP/1.1 404"), "expected 404 for {path}");
    }

    server.stop().await;
}

#[tokio::test]
async fn mime_types_follow_extension() {
    let docroot = tempfile::tempdir().unwrap();
    std::fs::write(docroot.path().join("data.json"), "{}").unwrap();
    std::fs::write(docroot.path().join("blob.xyz"), "?").unwrap();
    let server = common::start_server(docroot.path()).await;
    let base = common::base_url(&server);
    let client = common::client();

    let json = client.get(format!("{base}/data.json")).send().await.unwrap();
    assert_eq!(json.headers().get(CONTENT_TYPE).unwrap(), "application/json");

    let unknown = client.get(format!("{base}/blob.xyz")).send().await.unwrap();
    assert_eq!(
        unknown.headers().get(CONTENT_TYPE).unwrap(),
        "application/octet-stream"
    );

    server.stop().await;
}

#[tokio::test]
async fn panicking_handler_returns_500_and_server_survives() {
    let docroot = tempfile::tempdir().unwrap();
    std::fs::write(docroot.path().join("ok.txt"), "still here").unwrap();
    let server = common::start_server(docroot.path()).await;

    server.add_route("/boom", Method::GET, |_req| async { panic!("handler bug") });

    let base = common::base_url(&server);
    let client = common::client();

    let response = client.get(format!("{base}/boom")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text().await.unwrap();
    assert!(!body.contains("handler bug"), "panic detail leaked to client");

    // The fault stayed inside that request.
    assert!(server.is_running());
    let after = client.get(format!("{base}/ok.txt")).send().await.unwrap();
    assert_eq!(after.status(), StatusCode::OK);
    assert_eq!(after.text().await.unwrap(), "still here");

    server.stop().await;
}

#[tokio::test]
async fn post_handler_response_is_received_verbatim() {
    let docroot = tempfile::tempdir().unwrap();
    let server = common::start_server(docroot.path()).await;

    server.add_route("/name_form", Method::POST, |req| async {
        let body = req.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&body).into_owned();
        let name = text.rsplit('=').next().unwrap_or("").to_string();
        Response::new(Full::new(format!("Hello {name}").into()))
    });

    let response = common::client()
        .post(format!("{}/name_form", common::base_url(&server)))
        .body("name=Ada")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Hello Ada");

    server.stop().await;
}

#[tokio::test]
async fn routes_can_be_added_while_running() {
    let docroot = tempfile::tempdir().unwrap();
    let server = common::start_server(docroot.path()).await;
    let base = common::base_url(&server);
    let client = common::client();

    let before = client.get(format!("{base}/live")).send().await.unwrap();
    assert_eq!(before.status(), StatusCode::NOT_FOUND);

    server.add_route("/live", Method::GET, |_req| async {
        Response::new(Full::new("registered late".into()))
    });

    let after = client.get(format!("{base}/live")).send().await.unwrap();
    assert_eq!(after.status(), StatusCode::OK);
    assert_eq!(after.text().await.unwrap(), "registered late");

    server.stop().await;
}
