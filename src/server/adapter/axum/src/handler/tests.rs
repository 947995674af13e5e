/* src/server/adapter/axum/src/handler/tests.rs */

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use homepage_server::engine::ConfigurationPage;
use homepage_server::shell::{DEFAULT_HOMEPAGE, INDEX_SHELL};
use homepage_server::{ServerOptions, SiteConfig};
use tower::ServiceExt;

use super::*;

fn site_config(default_page: Option<&str>) -> SiteConfig {
  SiteConfig {
    default_page: default_page.map(String::from),
    pages: vec![
      ConfigurationPage::from_json(
        r#"{"path":"/home","title":"Home","links":[{"title":"Site","url":"https://example.com"}]}"#,
      )
      .unwrap(),
      ConfigurationPage { path: "/".into(), title: Some("Root".into()), ..Default::default() },
    ],
  }
}

fn router(default_page: Option<&str>, options: ServerOptions) -> Router {
  build_router(Site::new(site_config(default_page), options))
}

async fn get(router: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
  let resp = router.oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap();
  let status = resp.status();
  let headers = resp.headers().clone();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn json_page_is_served() {
  let (status, headers, body) = get(router(None, ServerOptions::default()), "/home.json").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(headers[header::CONTENT_TYPE], "application/json");
  let page: ConfigurationPage = serde_json::from_str(&body).unwrap();
  assert_eq!(page.title.as_deref(), Some("Home"));
  assert_eq!(page.links()[0].hostname(), "example.com");
}

#[tokio::test]
async fn root_json_page_is_served() {
  let (status, _, body) = get(router(None, ServerOptions::default()), "/.json").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains(r#""title":"Root""#));
}

#[tokio::test]
async fn unknown_json_page_is_404_with_text_body() {
  let (status, _, body) = get(router(None, ServerOptions::default()), "/nope.json").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body, "page not found: /nope");
}

#[tokio::test]
async fn document_paths_get_the_shell() {
  for uri in ["/home", "/nope", "/a/b/c"] {
    let (status, headers, body) = get(router(None, ServerOptions::default()), uri).await;
    assert_eq!(status, StatusCode::OK, "{uri}");
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert_eq!(body, INDEX_SHELL);
  }
}

#[tokio::test]
async fn home_redirects_to_default_page() {
  let (status, headers, _) = get(router(Some("/home"), ServerOptions::default()), "/").await;
  assert_eq!(status, StatusCode::FOUND);
  assert_eq!(headers[header::LOCATION], "/home");
}

#[tokio::test]
async fn home_serves_default_text() {
  let (status, _, body) = get(router(None, ServerOptions::default()), "/").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, DEFAULT_HOMEPAGE);
}

#[tokio::test]
async fn home_falls_through_when_default_text_disabled() {
  let options = ServerOptions { default_homepage: false, ..Default::default() };
  let (status, _, body) = get(router(None, options), "/").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, INDEX_SHELL);
}

#[tokio::test]
async fn dist_assets_and_index_are_served() {
  let dist = tempfile::tempdir().unwrap();
  std::fs::write(dist.path().join("index.html"), "<html>built shell</html>").unwrap();
  std::fs::write(dist.path().join("app.js"), "console.log(1)").unwrap();
  let options = ServerOptions { dist_dir: Some(dist.path().to_path_buf()), ..Default::default() };

  let (status, headers, body) = get(router(None, options.clone()), "/app.js").await;
  assert_eq!(status, StatusCode::OK);
  assert!(headers[header::CONTENT_TYPE].to_str().unwrap().contains("javascript"));
  assert_eq!(body, "console.log(1)");

  let (status, _, body) = get(router(None, options.clone()), "/home").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, "<html>built shell</html>");

  let (status, _, body) = get(router(None, options), "/home.json").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains(r#""path":"/home""#));
}

#[tokio::test]
async fn cors_is_permissive_outside_production() {
  let request = || {
    Request::get("/home.json").header(header::ORIGIN, "http://localhost:5173").body(Body::empty()).unwrap()
  };

  let resp = router(None, ServerOptions::default()).oneshot(request()).await.unwrap();
  assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

  let production = ServerOptions { production: true, ..Default::default() };
  let resp = router(None, production).oneshot(request()).await.unwrap();
  assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
