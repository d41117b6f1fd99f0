//! A fake GitHub for integration tests.
//!
//! One axum server plays three roles on 127.0.0.1:
//! - the REST API (`/repos/...`): trees and rendered contents
//! - the web UI (`/web/{owner}/{repo}/blob/{branch}/...`) that "./" links point at
//! - arbitrary link targets (`/links/...`)

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use repo_link_guardian::{CheckConfig, GithubConfig, RepoCoordinate};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::Arc;

pub const TOKEN: &str = "test-token";
pub const OWNER: &str = "acme";
pub const REPO: &str = "docs";

/// What the fake repository contains.
#[derive(Debug, Clone, Default)]
pub struct FakeRepo {
    pub branch: String,
    /// (path, type) entries of the git tree, in listing order
    pub tree: Vec<(String, String)>,
    /// Rendered HTML per Markdown path
    pub rendered: HashMap<String, String>,
    /// Paths that exist on the web UI (targets of "./" links)
    pub web_paths: HashSet<String>,
}

impl FakeRepo {
    pub fn new(branch: &str) -> Self {
        Self {
            branch: branch.to_string(),
            ..Default::default()
        }
    }

    /// Adds a Markdown file with its rendered HTML
    pub fn markdown(mut self, path: &str, html: &str) -> Self {
        self.tree.push((path.to_string(), "blob".to_string()));
        self.rendered.insert(path.to_string(), html.to_string());
        self.web_paths.insert(path.to_string());
        self
    }

    /// Makes a non-Markdown path browsable on the web UI
    pub fn page(mut self, path: &str) -> Self {
        self.web_paths.insert(path.to_string());
        self
    }

    /// Adds a tree entry that has no rendered content behind it
    pub fn entry(mut self, path: &str, kind: &str) -> Self {
        self.tree.push((path.to_string(), kind.to_string()));
        if kind == "blob" {
            self.web_paths.insert(path.to_string());
        }
        self
    }
}

pub struct FakeGithub {
    pub addr: SocketAddr,
}

impl FakeGithub {
    /// Starts the server. `build` receives the base URL so HTML can link
    /// back to the fake link targets.
    pub async fn start(build: impl FnOnce(&str) -> FakeRepo) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        let repo = Arc::new(build(&format!("http://{}", addr)));

        let app = Router::new()
            .route("/repos/:owner/:repo/git/trees/*tree_ref", get(tree))
            .route("/repos/:owner/:repo/contents/*path", get(contents))
            .route("/web/:owner/:repo/blob/*rest", get(web_page))
            .route("/links/ok", get(|| async { "fine" }))
            .route("/links/dead", get(dead_link))
            .route("/links/server-error", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/links/needs-agent", get(needs_agent))
            .route("/links/slow", get(slow_link))
            .with_state(repo);

        tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

        Self { addr }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn github_config(&self) -> GithubConfig {
        GithubConfig::new(&self.url("/"), &self.url("/web"), TOKEN).expect("config")
    }

    pub fn check_config(&self) -> CheckConfig {
        CheckConfig::default()
    }
}

pub fn coordinate(branch: &str) -> RepoCoordinate {
    RepoCoordinate::new(OWNER, REPO, Some(branch))
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "Not Found", "documentation_url": "https://docs.github.com"})),
    )
        .into_response()
}

// Mimics GitHub: wrong token is 401, unknown repo or ref is 404
fn authorize(headers: &HeaderMap, accept: &str) -> Result<(), Response> {
    let expected = format!("Bearer {}", TOKEN);
    let auth = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok());
    if auth != Some(expected.as_str()) {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Bad credentials"})),
        )
            .into_response());
    }
    if headers.get(header::USER_AGENT).is_none() {
        return Err((StatusCode::FORBIDDEN, Json(json!({"message": "User-Agent required"}))).into_response());
    }
    let got = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok());
    if got != Some(accept) {
        return Err((
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(json!({"message": format!("unexpected Accept: {:?}", got)})),
        )
            .into_response());
    }
    Ok(())
}

async fn tree(
    State(repo): State<Arc<FakeRepo>>,
    Path((owner, name, tree_ref)): Path<(String, String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&headers, "application/vnd.github.v3+json") {
        return response;
    }
    if owner != OWNER || name != REPO || tree_ref != repo.branch {
        return not_found();
    }
    if query.get("recursive").map(String::as_str) != Some("1") {
        return (StatusCode::BAD_REQUEST, Json(json!({"message": "expected recursive=1"}))).into_response();
    }

    let entries: Vec<_> = repo
        .tree
        .iter()
        .map(|(path, kind)| json!({"path": path, "mode": "100644", "type": kind, "sha": "0000"}))
        .collect();
    Json(json!({"sha": "abc123", "tree": entries, "truncated": false})).into_response()
}

async fn contents(
    State(repo): State<Arc<FakeRepo>>,
    Path((owner, name, path)): Path<(String, String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&headers, "application/vnd.github.v3.html") {
        return response;
    }
    if owner != OWNER || name != REPO || query.get("ref") != Some(&repo.branch) {
        return not_found();
    }
    match repo.rendered.get(&path) {
        Some(html) => ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html.clone()).into_response(),
        None => not_found(),
    }
}

// `rest` is "{branch}/{path}"; branches may themselves contain slashes
async fn web_page(
    State(repo): State<Arc<FakeRepo>>,
    Path((owner, name, rest)): Path<(String, String, String)>,
) -> StatusCode {
    let path = rest
        .strip_prefix(repo.branch.as_str())
        .and_then(|p| p.strip_prefix('/'));
    let known = path.is_some_and(|p| repo.web_paths.contains(p));
    if owner == OWNER && name == REPO && known {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

// Link checks must never carry the GitHub token; if one does, answer 500
// so the test sees a different status than the expected 404.
async fn dead_link(headers: HeaderMap) -> StatusCode {
    if headers.contains_key(header::AUTHORIZATION) {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::NOT_FOUND
    }
}

// Like many CDNs: no User-Agent, no page
async fn needs_agent(headers: HeaderMap) -> StatusCode {
    if headers.contains_key(header::USER_AGENT) {
        StatusCode::OK
    } else {
        StatusCode::FORBIDDEN
    }
}

async fn slow_link() -> StatusCode {
    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
    StatusCode::OK
}
