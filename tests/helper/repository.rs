//! Mock repository servers
//!
//! Both helpers register mockito mocks and return them so tests can keep
//! them alive and assert on them.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

/// Render an nginx-style autoindex page
pub fn directory_page(entries: &[&str]) -> String {
    let mut html = String::from("<html><head><title>Index</title></head><body><pre>\n");
    html.push_str("<a href=\"../\">../</a>\n");
    for entry in entries {
        html.push_str(&format!("<a href=\"{entry}\">{entry}</a>\n"));
    }
    html.push_str("</pre><a href=\"?C=M;O=A\">sort</a></body></html>\n");
    html
}

/// Serve a directory tree as HTML listings
///
/// Each `(path, entries)` pair becomes one page; directory entries end with `/`.
pub async fn mock_html_tree(server: &mut ServerGuard, pages: &[(&str, &[&str])]) -> Vec<Mock> {
    let mut mocks = Vec::with_capacity(pages.len());
    for (path, entries) in pages {
        let mock = server
            .mock("GET", *path)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(directory_page(entries))
            .create_async()
            .await;
        mocks.push(mock);
    }
    mocks
}

/// Serve an Artifactory storage API file list for `repo`
///
/// `files` are paths relative to the repository root, without a leading `/`.
pub async fn mock_storage_api(server: &mut ServerGuard, repo: &str, files: &[&str]) -> Mock {
    let listing: Vec<_> = files
        .iter()
        .map(|file| json!({ "uri": format!("/{file}"), "size": 100, "folder": false }))
        .collect();

    server
        .mock("GET", format!("/artifactory/api/storage/{repo}").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("deep".into(), "1".into()),
            Matcher::UrlEncoded("listFolders".into(), "0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "uri": format!("{}/artifactory/api/storage/{repo}", server.url()),
                "created": "2024-01-01T00:00:00.000Z",
                "files": listing,
            })
            .to_string(),
        )
        .create_async()
        .await
}
