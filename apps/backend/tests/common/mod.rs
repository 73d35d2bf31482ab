#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a response body as UTF-8 text.
pub async fn read_text(resp: ServiceResponse<BoxBody>) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("body should be UTF-8")
}

/// Read a response body as JSON.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("body should be JSON")
}

/// `src` attribute of every `<img>` inside the `#cards-grid` block.
pub fn grid_image_sources(html: &str) -> Vec<String> {
    let start = html
        .find("id=\"cards-grid\"")
        .expect("page should contain #cards-grid");
    let end = html[start..]
        .find("id=\"card-info\"")
        .map(|i| start + i)
        .unwrap_or(html.len());

    html[start..end]
        .split("<img src=\"")
        .skip(1)
        .map(|rest| rest.split('"').next().unwrap_or_default().to_string())
        .collect()
}

/// Inner markup of the `#card-info` block.
pub fn card_info_block(html: &str) -> &str {
    let start = html
        .find("id=\"card-info\"")
        .expect("page should contain #card-info");
    &html[start..]
}
