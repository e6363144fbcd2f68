use std::time::Duration;

/// Build a reqwest client with sane defaults. One outbound call per tool
/// invocation; the connection is scoped to that call, released on both
/// success and failure by reqwest's own pooling.
pub fn make_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(3))
        .timeout(Duration::from_secs(10))
        .build()
        .expect("reqwest client")
}
