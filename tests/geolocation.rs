// ABOUTME: Integration tests for the HTTP geolocation client.
// ABOUTME: Runs against a local one-shot HTTP responder instead of the real service.

mod support;

use dockip::status::{GeoLocator, HttpGeoLocator, Location};
use dockip::types::PublicIp;
use std::time::Duration;

fn ip(value: &str) -> PublicIp {
    PublicIp::parse(value).expect("valid IP")
}

#[tokio::test]
async fn success_response_gives_country_and_city() {
    support::init_tracing();
    let (base_url, request) = support::serve_once(
        "200 OK",
        r#"{"status":"success","country":"US","city":"Ashburn","query":"203.0.113.7"}"#,
    )
    .await;

    let locator = HttpGeoLocator::new(base_url, Duration::from_secs(5)).unwrap();
    let location = locator.locate(&ip("203.0.113.7")).await;

    assert_eq!(location.to_string(), "US, Ashburn");
    assert_eq!(request.await.unwrap(), "GET /json/203.0.113.7 HTTP/1.1");
}

#[tokio::test]
async fn fail_status_is_unknown() {
    let (base_url, _request) = support::serve_once(
        "200 OK",
        r#"{"status":"fail","message":"reserved range","query":"10.1.2.3"}"#,
    )
    .await;

    let locator = HttpGeoLocator::new(base_url, Duration::from_secs(5)).unwrap();
    let location = locator.locate(&ip("10.1.2.3")).await;

    assert_eq!(location, Location::Unknown);
}

#[tokio::test]
async fn malformed_body_is_lookup_failed() {
    let (base_url, _request) = support::serve_once("200 OK", "not json").await;

    let locator = HttpGeoLocator::new(base_url, Duration::from_secs(5)).unwrap();
    let location = locator.locate(&ip("203.0.113.7")).await;

    assert_eq!(location, Location::LookupFailed);
}

#[tokio::test]
async fn server_error_is_lookup_failed() {
    let (base_url, _request) =
        support::serve_once("503 Service Unavailable", r#"{"status":"success"}"#).await;

    let locator = HttpGeoLocator::new(base_url, Duration::from_secs(5)).unwrap();
    let location = locator.locate(&ip("203.0.113.7")).await;

    assert_eq!(location.to_string(), "Lookup Failed");
}

#[tokio::test]
async fn unreachable_service_is_lookup_failed() {
    // Bind then drop a listener so the port is known to be closed.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let locator =
        HttpGeoLocator::new(format!("http://{addr}/json/"), Duration::from_secs(2)).unwrap();
    let location = locator.locate(&ip("203.0.113.7")).await;

    assert_eq!(location, Location::LookupFailed);
}
