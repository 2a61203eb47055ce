//! Integration tests for the iss_spotter pipeline.
//!
//! These tests verify the library API using a mock HTTP server.
//! They do not make real network requests, ensuring tests are fast and
//! reliable. With the library + binary structure, the full pipeline can be
//! exercised by calling `run_lookup()` directly with all three endpoints
//! pointed at the mock server.

use httptest::{matchers::*, responders::*, Expectation, Server};

use iss_spotter::{run_lookup, Config};

fn config_for(server: &Server) -> Config {
    let base = format!("http://{}", server.addr());
    Config {
        ip_endpoint: base.clone(),
        geo_endpoint: base.clone(),
        flyover_endpoint: base,
        ..Config::default()
    }
}

#[tokio::test]
async fn test_full_pipeline() {
    let server = Server::run();

    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/"),
            request::query(url_decoded(contains(("format", "json")))),
        ])
        .respond_with(status_code(200).body(r#"{"ip":"162.245.144.188"}"#)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/162.245.144.188")).respond_with(
            status_code(200)
                .body(r#"{"success":true,"latitude":49.2827,"longitude":-123.1207}"#),
        ),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/json/"),
            request::query(url_decoded(contains(("lat", "49.2827")))),
            request::query(url_decoded(contains(("lon", "-123.1207")))),
        ])
        .respond_with(
            status_code(200)
                .body(r#"{"response":[{"risetime":1700000000,"duration":645}]}"#),
        ),
    );

    let report = run_lookup(config_for(&server))
        .await
        .expect("pipeline should succeed");

    assert_eq!(report.ip, "162.245.144.188");
    assert_eq!(report.coords.latitude, 49.2827);
    assert_eq!(report.coords.longitude, -123.1207);
    assert_eq!(report.passes.len(), 1);
    assert_eq!(report.passes[0].risetime, 1700000000);
    assert_eq!(report.passes[0].duration, 645);
}

#[tokio::test]
async fn test_pipeline_halts_on_first_error() {
    // Only the IP endpoint is set up; it fails, and the later stages must
    // never be contacted (the mock server would panic on an unexpected
    // request when dropped)
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(500).body("oops")),
    );

    let err = run_lookup(config_for(&server))
        .await
        .expect_err("pipeline should fail at stage 1");
    let msg = format!("{err:#}");
    assert!(msg.contains("500"), "error should surface the status: {msg}");
}

#[tokio::test]
async fn test_pipeline_with_provided_ip_skips_lookup() {
    let server = Server::run();

    // No expectation for "/" with format=json: stage 1 must be skipped
    server.expect(
        Expectation::matching(request::method_path("GET", "/10.0.0.1")).respond_with(
            status_code(200).body(r#"{"success":true,"latitude":1.5,"longitude":2.5}"#),
        ),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/json/")).respond_with(
            status_code(200).body(r#"{"response":[]}"#),
        ),
    );

    let config = Config {
        ip: Some("10.0.0.1".to_string()),
        ..config_for(&server)
    };

    let report = run_lookup(config).await.expect("pipeline should succeed");
    assert_eq!(report.ip, "10.0.0.1");
    assert!(report.passes.is_empty());
}

#[tokio::test]
async fn test_pipeline_surfaces_geolocation_rejection() {
    let server = Server::run();

    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/"),
            request::query(url_decoded(contains(("format", "json")))),
        ])
        .respond_with(status_code(200).body(r#"{"ip":"bad"}"#)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/bad")).respond_with(
            status_code(200)
                .body(r#"{"success":false,"message":"invalid IP address","ip":"bad"}"#),
        ),
    );

    let err = run_lookup(config_for(&server))
        .await
        .expect_err("pipeline should fail at stage 2");
    let msg = format!("{err:#}");
    assert!(msg.contains("invalid IP address"), "got: {msg}");
    assert!(msg.contains("bad"), "got: {msg}");
}
