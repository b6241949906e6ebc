#![cfg(feature = "registry")]

use httpmock::prelude::*;
use tincheck::registry::*;
use tincheck::{AbnLookup, LookupFailure, LookupOutcome};

const ABN: &str = "10120000004";

const GST_REGISTERED: &str = "<response><goodsAndServicesTax>true</goodsAndServicesTax>\
    <organisationName>Test Business</organisationName>\
    <address><stateCode>NSW</stateCode><postcode>2000</postcode></address></response>";

const NOT_GST_REGISTERED: &str =
    "<response><goodsAndServicesTax>false</goodsAndServicesTax></response>";

fn client_for(server: &MockServer) -> AbnRegistryClient {
    AbnRegistryClient::new(&RegistryConfig::new(server.base_url())).unwrap()
}

fn stub<'a>(server: &'a MockServer, status: u16, body: &str) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path("/queryABN").query_param("abn", ABN);
        then.status(status).body(body);
    })
}

// ---------------------------------------------------------------------------
// Lookup classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gst_registered_business() {
    let server = MockServer::start();
    let mock = stub(&server, 200, GST_REGISTERED);

    let outcome = client_for(&server).lookup(ABN).await;

    mock.assert();
    let LookupOutcome::Registered(reg) = outcome else {
        panic!("expected registration, got {outcome:?}");
    };
    assert_eq!(reg.name.as_deref(), Some("Test Business"));
    assert_eq!(reg.address.as_deref(), Some("NSW, 2000"));
}

#[tokio::test]
async fn not_gst_registered() {
    let server = MockServer::start();
    stub(&server, 200, NOT_GST_REGISTERED);

    let outcome = client_for(&server).lookup(ABN).await;
    assert_eq!(outcome, LookupOutcome::Rejected(LookupFailure::NotGstRegistered));
}

#[tokio::test]
async fn not_found_means_not_registered() {
    let server = MockServer::start();
    stub(&server, 404, "");

    let outcome = client_for(&server).lookup(ABN).await;
    assert_eq!(outcome, LookupOutcome::Rejected(LookupFailure::NotRegistered));
}

#[tokio::test]
async fn server_error_means_unreachable() {
    let server = MockServer::start();
    stub(&server, 500, "");

    let outcome = client_for(&server).lookup(ABN).await;
    assert_eq!(outcome, LookupOutcome::Rejected(LookupFailure::Unavailable));
}

#[tokio::test]
async fn bad_gateway_is_unexpected() {
    let server = MockServer::start();
    stub(&server, 502, "");

    let outcome = client_for(&server).lookup(ABN).await;
    assert_eq!(outcome, LookupOutcome::Rejected(LookupFailure::Unexpected));
}

#[tokio::test]
async fn client_error_is_unexpected() {
    let server = MockServer::start();
    stub(&server, 403, "");

    let outcome = client_for(&server).lookup(ABN).await;
    assert_eq!(outcome, LookupOutcome::Rejected(LookupFailure::Unexpected));
}

#[tokio::test]
async fn redirect_is_not_followed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/queryABN");
        then.status(302).header("location", "/elsewhere");
    });

    let outcome = client_for(&server).lookup(ABN).await;
    assert_eq!(outcome, LookupOutcome::Rejected(LookupFailure::Unexpected));
}

#[tokio::test]
async fn malformed_document_is_unexpected() {
    let server = MockServer::start();
    stub(&server, 200, "<response><goodsAndServicesTax>true</response>");

    let outcome = client_for(&server).lookup(ABN).await;
    assert_eq!(outcome, LookupOutcome::Rejected(LookupFailure::Unexpected));
}

#[tokio::test]
async fn truncated_document_is_unexpected() {
    let server = MockServer::start();
    stub(&server, 200, "<response><goodsAndServicesTax>true</goodsAndServicesTax>");

    let outcome = client_for(&server).lookup(ABN).await;
    assert_eq!(outcome, LookupOutcome::Rejected(LookupFailure::Unexpected));
}

#[tokio::test]
async fn validator_rejects_truncated_registration() {
    let server = MockServer::start();
    stub(&server, 200, "<response><goodsAndServicesTax>true");
    let validator = TinValidator::from_config(&RegistryConfig::new(server.base_url())).unwrap();

    let result = validator.validate(ABN, "AU").await;

    assert!(!result.valid);
    assert_eq!(result.errors, ["Unexpected error during validation"]);
}

#[tokio::test]
async fn cdata_organisation_name() {
    let server = MockServer::start();
    stub(
        &server,
        200,
        "<response><goodsAndServicesTax>true</goodsAndServicesTax>\
         <organisationName><![CDATA[A & B Pty]]></organisationName></response>",
    );

    let outcome = client_for(&server).lookup(ABN).await;
    let LookupOutcome::Registered(reg) = outcome else {
        panic!("expected registration, got {outcome:?}");
    };
    assert_eq!(reg.name.as_deref(), Some("A & B Pty"));
}

#[tokio::test]
async fn connection_refused_means_unreachable() {
    // port 9 (discard) on localhost is not served in test environments
    let client = AbnRegistryClient::new(&RegistryConfig::new("http://127.0.0.1:9")).unwrap();
    let outcome = client.lookup(ABN).await;
    assert_eq!(outcome, LookupOutcome::Rejected(LookupFailure::Unavailable));
}

// ---------------------------------------------------------------------------
// Validator wired to the HTTP client
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validator_accepts_registered_abn() {
    let server = MockServer::start();
    let mock = stub(&server, 200, GST_REGISTERED);
    let validator = TinValidator::from_config(&RegistryConfig::new(server.base_url())).unwrap();

    let result = validator.validate("10 120 000 004", "AU").await;

    assert_eq!(mock.calls(), 1);
    assert!(result.valid);
    assert_eq!(result.tin_type.as_deref(), Some("au_abn"));
    assert_eq!(result.formatted_tin.as_deref(), Some("10 120 000 004"));
    let reg = result.business_registration.unwrap();
    assert_eq!(reg.name.as_deref(), Some("Test Business"));
    assert_eq!(reg.address.as_deref(), Some("NSW, 2000"));
}

#[tokio::test]
async fn validator_reports_registry_message() {
    let server = MockServer::start();
    stub(&server, 404, "");
    let validator = TinValidator::from_config(&RegistryConfig::new(server.base_url())).unwrap();

    let result = validator.validate(ABN, "AU").await;

    assert!(!result.valid);
    assert_eq!(result.errors, ["Business is not registered"]);
    assert!(result.formatted_tin.is_none());
    assert!(result.tin_type.is_none());
}

#[tokio::test]
async fn validator_skips_registry_on_bad_checksum() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/queryABN");
        then.status(200).body(GST_REGISTERED);
    });
    let validator = TinValidator::from_config(&RegistryConfig::new(server.base_url())).unwrap();

    let result = validator.validate("10120000005", "AU").await;

    assert_eq!(mock.calls(), 0);
    assert!(!result.valid);
    assert_eq!(result.errors, ["TIN format does not match"]);
}

#[tokio::test]
async fn validator_never_calls_registry_for_other_formats() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/queryABN");
        then.status(500);
    });
    let validator = TinValidator::from_config(&RegistryConfig::new(server.base_url())).unwrap();

    assert!(validator.validate("123 456 789", "AU").await.valid);
    assert!(validator.validate("123456789", "CA").await.valid);
    assert!(validator.validate("12ABCDEFGHI01N1", "IN").await.valid);
    assert_eq!(mock.calls(), 0);
}
