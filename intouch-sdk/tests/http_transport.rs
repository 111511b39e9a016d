#![cfg(feature = "client")]

use httpmock::prelude::*;
use intouch_sdk::client::{ClientError, Intouch, TransportError};
use intouch_sdk::config::{AuthScheme, Credentials, GatewayUrls};
use intouch_sdk::objects::{AdditionalInfos, CashinRequest, CashoutRequest, TransactionStatus};
use rust_decimal::Decimal;
use serde_json::json;

fn credentials() -> Credentials {
    Credentials {
        agent_code: "AGENT1".into(),
        partner_id: "CI8724".into(),
        partner_name: "Hub Social".into(),
        login_api: "0708517414".into(),
        password_api: "p&ss=1".into(),
        username: "user".into(),
        password: "pass".into(),
    }
}

fn client(server: &MockServer, auth: AuthScheme) -> Intouch {
    Intouch::builder()
        .credentials(credentials())
        .urls(GatewayUrls::single(server.base_url()))
        .auth_scheme(auth)
        .build()
        .unwrap()
}

fn cashin_request() -> CashinRequest {
    CashinRequest {
        recipient_phone_number: "76537327".into(),
        amount: Decimal::from(500),
        partner_transaction_id: "T1".into(),
        call_back_url: "https://example.com".into(),
    }
}

fn cashout_request(amount: i64) -> CashoutRequest<AdditionalInfos> {
    CashoutRequest {
        id_from_client: "C1".into(),
        amount: Decimal::from(amount),
        callback: "https://callbackurl.com".into(),
        recipient_number: "0708517414".into(),
        additional_infos: AdditionalInfos {
            recipient_email: "tester@gmail.com".into(),
            recipient_first_name: "Testeur".into(),
            recipient_last_name: "lastname".into(),
            destinataire: "0708517414".into(),
        },
    }
}

#[tokio::test]
async fn cashin_posts_json_with_basic_auth() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/sec/AGENT1/cashin")
            .header("authorization", "Basic dXNlcjpwYXNz")
            .header("content-type", "application/json")
            .json_body(json!({
                "service_id": "CASHINOMCIPART",
                "recipient_phone_number": "76537327",
                "amount": 500,
                "partner_id": "CI8724",
                "partner_transaction_id": "T1",
                "login_api": "0708517414",
                "password_api": "p&ss=1",
                "call_back_url": "https://example.com",
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "status": "SUCCESSFUL", "idFromGU": "GU-1" }));
    });

    let response = client(&server, AuthScheme::Basic)
        .cashin()
        .om_ci(cashin_request())
        .await
        .unwrap();

    assert_eq!(response.status, Some(TransactionStatus::Successful));
    assert_eq!(response.id_from_gu.as_deref(), Some("GU-1"));
    mock.assert();
}

#[tokio::test]
async fn cashout_puts_with_encoded_agent_credentials() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/touchpayapi/v1/AGENT1/transaction")
            .query_param("loginAgent", "0708517414")
            .query_param("passwordAgent", "p&ss=1");
        then.status(200).json_body(json!({
            "status": "PENDING",
            "serviceCode": "PAIEMENTMARCHAND_MTN_CI",
        }));
    });

    let response = client(&server, AuthScheme::Basic)
        .cashout()
        .mtn_ci(cashout_request(100))
        .await
        .unwrap();

    assert_eq!(response.status, Some(TransactionStatus::Pending));
    mock.assert();
}

#[tokio::test]
async fn invalid_request_is_never_sent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT);
        then.status(200).json_body(json!({ "status": "SUCCESSFUL" }));
    });

    let err = client(&server, AuthScheme::Basic)
        .cashout()
        .moov_ci(cashout_request(0))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Request(_)), "{err}");
    mock.assert_calls(0);
}

#[tokio::test]
async fn non_json_body_is_a_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/sec/AGENT1/get_balance");
        then.status(200).body("<html>maintenance</html>");
    });

    let err = client(&server, AuthScheme::Basic)
        .balance()
        .get()
        .await
        .unwrap_err();

    assert!(
        matches!(err, ClientError::Transport(TransportError::Json(_))),
        "{err}"
    );
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/sec/AGENT1/get_balance");
        then.status(500).body("boom");
    });

    let err = client(&server, AuthScheme::Basic)
        .balance()
        .get()
        .await
        .unwrap_err();

    match err {
        ClientError::Transport(TransportError::Api { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn error_reply_with_message_is_returned_as_envelope() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/sec/AGENT1/cashin");
        then.status(400)
            .header("content-type", "application/json")
            .json_body(json!({ "message": "Solde insuffisant" }));
    });

    let response = client(&server, AuthScheme::Basic)
        .cashin()
        .mtn_ci(cashin_request())
        .await
        .unwrap();

    assert!(!response.has_status());
    assert_eq!(response.message.as_deref(), Some("Solde insuffisant"));
}

#[tokio::test]
async fn error_reply_without_envelope_keeps_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/sec/AGENT1/get_balance");
        then.status(503).json_body(json!({ "error": "maintenance" }));
    });

    let err = client(&server, AuthScheme::Basic)
        .balance()
        .get()
        .await
        .unwrap_err();

    match err {
        ClientError::Transport(TransportError::Gateway { status, body }) => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, json!({ "error": "maintenance" }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn rejected_credentials_are_unauthorized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/sec/AGENT1/get_balance");
        then.status(401).body("bad credentials");
    });

    let err = client(&server, AuthScheme::Basic)
        .balance()
        .get()
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            ClientError::Transport(TransportError::Unauthorized { ref body }) if body == "bad credentials"
        ),
        "{err}"
    );
}

#[tokio::test]
async fn digest_challenge_is_answered_once_and_cached() {
    let server = MockServer::start();
    let challenge = server.mock(|when, then| {
        when.method(POST)
            .path("/sec/AGENT1/get_balance")
            .header_missing("authorization");
        then.status(401).header(
            "www-authenticate",
            r#"Digest realm="intouch", qop="auth", algorithm=SHA-256, nonce="abc123", opaque="xyz""#,
        );
    });
    let answered = server.mock(|when, then| {
        when.method(POST)
            .path("/sec/AGENT1/get_balance")
            .header_exists("authorization");
        then.status(200).json_body(json!({ "amount": 2500 }));
    });

    let intouch = client(&server, AuthScheme::Digest);
    let first = intouch.balance().get().await.unwrap();
    let second = intouch.balance().get().await.unwrap();

    assert_eq!(first.amount, Some(Decimal::from(2500)));
    assert_eq!(second.amount, Some(Decimal::from(2500)));
    challenge.assert_calls(1);
    answered.assert_calls(2);
}

#[tokio::test]
async fn digest_challenge_without_algorithm_uses_md5() {
    let server = MockServer::start();
    let challenge = server.mock(|when, then| {
        when.method(POST)
            .path("/sec/AGENT1/get_balance")
            .header_missing("authorization");
        then.status(401).header(
            "www-authenticate",
            r#"Digest realm="intouch", qop="auth", nonce="abc123""#,
        );
    });
    let answered = server.mock(|when, then| {
        when.method(POST)
            .path("/sec/AGENT1/get_balance")
            .header_exists("authorization");
        then.status(200).json_body(json!({ "amount": 10 }));
    });

    let response = client(&server, AuthScheme::Digest)
        .balance()
        .get()
        .await
        .unwrap();

    assert_eq!(response.amount, Some(Decimal::from(10)));
    challenge.assert_calls(1);
    answered.assert_calls(1);
}

#[tokio::test]
async fn digest_without_challenge_header_is_unauthorized() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/sec/AGENT1/get_balance");
        then.status(401);
    });

    let err = client(&server, AuthScheme::Digest)
        .balance()
        .get()
        .await
        .unwrap_err();

    assert!(
        matches!(err, ClientError::Transport(TransportError::Unauthorized { .. })),
        "{err}"
    );
    mock.assert_calls(1);
}
