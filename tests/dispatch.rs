mod common;

use common::{authorized_client_for, client_for};
use serde_json::json;
use surveymonkey::{ApiError, Client, Credentials, Error, Reply, TokenGrant};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn get_carries_bearer_token_and_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/users/me"))
        .and(header("Authorization", "Bearer tok123"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "username": "pollster"})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = authorized_client_for(&server).get_authenticated_user().await.unwrap();

    assert_eq!(reply, Reply::Json(json!({"id": "1", "username": "pollster"})));
}

#[tokio::test]
async fn raw_and_structured_tokens_send_the_same_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/surveys"))
        .and(header("Authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(2)
        .mount(&server)
        .await;

    let grants: [TokenGrant; 2] = [
        "tok123".into(),
        json!({"access_token": "tok123", "token_type": "bearer"}).into(),
    ];
    for grant in grants {
        let mut client = client_for(&server);
        client.set_access_token(grant).unwrap();
        client.get_surveys().await.unwrap();
    }
}

#[tokio::test]
async fn write_payload_is_forwarded_verbatim() {
    let server = MockServer::start().await;
    let fields = json!({
        "title": "Renamed",
        "custom_variables": {"region": "emea"},
        "unknown_to_us": [1, 2, 3]
    });
    Mock::given(method("PATCH"))
        .and(path("/v3/surveys/42"))
        .and(body_json(fields.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "42", "title": "Renamed"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = authorized_client_for(&server);
    let reply = client
        .modify_survey("42", fields.as_object().unwrap())
        .await
        .unwrap();

    assert_eq!(reply.json().unwrap()["title"], "Renamed");
}

#[tokio::test]
async fn error_envelope_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/surveys/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": "1020", "message": "Requested survey does not exist"})),
        )
        .mount(&server)
        .await;

    let err = authorized_client_for(&server)
        .get_survey("missing")
        .await
        .unwrap_err();

    match err {
        Error::Api(ApiError::ResourceNotFound(message)) => {
            assert_eq!(message, "Requested survey does not exist")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn error_envelope_beats_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/groups"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "1040", "message": "Slow down"})),
        )
        .mount(&server)
        .await;

    let err = authorized_client_for(&server).get_groups().await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::RateLimitReached(_))));
}

#[tokio::test]
async fn delete_returns_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v3/webhooks/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let reply = authorized_client_for(&server).delete_webhook("7").await.unwrap();

    assert!(reply.is_no_content());
}

#[tokio::test]
async fn plain_text_failure_is_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/survey_templates"))
        .respond_with(ResponseTemplate::new(503).set_body_string("error: maintenance"))
        .mount(&server)
        .await;

    let err = authorized_client_for(&server)
        .get_survey_templates()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Api(ApiError::Unknown {
            code: None,
            message: None
        })
    ));
}

#[tokio::test]
async fn bulk_responses_pass_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/surveys/42/responses/bulk"))
        .and(query_param("per_page", "100"))
        .and(query_param("status", "completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "per_page": 100})))
        .expect(1)
        .mount(&server)
        .await;

    authorized_client_for(&server)
        .get_responses_bulk("42", &[("per_page", "100"), ("status", "completed")])
        .await
        .unwrap();
}

#[tokio::test]
async fn nothing_is_sent_without_a_token() {
    let server = MockServer::start().await;

    let err = client_for(&server).get_surveys().await.unwrap_err();

    assert!(matches!(err, Error::MissingAccessToken));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn transport_failures_propagate() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let mut client = Client::new(Credentials::new("abc", "shh", "https://x/cb").unwrap())
        .with_base_url(&uri)
        .unwrap();
    client.set_access_token("tok123").unwrap();

    let err = client.get_surveys().await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
}
