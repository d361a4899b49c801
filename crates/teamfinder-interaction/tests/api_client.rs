use serde_json::{Value, json};
use teamfinder_core::TeamfinderError;
use teamfinder_core::application::ApplicationRequest;
use teamfinder_core::auth::{AuthBackend, AuthorizationSlot, DevIdentity};
use teamfinder_core::page::PageRequest;
use teamfinder_core::role::Role;
use teamfinder_core::user::UserMainInfoPatch;
use teamfinder_interaction::ApiClient;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn profile_json(id: u64) -> Value {
    json!({
        "id": id,
        "telegram_id": 1000 + id,
        "username": "ada",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "avatar_url": null,
        "bio": null,
        "skills": [],
        "achievements": []
    })
}

async fn client(server: &MockServer) -> (ApiClient, AuthorizationSlot) {
    let slot = AuthorizationSlot::new();
    let client = ApiClient::new(&server.uri(), slot.clone()).unwrap();
    (client, slot)
}

#[tokio::test]
async fn test_bearer_header_follows_slot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(1)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, slot) = client(&server).await;
    slot.set("abc");

    let me = client.fetch_profile().await.unwrap();
    assert_eq!(me.id, 1);
    assert_eq!(me.telegram_id, 1001);
}

#[tokio::test]
async fn test_cleared_slot_sends_no_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "slug": "rust", "name": "Rust"}
        ])))
        .mount(&server)
        .await;

    let (client, slot) = client(&server).await;
    slot.set("stale");
    slot.clear();

    let skills = client.list_skills().await.unwrap();
    assert_eq!(skills.len(), 1);

    let requests: Vec<Request> = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_status_classes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "invalid token"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hackathons/5"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (client, _slot) = client(&server).await;

    let unauthorized = client.get_me().await.unwrap_err();
    assert_eq!(
        unauthorized,
        TeamfinderError::Unauthorized {
            status: 401,
            message: "invalid token".to_string()
        }
    );

    let server_error = client.get_hackathon(5).await.unwrap_err();
    assert!(server_error.is_transient());
    assert_eq!(server_error.status(), Some(500));
}

#[tokio::test]
async fn test_network_failure_is_transient() {
    // Nothing listens on port 1.
    let client = ApiClient::new("http://127.0.0.1:1", AuthorizationSlot::new()).unwrap();
    let err = client.get_me().await.unwrap_err();
    assert!(matches!(err, TeamfinderError::Network(_)));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_dev_login_sends_placeholder_identity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/dev-login"))
        .and(body_json(json!({
            "telegram_id": 0,
            "username": "teamfinder",
            "first_name": "Team",
            "last_name": "Finder",
            "avatar_url": "https://storage.yandexcloud.net/teamfinder-hackathons-images/hackathons/1/cover.jpg"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "dev-token",
            "profile": profile_json(7)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _slot) = client(&server).await;
    let session = client.dev_login(&DevIdentity::default()).await.unwrap();
    assert_eq!(session.access_token, "dev-token");
    assert_eq!(session.profile.id, 7);
}

#[tokio::test]
async fn test_telegram_exchange_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/telegram"))
        .and(body_json(json!({"init_data": "query_id=1&user=%7B%7D&hash=ff"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tg-token",
            "profile": profile_json(3)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _slot) = client(&server).await;
    let session = client
        .exchange_init_data("query_id=1&user=%7B%7D&hash=ff")
        .await
        .unwrap();
    assert_eq!(session.access_token, "tg-token");
}

#[tokio::test]
async fn test_hackathon_list_query_and_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hackathons"))
        .and(query_param("q", "rust"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": 1,
                "name": "Rust Hack",
                "description": "",
                "start_date": "2026-08-22 06:00:00+00:00",
                "end_date": "2026-08-24 18:00:00+00:00",
                "registration_end_date": "2026-08-20 00:00:00+00:00",
                "mode": "online",
                "status": "open",
                "team_members_minimum": 1,
                "team_members_limit": 4,
                "prize_fund": "1 000 000"
            }],
            "limit": 5,
            "offset": 0
        })))
        .mount(&server)
        .await;

    let (client, _slot) = client(&server).await;
    let page = client
        .list_hackathons(&PageRequest {
            query: Some("rust".to_string()),
            limit: Some(5),
            offset: None,
        })
        .await
        .unwrap();

    assert_eq!(page.limit, 5);
    assert_eq!(page.items[0].name, "Rust Hack");
    assert_eq!(page.items[0].registration_label(), "Регистрация до 20 августа");
}

#[tokio::test]
async fn test_profile_patch_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/users/me"))
        .and(body_json(json!({"bio": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(1)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _slot) = client(&server).await;
    client
        .edit_user_main_info(&UserMainInfoPatch::bio("hello"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_application() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hackathons/4/applications"))
        .and(body_json(json!({"role": "Designer"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "hackathon_id": 4,
            "user_id": 1,
            "role": "Designer",
            "username": "ada",
            "skills": [{"id": 2, "slug": "figma", "name": "Figma"}]
        })))
        .mount(&server)
        .await;

    let (client, _slot) = client(&server).await;
    let application = client
        .create_application(4, &ApplicationRequest::new(Role::Designer))
        .await
        .unwrap();
    assert_eq!(application.id, 11);
    assert_eq!(application.skills[0].slug, "figma");
}
