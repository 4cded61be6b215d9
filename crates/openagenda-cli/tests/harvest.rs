//! End-to-end orchestration tests against a mock OpenAgenda server.
//!
//! These pin the observable request pattern: discovery order, the
//! (agenda × keyword) cross-product, fail-fast on discovery errors, and the
//! literal no-dedup behavior for agendas matching several keywords.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use openagenda::OpenAgendaClient;
use openagenda_cli::{HarvestConfig, Orchestrator};

fn test_config(keywords: &[&str]) -> HarvestConfig {
    HarvestConfig {
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        agenda_size: 10,
        event_size: 20,
        sort: "createdAt.desc".into(),
        official: false,
        out_dir: None,
    }
}

async fn mount_agenda_search(server: &MockServer, keyword: &str, uids: &[u64]) {
    let agendas: Vec<Value> = uids.iter().map(|uid| json!({ "uid": uid })).collect();
    Mock::given(method("GET"))
        .and(path("/agendas"))
        .and(query_param("search", keyword))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "agendas": agendas })))
        .mount(server)
        .await;
}

async fn mount_events(server: &MockServer, uid: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/agendas/{uid}/events")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "events": [] })))
        .mount(server)
        .await;
}

/// (path, searchWord) for every event fetch the server saw, in arrival order.
fn event_fetches(requests: &[Request]) -> Vec<(String, String)> {
    requests
        .iter()
        .filter(|r| r.url.path().ends_with("/events"))
        .map(|r| {
            let search = r
                .url
                .query_pairs()
                .find(|(k, _)| k == "searchWord")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default();
            (r.url.path().to_string(), search)
        })
        .collect()
}

#[tokio::test]
async fn harvest_sweeps_the_full_cross_product_in_order() {
    let server = MockServer::start().await;
    mount_agenda_search(&server, "a", &[1]).await;
    mount_agenda_search(&server, "b", &[2]).await;
    mount_events(&server, 1).await;
    mount_events(&server, 2).await;

    let client = OpenAgendaClient::with_base_url("k", &server.uri());
    Orchestrator::new(client, test_config(&["a", "b"]))
        .harvest()
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let fetches = event_fetches(&requests);
    assert_eq!(
        fetches,
        vec![
            ("/agendas/1/events".to_string(), "a".to_string()),
            ("/agendas/1/events".to_string(), "b".to_string()),
            ("/agendas/2/events".to_string(), "a".to_string()),
            ("/agendas/2/events".to_string(), "b".to_string()),
        ]
    );
}

#[tokio::test]
async fn discovery_failure_aborts_before_any_event_fetch() {
    let server = MockServer::start().await;
    mount_agenda_search(&server, "a", &[1]).await;
    Mock::given(method("GET"))
        .and(path("/agendas"))
        .and(query_param("search", "b"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_events(&server, 1).await;

    let client = OpenAgendaClient::with_base_url("k", &server.uri());
    let err = Orchestrator::new(client, test_config(&["a", "b"]))
        .harvest()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("\"b\""), "context lost: {err:#}");

    let requests = server.received_requests().await.unwrap();
    assert!(
        event_fetches(&requests).is_empty(),
        "phase 2 ran after a phase 1 failure"
    );
}

#[tokio::test]
async fn agenda_matching_two_keywords_is_swept_twice() {
    let server = MockServer::start().await;
    mount_agenda_search(&server, "a", &[1]).await;
    mount_agenda_search(&server, "b", &[1]).await;
    mount_events(&server, 1).await;

    let client = OpenAgendaClient::with_base_url("k", &server.uri());
    Orchestrator::new(client, test_config(&["a", "b"]))
        .harvest()
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let fetches = event_fetches(&requests);
    // One sweep per occurrence in the accumulated list, not per unique uid.
    assert_eq!(fetches.len(), 4);
    assert_eq!(
        fetches.iter().map(|(_, kw)| kw.as_str()).collect::<Vec<_>>(),
        vec!["a", "b", "a", "b"]
    );
}

#[tokio::test]
async fn harvest_export_preserves_the_accumulated_list() {
    let server = MockServer::start().await;
    mount_agenda_search(&server, "a", &[1]).await;
    mount_agenda_search(&server, "b", &[1]).await;
    mount_events(&server, 1).await;

    let out = tempfile::tempdir().unwrap();
    let mut config = test_config(&["a", "b"]);
    config.out_dir = Some(out.path().to_path_buf());

    let client = OpenAgendaClient::with_base_url("k", &server.uri());
    Orchestrator::new(client, config).harvest().await.unwrap();

    let body = std::fs::read_to_string(out.path().join("agendas.json")).unwrap();
    let saved: Value = serde_json::from_str(&body).unwrap();
    // The duplicate occurrence is saved as-is.
    assert_eq!(saved, json!([{ "uid": 1 }, { "uid": 1 }]));

    for name in ["events_1_a.json", "events_1_b.json"] {
        assert!(out.path().join(name).exists(), "missing export {name}");
    }
}

#[tokio::test]
async fn search_variant_stops_at_discovery() {
    let server = MockServer::start().await;
    mount_agenda_search(&server, "a", &[1, 2]).await;

    let client = OpenAgendaClient::with_base_url("k", &server.uri());
    Orchestrator::new(client, test_config(&["a"]))
        .search()
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/agendas");
}
