use std::time::Duration;

use sentiment_engine::{AnalyzerSettings, EngineEvent, EngineEvents, EngineHandle};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

async fn next_event(events: EngineEvents) -> (EngineEvents, Option<EngineEvent>) {
    tokio::task::spawn_blocking(move || {
        let event = events.recv_timeout(WAIT);
        (events, event)
    })
    .await
    .unwrap()
}

fn start_engine(base_url: String) -> (EngineHandle, EngineEvents) {
    sentiment_logging::initialize_for_tests();
    EngineHandle::new(AnalyzerSettings {
        base_url,
        ..AnalyzerSettings::default()
    })
    .expect("engine starts")
}

#[tokio::test(flavor = "multi_thread")]
async fn completions_carry_request_id_and_arrive_out_of_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_text"))
        .and(body_json(json!({ "text": "slow" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(400))
                .set_body_json(json!({ "summary": "first" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/analyze_text"))
        .and(body_json(json!({ "text": "fast" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "second" })))
        .mount(&server)
        .await;

    let (engine, events) = start_engine(server.uri());
    engine.analyze_text(1, "slow");
    engine.analyze_text(2, "fast");

    let (events, first) = next_event(events).await;
    let (_events, second) = next_event(events).await;

    match first {
        Some(EngineEvent::AnalysisCompleted { request_id, result }) => {
            assert_eq!(request_id, 2);
            assert_eq!(result.unwrap().summary, "second");
        }
        other => panic!("unexpected event {other:?}"),
    }
    match second {
        Some(EngineEvent::AnalysisCompleted { request_id, result }) => {
            assert_eq!(request_id, 1);
            assert_eq!(result.unwrap().summary, "first");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn failures_are_reported_as_events() {
    let base_url = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let (engine, events) = start_engine(base_url);
    engine.analyze_text(7, "anything");
    let (events, event) = next_event(events).await;
    match event {
        Some(EngineEvent::AnalysisCompleted { request_id, result }) => {
            assert_eq!(request_id, 7);
            assert!(result.is_err());
        }
        other => panic!("unexpected event {other:?}"),
    }

    engine.ping();
    let (_events, event) = next_event(events).await;
    match event {
        Some(EngineEvent::PingCompleted { result }) => assert!(result.is_err()),
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn ping_succeeds_against_live_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let (engine, events) = start_engine(server.uri());
    engine.ping();
    let (_events, event) = next_event(events).await;
    assert_eq!(event, Some(EngineEvent::PingCompleted { result: Ok(()) }));
}
