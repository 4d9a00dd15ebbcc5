use ask_client::{AskClient, AskClientConfig};
use interaction::{ChatState, InteractionStore, Phase, Role};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_for(server: &MockServer) -> InteractionStore<AskClient> {
    let client = AskClient::new(AskClientConfig::new(server.uri())).unwrap();
    InteractionStore::new(client)
}

#[tokio::test]
async fn answered_state_from_stub_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(json!({ "question": "O que é RAG?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "RAG é...",
            "citations": [],
            "metrics": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    let state = store.ask("O que é RAG?").await;

    let response = state.response.as_ref().unwrap();
    assert_eq!(response.answer, "RAG é...");
    assert!(response.citations.is_empty());
    assert!(response.metrics.is_empty());
    assert!(!state.loading);
    assert_eq!(store.phase(), Phase::Answered);
}

#[tokio::test]
async fn server_error_detail_becomes_failed_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "boom" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    let state = store.ask("Qual o custo?").await;

    assert_eq!(state.error.as_deref(), Some("boom"));
    assert_eq!(state.response, None);
    assert!(!state.loading);
}

#[tokio::test]
async fn whitespace_question_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    store.ask("   \t ").await;

    assert_eq!(store.phase(), Phase::Failed);
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn offline_backend_fails_without_hanging_loading() {
    let server = MockServer::start().await;
    let mut store = store_for(&server);
    drop(server);

    let state = store.ask("anyone there?").await;
    assert!(state.error.is_some());
    assert!(!state.loading);
    assert!(!store.check_health().await);
}

#[tokio::test]
async fn chat_history_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Curva ABC classifica itens...",
            "citations": [{ "source": "GESTAO_DE_ESTOQUES.pdf", "excerpt": "A curva ABC...", "chunk_id": 4 }],
            "metrics": { "total_tokens": 780 }
        })))
        .mount(&server)
        .await;

    let client = AskClient::new(AskClientConfig::new(server.uri())).unwrap();
    let mut store: InteractionStore<_, ChatState> = InteractionStore::new(client);

    store.ask("O que é curva ABC?").await;
    store.reset();

    let state = store.state();
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].role, Role::Assistant);
    let answer = state.last_answer().unwrap();
    assert_eq!(answer.citations[0].chunk_id, Some(4));
    assert_eq!(answer.metrics.total_tokens, Some(780));
}
