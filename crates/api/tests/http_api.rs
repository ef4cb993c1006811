//! End-to-end API tests against a live listener, with httpmock standing in
//! for the upstream model provider.

use std::net::SocketAddr;
use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::{json, Value};

use api::{create_router, AppState, RateLimitConfig, RateLimits};
use llm_gateway::{GatewayConfig, LlmGateway, MemoryAttemptSink};
use storage::Repository;

struct TestApp {
    base_url: String,
    state: Arc<AppState>,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Limits roomy enough that ordinary tests never trip them.
fn roomy_limits() -> RateLimits {
    RateLimits {
        ai: RateLimitConfig {
            per_second: 1,
            burst_size: 50,
        },
        general: RateLimitConfig {
            per_second: 1,
            burst_size: 50,
        },
    }
}

async fn spawn_app(llm_server: &MockServer, limits: RateLimits) -> TestApp {
    let repository = Repository::in_memory().await.unwrap();
    let gateway = LlmGateway::new(
        GatewayConfig {
            base_url: llm_server.base_url(),
            api_key: None,
            models: vec!["model-a".to_string(), "model-b".to_string()],
            max_output_tokens: 256,
            timeout_seconds: 5,
        },
        Arc::new(MemoryAttemptSink::new()),
    )
    .unwrap();

    let state = Arc::new(AppState::new(repository, gateway));
    let app = create_router(state.clone(), &limits);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    TestApp {
        base_url: format!("http://{}", addr),
        state,
    }
}

fn sample_plan() -> Value {
    json!({
        "marketingChannels": ["Instagram Ads", "Local SEO"],
        "websiteNeeds": ["Landing page", "Booking flow"],
        "automations": ["WhatsApp follow-up"],
        "timeline": "90 days"
    })
}

fn sample_ideas() -> Value {
    json!({
        "websiteFeatures": ["Online booking"],
        "appIdeas": ["Reminder app"],
        "automationWorkflows": ["SMS nudges"],
        "crmUsage": ["Tag no-shows"],
        "monetization": ["Subscription plans"]
    })
}

/// Completion body wrapping `content` the way the provider does.
fn completion_body(content: &str) -> Value {
    json!({
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
}

#[tokio::test]
async fn test_create_lead_persists_and_returns_record() {
    let llm = MockServer::start();
    let app = spawn_app(&llm, roomy_limits()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/leads"))
        .json(&json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "company": "Rao Dental",
            "businessType": "clinic"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "asha@example.com");
    assert_eq!(body["businessType"], "clinic");
    assert!(body["createdAt"].is_string());

    assert_eq!(app.state.repository.lead_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_lead_missing_email_is_field_error() {
    let llm = MockServer::start();
    let app = spawn_app(&llm, roomy_limits()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/leads"))
        .json(&json!({"name": "Asha Rao"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Required");
    assert_eq!(body["field"], "email");
    assert_eq!(app.state.repository.lead_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_blueprint_returns_full_bundle() {
    let llm = MockServer::start();
    let app = spawn_app(&llm, roomy_limits()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/blueprint"))
        .json(&json!({
            "businessContext": "service",
            "growthStage": "early",
            "budget": "starter",
            "primaryGoal": "leads"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["coreSystem"]["key"], "website");
    assert_eq!(body["coreSystem"]["displayName"], "Growth Website");
    assert_eq!(body["supportingSystems"][0]["key"], "leads");
    assert_eq!(body["deferredSystems"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["deferredSystems"][1]["system"]["key"],
        "scale"
    );
    assert_eq!(
        body["deferredSystems"][1]["reason"],
        "Requires > ₹50k ad spend"
    );
    assert!(body["insight"].as_str().unwrap().contains("Growth Website"));
}

#[tokio::test]
async fn test_blueprint_unknown_token_is_rejected() {
    let llm = MockServer::start();
    let app = spawn_app(&llm, roomy_limits()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/blueprint"))
        .json(&json!({
            "businessContext": "franchise",
            "growthStage": "early",
            "budget": "starter",
            "primaryGoal": "leads"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["field"], "businessContext");
    assert!(body["message"].as_str().unwrap().contains("franchise"));
}

#[tokio::test]
async fn test_growth_plan_round_trip_persists_plan() {
    let llm = MockServer::start();
    let plan = sample_plan();
    let mock = llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(completion_body(&plan.to_string()));
    });
    let app = spawn_app(&llm, roomy_limits()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/ai/growth-plan"))
        .json(&json!({
            "businessCategory": "bakery",
            "city": "Pune",
            "budget": "₹50k-1L",
            "goal": "sales"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, plan);

    mock.assert();
    assert_eq!(app.state.repository.plan_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_growth_plan_failure_returns_generic_500() {
    let llm = MockServer::start();
    let mock = llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(500).body("upstream down");
    });
    let app = spawn_app(&llm, roomy_limits()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/ai/growth-plan"))
        .json(&json!({"businessCategory": "gym", "goal": "leads"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Failed to generate plan"}));

    // Both models in the chain were attempted before giving up.
    mock.assert_hits(2);
    assert_eq!(app.state.repository.plan_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_growth_plan_missing_category_skips_model_call() {
    let llm = MockServer::start();
    let mock = llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(completion_body(&sample_plan().to_string()));
    });
    let app = spawn_app(&llm, roomy_limits()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/ai/growth-plan"))
        .json(&json!({"goal": "sales"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Required");
    assert_eq!(body["field"], "businessCategory");
    mock.assert_hits(0);
}

#[tokio::test]
async fn test_idea_generator_returns_ideas_without_persisting() {
    let llm = MockServer::start();
    let ideas = sample_ideas();
    let mock = llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(completion_body(&ideas.to_string()));
    });
    let app = spawn_app(&llm, roomy_limits()).await;

    let response = reqwest::Client::new()
        .post(app.url("/api/ai/idea-generator"))
        .json(&json!({
            "businessType": "clinic",
            "problem": "patients forget appointments"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, ideas);

    mock.assert();
    assert_eq!(app.state.repository.plan_count().await.unwrap(), 0);
    assert_eq!(app.state.repository.lead_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_ai_routes_rate_limit_trips() {
    let llm = MockServer::start();
    let mock = llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(completion_body(&sample_ideas().to_string()));
    });

    let mut limits = roomy_limits();
    limits.ai = RateLimitConfig {
        per_second: 60,
        burst_size: 1,
    };
    let app = spawn_app(&llm, limits).await;

    let client = reqwest::Client::new();
    let payload = json!({"businessType": "gym", "problem": "churn"});

    let first = client
        .post(app.url("/api/ai/idea-generator"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 200);

    let second = client
        .post(app.url("/api/ai/idea-generator"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 429);
    assert!(second.headers().contains_key("x-ratelimit-after"));

    // The throttled request never reached the provider.
    mock.assert_hits(1);
}

#[tokio::test]
async fn test_health_reports_storage_counts() {
    let llm = MockServer::start();
    let app = spawn_app(&llm, roomy_limits()).await;

    let client = reqwest::Client::new();
    client
        .post(app.url("/api/leads"))
        .json(&json!({"name": "Asha Rao", "email": "asha@example.com"}))
        .send()
        .await
        .unwrap();

    let response = client.get(app.url("/api/health")).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["components"]["database"]["status"], "ok");
    assert_eq!(
        body["components"]["llm_gateway"]["detail"],
        "2 models in chain"
    );
    assert_eq!(body["metrics"]["lead_count"], 1);
    assert_eq!(body["metrics"]["plan_count"], 0);
    assert!(body["uptime_seconds"].is_u64());
}
