use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use serde_json::{json, Map, Value};
use squarely_domain::{ClientConfig, Environment};
use squarely_infra::{HttpClient, SquareClient};
use wiremock::matchers::path_regex;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Client pointed at `server`, authenticating with `token`.
pub fn client_for(server: &MockServer, token: &str) -> SquareClient {
    init_tracing();
    SquareClient::builder()
        .config(ClientConfig::new(token, Environment::Sandbox).with_base_url(server.uri()))
        .http_client(HttpClient::builder().no_proxy().build().expect("http client"))
        .build()
        .expect("square client should build")
}

pub fn error_body(code: &str, detail: &str) -> Value {
    json!({
        "errors": [{
            "category": "INVALID_REQUEST_ERROR",
            "code": code,
            "detail": detail
        }]
    })
}

/// Stateful stand-in for the customer directory endpoints.
///
/// Supports create, retrieve, update, delete and cursor-paginated list on
/// `/v2/customers`. Customers are listed in id order.
pub struct InMemoryDirectory {
    customers: Mutex<BTreeMap<String, Map<String, Value>>>,
    next_id: AtomicUsize,
    page_size: usize,
}

impl InMemoryDirectory {
    pub fn new(page_size: usize) -> Self {
        Self { customers: Mutex::new(BTreeMap::new()), next_id: AtomicUsize::new(1), page_size }
    }

    /// Pre-populate `count` customers named `Customer 1..=count`.
    pub fn with_customers(self, count: usize) -> Self {
        for n in 1..=count {
            self.insert(json!({"given_name": format!("Customer {n}")}));
        }
        self
    }

    /// Mount on `server` for every `/v2/customers...` route.
    pub async fn mount(self, server: &MockServer) {
        Mock::given(path_regex(r"^/v2/customers(/[^/]+)?$")).respond_with(self).mount(server).await;
    }

    fn insert(&self, fields: Value) -> Map<String, Value> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = format!("C{n:04}");
        let mut record = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        record.remove("idempotency_key");
        record.insert("id".into(), json!(id));
        record.insert("created_at".into(), json!("2024-01-01T00:00:00Z"));
        record.insert("updated_at".into(), json!("2024-01-01T00:00:00Z"));
        record.insert("version".into(), json!(0));
        self.customers.lock().expect("directory lock").insert(id, record.clone());
        record
    }

    fn list(&self, request: &Request) -> ResponseTemplate {
        let cursor = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "cursor")
            .map(|(_, value)| value.into_owned());
        let limit = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "limit")
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(self.page_size);

        let customers = self.customers.lock().expect("directory lock");
        let start = match cursor {
            Some(cursor) => match cursor.parse::<usize>() {
                Ok(offset) => offset,
                Err(_) => return ResponseTemplate::new(400).set_body_json(error_body("INVALID_CURSOR", "bad cursor")),
            },
            None => 0,
        };
        let page: Vec<Value> =
            customers.values().skip(start).take(limit).cloned().map(Value::Object).collect();

        let mut body = Map::new();
        if !page.is_empty() {
            body.insert("customers".into(), Value::Array(page));
        }
        let next = start + limit;
        if next < customers.len() {
            body.insert("cursor".into(), json!(next.to_string()));
        }
        ResponseTemplate::new(200).set_body_json(Value::Object(body))
    }
}

impl Respond for InMemoryDirectory {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let segments: Vec<&str> =
            request.url.path().trim_start_matches("/v2/customers").split('/').filter(|s| !s.is_empty()).collect();
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);

        match (request.method.as_str(), segments.as_slice()) {
            ("GET", []) => self.list(request),
            ("POST", []) => {
                let record = self.insert(body);
                ResponseTemplate::new(200).set_body_json(json!({"customer": record}))
            }
            ("GET", [id]) => match self.customers.lock().expect("directory lock").get(*id) {
                Some(record) => ResponseTemplate::new(200).set_body_json(json!({"customer": record})),
                None => not_found(id),
            },
            ("PUT", [id]) => {
                let mut customers = self.customers.lock().expect("directory lock");
                let Some(record) = customers.get_mut(*id) else {
                    return not_found(id);
                };
                let Value::Object(fields) = body else {
                    return ResponseTemplate::new(400)
                        .set_body_json(error_body("EXPECTED_JSON_BODY", "body required"));
                };
                if let Some(expected) = fields.get("version") {
                    if record.get("version") != Some(expected) {
                        return ResponseTemplate::new(409)
                            .set_body_json(error_body("CONFLICT", "version mismatch"));
                    }
                }
                for (key, value) in fields {
                    if key != "version" {
                        record.insert(key, value);
                    }
                }
                let version = record.get("version").and_then(Value::as_i64).unwrap_or(0) + 1;
                record.insert("version".into(), json!(version));
                ResponseTemplate::new(200).set_body_json(json!({"customer": record}))
            }
            ("DELETE", [id]) => match self.customers.lock().expect("directory lock").remove(*id) {
                Some(_) => ResponseTemplate::new(200).set_body_json(json!({})),
                None => not_found(id),
            },
            _ => ResponseTemplate::new(405),
        }
    }
}

fn not_found(id: &str) -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(error_body("NOT_FOUND", &format!("Customer `{id}` not found.")))
}
