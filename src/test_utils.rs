use crate::models::dto::QuizRequest;

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use serde_json::{json, Value};

    /// Provider text holding exactly one valid question.
    pub const EXACT_QUIZ: &str =
        r#"{"quiz":[{"question":"Q","options":["A","B","C","D"],"correct":1}]}"#;

    /// Creates a request without a question count, with markup in its points
    pub fn quiz_request() -> QuizRequest {
        QuizRequest {
            topic_title: "Present Continuous".to_string(),
            level: "B1".to_string(),
            theory_summary: "am/is/are + V-ing".to_string(),
            points: vec!["<b>run</b>".to_string(), "now / at the moment".to_string()],
            num_questions: None,
        }
    }

    /// JSON body matching `quiz_request`
    pub fn quiz_request_body() -> Value {
        json!({
            "topicTitle": "Present Continuous",
            "level": "B1",
            "theorySummary": "am/is/are + V-ing",
            "points": ["<b>run</b>", "now / at the moment"]
        })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_fixtures_body_matches_request() {
        let parsed: QuizRequest = serde_json::from_value(quiz_request_body()).unwrap();
        let expected = quiz_request();

        assert_eq!(parsed.topic_title, expected.topic_title);
        assert_eq!(parsed.points, expected.points);
        assert!(parsed.num_questions.is_none());
    }
}

#[cfg(test)]
pub mod mock_provider {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use actix_web::{
        dev::ServerHandle, http::StatusCode, web, App, HttpRequest, HttpResponse, HttpServer,
    };
    use serde_json::Value;

    /// What the mock server saw for one incoming request.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub path: String,
        pub query: String,
        pub headers: Vec<(String, String)>,
        pub body: Value,
    }

    impl RecordedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        }
    }

    struct Script {
        replies: Vec<(u16, Value)>,
        hits: AtomicUsize,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    pub struct MockProvider {
        pub base_url: String,
        script: Arc<Script>,
        handle: ServerHandle,
    }

    impl MockProvider {
        pub fn hits(&self) -> usize {
            self.script.hits.load(Ordering::SeqCst)
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.script.requests.lock().unwrap().clone()
        }

        pub async fn stop(self) {
            self.handle.stop(false).await;
        }
    }

    async fn reply(script: web::Data<Script>, req: HttpRequest, body: web::Bytes) -> HttpResponse {
        let hit = script.hits.fetch_add(1, Ordering::SeqCst);
        script.requests.lock().unwrap().push(RecordedRequest {
            path: req.path().to_string(),
            query: req.query_string().to_string(),
            headers: req
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
                .collect(),
            body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        });

        let (status, payload) = script.replies[hit.min(script.replies.len() - 1)].clone();
        HttpResponse::build(StatusCode::from_u16(status).unwrap()).json(payload)
    }

    /// Serves `replies` in order on a random local port; the last one repeats.
    pub fn start(replies: Vec<(u16, Value)>) -> MockProvider {
        let script = web::Data::new(Script {
            replies,
            hits: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        });

        let data = script.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(reply))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("mock provider should bind a local port");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        MockProvider {
            base_url: format!("http://{}", addr),
            script: script.into_inner(),
            handle,
        }
    }

    /// HTTP client that never routes through an environment proxy.
    pub fn http_client() -> reqwest::Client {
        reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("test http client should build")
    }
}
