use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

use serde_json::Value;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum CourseBehavior {
    Created,
    DetailError,
    PlainText,
}

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub raw_body: String,
    pub body: Value,
}

pub struct CourseApiStub {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl CourseApiStub {
    pub fn spawn(behavior: CourseBehavior) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start course api stub");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}");

        let received = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&received);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let mut request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let method = request.method().to_string();
                let path = request.url().to_string();
                if request.method() != &tiny_http::Method::Post || path != "/create-course" {
                    let _ = request.respond(
                        tiny_http::Response::from_string("not found").with_status_code(404),
                    );
                    continue;
                }

                let content_type = request
                    .headers()
                    .iter()
                    .find(|header| header.field.equiv("Content-Type"))
                    .map(|header| header.value.to_string());

                let mut body = String::new();
                if request.as_reader().read_to_string(&mut body).is_err() {
                    let _ = request.respond(
                        tiny_http::Response::from_string("invalid request body")
                            .with_status_code(400),
                    );
                    continue;
                }

                let parsed: Value = match serde_json::from_str(&body) {
                    Ok(value) => value,
                    Err(_) => {
                        let _ = request.respond(
                            tiny_http::Response::from_string("invalid json").with_status_code(400),
                        );
                        continue;
                    }
                };

                recorder.lock().unwrap().push(ReceivedRequest {
                    method,
                    path,
                    content_type,
                    raw_body: body,
                    body: parsed.clone(),
                });

                let response = match behavior {
                    CourseBehavior::Created => {
                        let course = serde_json::json!({
                            "title": "Stub Course",
                            "modules": [
                                {
                                    "title": "Module 1",
                                    "topics": [],
                                }
                            ],
                            "requested_options": parsed,
                        });
                        json_response(&course, 200)
                    }
                    CourseBehavior::DetailError => json_response(
                        &serde_json::json!({ "detail": "Model returned invalid JSON." }),
                        500,
                    ),
                    CourseBehavior::PlainText => {
                        tiny_http::Response::from_string("created").with_status_code(200)
                    }
                };
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            received,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for CourseApiStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn json_response(body: &Value, status: u16) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let mut response = tiny_http::Response::from_string(body.to_string()).with_status_code(status);
    let header = tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .expect("build header");
    response = response.with_header(header);
    response
}
