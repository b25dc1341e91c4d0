use anyhow::Context as _;
use async_trait::async_trait;

use crate::options::CourseOptions;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const ENDPOINT_ENV: &str = "COURSEFORGE_ENDPOINT";

pub fn resolve_base_url(flag: Option<&str>) -> String {
    resolve_from(flag, std::env::var(ENDPOINT_ENV).ok().as_deref())
}

fn resolve_from(flag: Option<&str>, env: Option<&str>) -> String {
    if let Some(value) = flag {
        return value.to_owned();
    }
    env.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
}

pub fn create_course_endpoint(base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    format!("{base_url}/create-course")
}

#[async_trait]
pub trait CourseService: Send + Sync {
    async fn create_course(&self, options: &CourseOptions) -> anyhow::Result<serde_json::Value>;
}

pub struct HttpCourseService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCourseService {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let parsed = url::Url::parse(base_url)
            .with_context(|| format!("invalid course service url: {base_url}"))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("course service url must be http or https: {base_url}");
        }

        // No request timeout. A submission stays pending for as long as the
        // service takes to answer.
        let client = reqwest::Client::builder()
            .build()
            .context("build http client")?;

        Ok(Self {
            client,
            endpoint: create_course_endpoint(base_url),
        })
    }
}

#[async_trait]
impl CourseService for HttpCourseService {
    async fn create_course(&self, options: &CourseOptions) -> anyhow::Result<serde_json::Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(options)
            .send()
            .await
            .with_context(|| format!("POST {}", self.endpoint))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .context("read course service response body")?;
        if !status.is_success() {
            let message = parse_error_detail(&raw).unwrap_or_else(|| raw.clone());
            anyhow::bail!("course service error ({status}): {message}");
        }

        Ok(serde_json::from_str(&raw).unwrap_or_else(|_| serde_json::Value::String(raw)))
    }
}

// The service reports failures as `{"detail": "..."}`.
fn parse_error_detail(raw_json: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw_json).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
