use crate::{
    CreateCommentRequest, CreateTaskRequest, GatewayError, GatewayResult, TaskGateway,
    UpdateTaskRequest, with_retry,
};

use zr_config::{ApiConfig, RetryConfig};
use zr_core::{CommentRecord, EntityId, TaskRecord, Teacher};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Gateway over the clinic's JSON REST API.
pub struct HttpGateway {
    pub base_url: String,
    pub api_prefix: String,
    pub teacher_id: Option<String>,
    token: Option<String>,
    retry: RetryConfig,
    client: ReqwestClient,
}

impl HttpGateway {
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080")
    /// * `api_prefix` - Path prefix for every resource (e.g., "/api")
    pub fn new(base_url: &str, api_prefix: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_prefix: api_prefix.trim_end_matches('/').to_string(),
            teacher_id: None,
            token: None,
            retry: RetryConfig::default(),
            client: ReqwestClient::new(),
        }
    }

    /// Build from config, applying the request timeout.
    pub fn from_config(api: &ApiConfig, retry: &RetryConfig) -> GatewayResult<Self> {
        let client = ReqwestClient::builder().timeout(api.timeout()).build()?;
        Ok(Self {
            client,
            retry: retry.clone(),
            ..Self::new(&api.base_url, &api.api_prefix)
        })
    }

    /// Identify requests as this teacher (sent as X-Teacher-Id)
    pub fn with_teacher_id(mut self, teacher_id: Option<&str>) -> Self {
        self.teacher_id = teacher_id.map(String::from);
        self
    }

    /// Bearer token for the Authorization header
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(String::from);
        self
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Resolve resource path segments under the API root.
    ///
    /// Each segment is percent-encoded, so ids cannot escape their slot.
    pub fn url(&self, segments: &[&str]) -> GatewayResult<Url> {
        let root = format!("{}{}", self.base_url, self.api_prefix);
        let mut url =
            Url::parse(&root).map_err(|e| GatewayError::invalid_url(&root, e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| GatewayError::invalid_url(&root, "URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }
        if let Some(ref teacher_id) = self.teacher_id {
            req = req.header("X-Teacher-Id", teacher_id);
        }

        req
    }

    /// Send and decode the body. Empty bodies come back as `Value::Null`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> GatewayResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body: Value = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else if status.is_success() {
            serde_json::from_slice(&bytes)?
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        if !status.is_success() {
            let (code, message) = error_details(&body);
            return Err(GatewayError::api(
                status.as_u16(),
                code.unwrap_or_else(|| "UNKNOWN".to_string()),
                message.unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                }),
            ));
        }

        Ok(body)
    }

    async fn get_one<T: DeserializeOwned>(&self, url: Url) -> GatewayResult<T> {
        let body = self.execute(self.request(Method::GET, url)).await?;
        Ok(serde_json::from_value(unwrap_envelope(body))?)
    }

    async fn get_list<T: DeserializeOwned>(&self, url: Url) -> GatewayResult<Vec<T>> {
        let body = self.execute(self.request(Method::GET, url)).await?;
        match unwrap_envelope(body) {
            Value::Null => Ok(Vec::new()),
            list => Ok(serde_json::from_value(list)?),
        }
    }
}

#[async_trait]
impl TaskGateway for HttpGateway {
    async fn list_tasks(&self) -> GatewayResult<Vec<TaskRecord>> {
        let url = self.url(&["tasks"])?;
        with_retry(&self.retry, "list_tasks", || self.get_list(url.clone())).await
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> GatewayResult<Option<TaskRecord>> {
        let req = self.request(Method::POST, self.url(&["tasks"])?).json(request);
        let body = self.execute(req).await?;
        Ok(decode_optional(body))
    }

    async fn update_task(
        &self,
        task_id: &EntityId,
        request: &UpdateTaskRequest,
    ) -> GatewayResult<Option<TaskRecord>> {
        let url = self.url(&["tasks", &task_id.to_string()])?;
        let req = self.request(Method::PUT, url).json(request);
        let body = self.execute(req).await?;
        Ok(decode_optional(body))
    }

    async fn delete_task(&self, task_id: &EntityId) -> GatewayResult<()> {
        let url = self.url(&["tasks", &task_id.to_string()])?;
        self.execute(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    async fn list_comments(&self, task_id: &EntityId) -> GatewayResult<Vec<CommentRecord>> {
        let url = self.url(&["tasks", &task_id.to_string(), "comments"])?;
        with_retry(&self.retry, "list_comments", || self.get_list(url.clone())).await
    }

    async fn create_comment(
        &self,
        request: &CreateCommentRequest,
    ) -> GatewayResult<Option<CommentRecord>> {
        let req = self.request(Method::POST, self.url(&["comments"])?).json(request);
        let body = self.execute(req).await?;
        Ok(decode_optional(body))
    }

    async fn delete_comment(&self, comment_id: &EntityId) -> GatewayResult<()> {
        let url = self.url(&["comments", &comment_id.to_string()])?;
        self.execute(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    async fn list_teachers(&self, page: u32, size: u32) -> GatewayResult<Vec<Teacher>> {
        let mut url = self.url(&["teachers"])?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("size", &size.to_string());
        with_retry(&self.retry, "list_teachers", || self.get_list(url.clone())).await
    }

    async fn get_teacher(&self, teacher_id: &EntityId) -> GatewayResult<Teacher> {
        let url = self.url(&["teachers", &teacher_id.to_string()])?;
        with_retry(&self.retry, "get_teacher", || self.get_one(url.clone())).await
    }
}

/// Strip the `{ "data": ... }` wrapper and a page's `content`/`items` list.
pub fn unwrap_envelope(body: Value) -> Value {
    let body = match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    match body {
        Value::Object(mut map) if map.get("content").is_some_and(Value::is_array) => {
            map.remove("content").unwrap_or(Value::Null)
        }
        Value::Object(mut map) if map.get("items").is_some_and(Value::is_array) => {
            map.remove("items").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn decode_optional<T: DeserializeOwned>(body: Value) -> Option<T> {
    let body = unwrap_envelope(body);
    if body.is_null() {
        return None;
    }
    serde_json::from_value(body)
        .map_err(|e| debug!("Ignoring undecodable mutation response: {e}"))
        .ok()
}

/// Pull `code`/`message` out of `{ "error": { .. } }` or a flat body.
fn error_details(body: &Value) -> (Option<String>, Option<String>) {
    let source = body.get("error").filter(|e| e.is_object()).unwrap_or(body);
    let text = |key: &str| source.get(key).and_then(Value::as_str).map(String::from);
    let message = text("message")
        .or_else(|| body.get("error").and_then(Value::as_str).map(String::from));
    (text("code"), message)
}
