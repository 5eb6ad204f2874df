use crate::{CliClientResult, ClientError};

use std::path::Path;

use log::{debug, warn};
use mp_core::{Issue, IssueReceipt, IssueStatus, NewUser, PortalUser, Technician};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the maintenance backend REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let (code, message) = match body.get("error") {
                Some(error) => (
                    error
                        .get("code")
                        .and_then(|v| v.as_str())
                        .unwrap_or("UNKNOWN")
                        .to_string(),
                    error
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or("Unknown error")
                        .to_string(),
                ),
                None => (status.as_u16().to_string(), status_message(status, &text)),
            };
            return Err(ClientError::api_error(code, message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// List endpoints are trusted only when they actually return an array.
    fn decode_list<T: DeserializeOwned>(path: &str, body: Value) -> CliClientResult<Vec<T>> {
        match body {
            Value::Array(_) => Ok(serde_json::from_value(body)?),
            other => {
                warn!("{path} returned a non-array body, treating as empty: {other}");
                Ok(Vec::new())
            }
        }
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> CliClientResult<Vec<T>> {
        let body = self.execute(self.request(Method::GET, path)).await?;
        Self::decode_list(path, body)
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// List all users
    pub async fn list_users(&self) -> CliClientResult<Vec<PortalUser>> {
        self.list("/api/users/list").await
    }

    /// Create a user
    pub async fn create_user(&self, user: &NewUser) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/users/new").json(user);
        self.execute(req).await
    }

    // =========================================================================
    // Technicians
    // =========================================================================

    /// List all technicians
    pub async fn list_technicians(&self) -> CliClientResult<Vec<Technician>> {
        self.list("/api/technicians/list").await
    }

    /// Move an issue along the technician workflow
    pub async fn update_issue_status(
        &self,
        issue_id: &str,
        status: IssueStatus,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateStatusRequest {
            status: IssueStatus,
        }

        let req = self
            .request(
                Method::PATCH,
                &format!("/api/technicians/update/{}", issue_id),
            )
            .json(&UpdateStatusRequest { status });
        self.execute(req).await
    }

    // =========================================================================
    // Issues
    // =========================================================================

    /// List all issues
    pub async fn list_issues(&self) -> CliClientResult<Vec<Issue>> {
        self.list("/api/issues/list").await
    }

    /// Create an issue, optionally attaching an image file
    pub async fn create_issue(
        &self,
        description: &str,
        user_email: &str,
        image: Option<&Path>,
    ) -> CliClientResult<IssueReceipt> {
        let mut form = Form::new()
            .text("description", description.to_string())
            .text("user_email", user_email.to_string());

        if let Some(path) = image {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|e| ClientError::image(path.to_path_buf(), e))?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| String::from("image"));
            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(image_mime(path))?;
            form = form.part("image", part);
        }

        let req = self
            .request(Method::POST, "/api/issues/new")
            .multipart(form);
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }
}

fn status_message(status: reqwest::StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    } else {
        body.to_string()
    }
}

/// Content type for an image upload, guessed from the extension.
pub(crate) fn image_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
