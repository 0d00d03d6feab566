use anyhow::{Context, Result};
use reqwest::{multipart, Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::model::PendingUpload;

/// One entry of `GET /files/list`, exactly as the server reports it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteFile {
    pub name: String,
    pub size: u64,
    #[serde(rename = "createdAt")]
    pub created_at: String, // RFC 3339
    #[serde(rename = "modifiedAt")]
    pub modified_at: String, // RFC 3339
}

/// Response of `GET /v1/echo`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerInfo {
    pub version: String,
    pub app_name: String,
    pub current_time: String,
    pub current_host: String,
    pub client_ip: String,
}

/// Body of a successful upload. Older servers answer with an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Error body the server sends alongside non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    error: String,
}

#[derive(Clone)]
pub struct FileServerClient {
    base_url: String,
    client: Client,
}

impl FileServerClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Link target for a stored file. Never fetched by this client.
    pub fn download_url(&self, name: &str) -> String {
        format!(
            "{}/files/download/{}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    pub async fn list_files(&self) -> Result<Vec<RemoteFile>> {
        let url = format!("{}/files/list", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch file list")?;

        let response = check_status(response).await?;
        let files: Vec<RemoteFile> = response
            .json()
            .await
            .context("Failed to parse file list")?;

        Ok(files)
    }

    /// Send the staged file as `multipart/form-data` under the field `file`
    pub async fn upload_file(&self, upload: &PendingUpload) -> Result<UploadReceipt> {
        let url = format!("{}/files/upload", self.base_url);

        let contents = tokio::fs::read(&upload.path)
            .await
            .with_context(|| format!("Failed to read {}", upload.path.display()))?;

        let part = multipart::Part::bytes(contents)
            .file_name(upload.name.clone())
            .mime_str(&upload.mime_type)
            .context("Invalid MIME type")?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to upload file")?;

        let response = check_status(response).await?;

        // Body is informational only; tolerate anything that isn't the receipt
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    pub async fn get_server_info(&self) -> Result<ServerInfo> {
        let url = format!("{}/v1/echo", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch server info")?;

        let response = check_status(response).await?;
        let info: ServerInfo = response
            .json()
            .await
            .context("Failed to parse server info")?;

        Ok(info)
    }
}

/// Turn a non-2xx response into an error carrying the server's explanation
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(api_error) => format!("{}: {}", api_error.message, api_error.error),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };

    Err(anyhow::anyhow!("HTTP {}: {}", status.as_u16(), detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FileServerClient {
        FileServerClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(client().base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_download_url_encodes_name() {
        assert_eq!(
            client().download_url("my report #1.pdf"),
            "http://localhost:8000/files/download/my%20report%20%231.pdf"
        );
    }

    #[test]
    fn test_remote_file_uses_camel_case_timestamps() {
        let json = r#"[{"name":"a.txt","size":1024,"createdAt":"2024-01-02T03:04:05+00:00","modifiedAt":"2024-01-02T03:04:06+00:00"}]"#;
        let files: Vec<RemoteFile> = serde_json::from_str(json).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "a.txt");
        assert_eq!(files[0].size, 1024);
        assert_eq!(files[0].modified_at, "2024-01-02T03:04:06+00:00");
    }

    #[test]
    fn test_upload_receipt_tolerates_empty_object() {
        let receipt: UploadReceipt = serde_json::from_str("{}").unwrap();
        assert_eq!(receipt.file_name, None);
    }
}
