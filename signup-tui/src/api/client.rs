use anyhow::{Context, Result};
use indexmap::IndexMap;
use reqwest::{Client, RequestBuilder, Url};
use tracing::debug;

use crate::api::dev_backend::DevBackend;
use crate::api::dto::{ActivityDto, ErrorResponse, MessageResponse};
use crate::api::error::{FetchError, MutationError};
use crate::types::ActivityCatalog;

/// Handle on the remote activity store.
///
/// Cheap to clone; every in-flight operation carries its own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    dev_backend: Option<DevBackend>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid API URL: {}", base_url))?;
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            dev_backend: None,
        })
    }

    pub fn dev(backend: DevBackend) -> Result<Self> {
        let mut client = Self::new("http://localhost")?;
        client.dev_backend = Some(backend);
        Ok(client)
    }

    fn endpoint(&self, path: &str) -> Result<Url, String> {
        self.base_url
            .join(path)
            .map_err(|e| format!("Failed to build URL for path {}: {}", path, e))
    }

    async fn dev_latency(dev: &DevBackend) {
        let latency = dev.latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }

    /// `GET /activities`, normalized into a catalog.
    pub async fn get_activities(&self) -> Result<ActivityCatalog, FetchError> {
        if let Some(dev) = &self.dev_backend {
            Self::dev_latency(dev).await;
            return dev.activities();
        }

        let url = self
            .endpoint("/activities")
            .map_err(FetchError::Transport)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let dtos: IndexMap<String, ActivityDto> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(dtos
            .into_iter()
            .map(|(name, dto)| dto.into_activity(name))
            .collect())
    }

    /// `POST /activities/{name}/signup?email={email}`. Returns the store's message.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, MutationError> {
        if let Some(dev) = &self.dev_backend {
            Self::dev_latency(dev).await;
            return dev.signup(activity, email);
        }

        let url = self
            .endpoint(&signup_path(activity, email))
            .map_err(MutationError::Transport)?;
        self.mutate(self.client.post(url), "POST /activities/:name/signup")
            .await
    }

    /// `DELETE /activities/{name}/unregister?email={email}`. Returns the store's message.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, MutationError> {
        if let Some(dev) = &self.dev_backend {
            Self::dev_latency(dev).await;
            return dev.unregister(activity, email);
        }

        let url = self
            .endpoint(&unregister_path(activity, email))
            .map_err(MutationError::Transport)?;
        self.mutate(self.client.delete(url), "DELETE /activities/:name/unregister")
            .await
    }

    async fn mutate(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<String, MutationError> {
        let response = request
            .send()
            .await
            .map_err(|e| MutationError::Transport(format!("Failed to call {call_name}: {e}")))?;

        let status = response.status();
        debug!(call = call_name, %status, "activity store answered");

        if status.is_success() {
            let body: MessageResponse = response.json().await.map_err(|e| {
                MutationError::Transport(format!("Failed to parse {call_name} response: {e}"))
            })?;
            return Ok(body.message);
        }

        // A body that is not JSON still counts as a rejection, just without detail.
        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(ErrorResponse::into_detail);
        Err(MutationError::Rejected { status, detail })
    }
}

pub fn signup_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

pub fn unregister_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/unregister?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}
