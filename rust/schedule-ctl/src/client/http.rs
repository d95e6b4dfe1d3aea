//! HTTP/JSON implementation of the schedule service seam.
//!
//! Talks to the service's REST surface: one resource per schedule under
//! `/api/v1/namespaces/{namespace}/schedules/{id}`, with POST/PUT/PATCH/
//! GET/DELETE mapping to create/update/patch/describe/delete and a GET on
//! the collection for list. Request and connect timeouts come from
//! [`ServiceClientConfig`]; a timed-out or cancelled call surfaces as an
//! error, never a hang.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::{
    CreateScheduleRequest, DeleteScheduleRequest, DescribeScheduleRequest, ListSchedulesRequest,
    PatchScheduleRequest, ScheduleService, ServiceResult, UpdateScheduleRequest,
};
use crate::config::ServiceClientConfig;
use crate::error::ServiceError;

/// Schedule service client over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpScheduleService {
    config: ServiceClientConfig,
    client: reqwest::Client,
}

impl HttpScheduleService {
    /// Build a client from connection settings.
    pub fn new(config: ServiceClientConfig) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(ServiceError::from)?;

        tracing::debug!(
            endpoint = %config.endpoint,
            timeout_secs = config.timeout_secs,
            "schedule service client ready"
        );

        Ok(Self { config, client })
    }

    /// Build a client from environment configuration.
    pub fn from_env() -> ServiceResult<Self> {
        Self::new(ServiceClientConfig::from_env())
    }

    fn schedule_url(&self, namespace: &str, schedule_id: &str) -> String {
        format!(
            "{}/api/v1/namespaces/{namespace}/schedules/{schedule_id}",
            self.config.endpoint
        )
    }

    fn collection_url(&self, namespace: &str) -> String {
        format!(
            "{}/api/v1/namespaces/{namespace}/schedules",
            self.config.endpoint
        )
    }

    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        url: String,
        body: Option<&B>,
    ) -> ServiceResult<Value> {
        let mut request: RequestBuilder = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ServiceError::from)?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<Value>().await.map_err(ServiceError::from)
    }
}

#[async_trait]
impl ScheduleService for HttpScheduleService {
    async fn create_schedule(&self, request: CreateScheduleRequest) -> ServiceResult<Value> {
        let url = self.schedule_url(&request.namespace, &request.schedule_id);
        self.send(Method::POST, url, Some(&request)).await
    }

    async fn update_schedule(&self, request: UpdateScheduleRequest) -> ServiceResult<Value> {
        let url = self.schedule_url(&request.namespace, &request.schedule_id);
        self.send(Method::PUT, url, Some(&request)).await
    }

    async fn patch_schedule(&self, request: PatchScheduleRequest) -> ServiceResult<Value> {
        let url = self.schedule_url(&request.namespace, &request.schedule_id);
        self.send(Method::PATCH, url, Some(&request)).await
    }

    async fn describe_schedule(&self, request: DescribeScheduleRequest) -> ServiceResult<Value> {
        let url = self.schedule_url(&request.namespace, &request.schedule_id);
        self.send::<()>(Method::GET, url, None).await
    }

    async fn delete_schedule(&self, request: DeleteScheduleRequest) -> ServiceResult<Value> {
        let url = self.schedule_url(&request.namespace, &request.schedule_id);
        self.send(Method::DELETE, url, Some(&request)).await
    }

    async fn list_schedules(&self, request: ListSchedulesRequest) -> ServiceResult<Value> {
        let url = self.collection_url(&request.namespace);
        self.send::<()>(Method::GET, url, None).await
    }
}
