pub mod dto;

use std::env;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::AppError;
use crate::models::{Course, seed_courses};
use self::dto::{OrderAck, OrderRequest};

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let base_url = env::var("COURSE_API_URL")
            .map_err(|_| AppError::Config("COURSE_API_URL is not set".to_string()))?;
        Ok(Self { base_url })
    }
}

#[async_trait]
pub trait CourseApi: Send + Sync {
    /// Authoritative catalog fetch. Callers fall back to local state when
    /// this fails.
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError>;

    /// Submits an order. Acceptance is signalled only by a server-assigned
    /// order id in the response.
    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderAck, AppError>;
}

pub struct HttpCourseApi {
    client: Client,
    config: ApiConfig,
}

impl HttpCourseApi {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Transport(format!("failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl CourseApi for HttpCourseApi {
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError> {
        let url = self.url("courses");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Remote(format!(
                "catalog fetch failed {}: {}",
                status, body
            )));
        }

        let body_text = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;
        let raw: Vec<dto::RawCourse> = serde_json::from_str(&body_text).map_err(|e| {
            tracing::error!("failed to parse catalog response: {}", e);
            AppError::Transport(format!("failed to parse catalog response: {}", e))
        })?;

        Ok(raw.into_iter().map(Course::from).collect())
    }

    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderAck, AppError> {
        let url = self.url("orders");

        let response = self
            .client
            .post(&url)
            .json(order)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let parsed: dto::OrderResponse = serde_json::from_str(&body_text).map_err(|e| {
            tracing::error!("failed to parse order response ({}): {}", status, e);
            AppError::Transport(format!("failed to parse order response: {}", e))
        })?;

        if let Some(message) = parsed.error {
            return Err(AppError::Remote(message));
        }
        match parsed.id {
            Some(order_id) => Ok(OrderAck { order_id }),
            None => Err(AppError::UnexpectedResponse(format!(
                "order response carried neither an id nor an error ({})",
                status
            ))),
        }
    }
}

/// Offline twin of [`HttpCourseApi`]: serves the seed catalog and accepts
/// every order with a locally generated id. This is the "simulate the order"
/// mode of the storefront.
pub struct LocalCourseApi;

#[async_trait]
impl CourseApi for LocalCourseApi {
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(seed_courses())
    }

    async fn submit_order(&self, _order: &OrderRequest) -> Result<OrderAck, AppError> {
        Ok(OrderAck {
            order_id: uuid::Uuid::new_v4().to_string(),
        })
    }
}
