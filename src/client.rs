use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};

use crate::error::ClientError;
use crate::model::{NewRecipe, Recipe};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = "recipe-browser/0.1";

/// Anything that can serve recipes to the application shell.
///
/// The shell is generic over this seam so it can be driven by the HTTP
/// client or by an in-memory double in tests.
#[async_trait]
pub trait RecipeSource {
    /// Retrieve the full recipe collection.
    async fn fetch_all(&self) -> Result<Vec<Recipe>, ClientError>;

    /// Retrieve a single recipe by id.
    async fn fetch_one(&self, id: &str) -> Result<Recipe, ClientError>;

    /// Create a recipe and return the record the server stored.
    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, ClientError>;
}

/// HTTP client for the recipe API.
///
/// No caching and no retries: every call is one request, and errors are
/// normalized into [`ClientError`].
#[derive(Debug)]
pub struct RecipeClient {
    client: Client,
    base_url: String,
}

impl RecipeClient {
    /// Creates a client for the API at `base_url` with default timeout
    /// and user agent.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Creates a new builder for configuring a client
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use recipe_browser::RecipeClient;
    ///
    /// let client = RecipeClient::builder()
    ///     .base_url("http://localhost:3000")
    ///     .timeout(Duration::from_secs(5))
    ///     .build();
    /// ```
    pub fn builder() -> RecipeClientBuilder {
        RecipeClientBuilder::default()
    }

    async fn get_checked(&self, path: &str) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        check_response(response).await
    }
}

#[async_trait]
impl RecipeSource for RecipeClient {
    async fn fetch_all(&self) -> Result<Vec<Recipe>, ClientError> {
        let body = self.get_checked("/api/recipes").await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_one(&self, id: &str) -> Result<Recipe, ClientError> {
        let url = format!("{}/api/recipes/{}", self.base_url, id);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { id: id.to_string() });
        }
        let body = check_response(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, ClientError> {
        let url = format!("{}/api/recipes", self.base_url);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(recipe).send().await?;
        let body = check_response(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Shared response checks: non-success status first, then the declared
/// content type, then the body is handed back for decoding.
async fn check_response(response: Response) -> Result<String, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("missing")
        .to_string();
    if !content_type.contains("application/json") {
        return Err(ClientError::ContentType { content_type });
    }

    Ok(response.text().await?)
}

/// Builder for configuring a [`RecipeClient`]
#[derive(Debug, Default)]
pub struct RecipeClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RecipeClientBuilder {
    /// Set the base URL of the recipe API
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the User-Agent header sent with every request
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `ClientError::Builder` if no base URL was specified.
    pub fn build(self) -> Result<RecipeClient, ClientError> {
        let base_url = self.base_url.ok_or_else(|| {
            ClientError::Builder("No base URL specified. Use .base_url()".to_string())
        })?;

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(
                self.user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            )
            .build()?;

        Ok(RecipeClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}
