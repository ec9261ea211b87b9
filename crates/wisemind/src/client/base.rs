use crate::error::{Error, HttpError, InternalError};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;
use wisemind_model::completion::{CompleteLesson, CompletionResult};
use wisemind_model::error::ErrorBody;
use wisemind_model::lesson::LessonWithModule;
use wisemind_model::module::{Module, ModuleWithLessons};
use wisemind_model::user::User;

#[derive(Debug)]
pub struct Config {
    pub base_url: ApiUrl,
}

impl Config {
    /// `base_url` is the server root and must end with a slash.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: ApiUrl { url: base_url },
        }
    }
}

#[derive(Debug)]
pub struct ApiUrl {
    pub url: Url,
}

impl From<ApiUrl> for Url {
    fn from(api_url: ApiUrl) -> Self {
        api_url.url
    }
}

impl ApiUrl {
    pub fn for_api(&self, api_path: &str) -> Result<Url, InternalError> {
        self.url.join("api/")?.join(api_path).map_err(Into::into)
    }

    pub fn logout(&self) -> Result<Url, InternalError> {
        self.url.join("logout").map_err(Into::into)
    }
}

#[async_trait]
pub trait BaseClient: Send + Sync {
    fn get_http_client(&self) -> &reqwest::Client;
    fn get_config(&self) -> &Config;

    async fn api_send_request<T: DeserializeOwned + Send>(&self, request: RequestBuilder) -> Result<T, Error> {
        let response = request.send().await.map_err(HttpError::from)?;
        let status = response.status();
        tracing::debug!(%status, url = %response.url(), "received API response");
        let body = response.bytes().await.map_err(HttpError::from)?;
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body).map_or_else(
                |_| status.canonical_reason().unwrap_or("Request failed").to_owned(),
                |error| error.status_message,
            );
            return Err(HttpError::Status { status, message }.into());
        }
        Ok(serde_json::from_slice(&body)?)
    }

    async fn api_request<T: DeserializeOwned + Send>(&self, method: Method, path: &str) -> Result<T, Error> {
        let url = self.get_config().base_url.for_api(path)?;
        tracing::debug!(%method, %url, "Sending API request");
        self.api_send_request(self.get_http_client().request(method, url)).await
    }
}

#[async_trait]
pub trait PublicClient: BaseClient {
    async fn list_modules(&self) -> Result<Vec<Module>, Error> {
        self.api_request(Method::GET, "modules").await
    }

    async fn get_module(&self, module_id: &str) -> Result<ModuleWithLessons, Error> {
        self.api_request(Method::GET, &format!("modules/{module_id}")).await
    }

    async fn get_lesson(&self, lesson_id: &str) -> Result<LessonWithModule, Error> {
        self.api_request(Method::GET, &format!("lessons/{lesson_id}")).await
    }
}

impl<T> PublicClient for T where T: BaseClient {}

#[async_trait]
pub trait SecureClient: PublicClient {
    fn get_token(&self) -> Arc<RwLock<Option<String>>>;

    async fn fetch_token(&self) -> Result<String, Error> {
        self.get_token().read().await.clone().ok_or(Error::NoSession)
    }

    async fn authenticated(&self, method: Method, url: Url) -> Result<RequestBuilder, Error> {
        let token = self.fetch_token().await?;
        tracing::debug!(%method, %url, "Sending authenticated API request");
        Ok(self.get_http_client().request(method, url).bearer_auth(token))
    }

    async fn fetch_user(&self) -> Result<User, Error> {
        let url = self.get_config().base_url.for_api("user")?;
        self.api_send_request(self.authenticated(Method::GET, url).await?).await
    }

    async fn record_login(&self) -> Result<User, Error> {
        let url = self.get_config().base_url.for_api("user/login")?;
        self.api_send_request(self.authenticated(Method::POST, url).await?).await
    }

    async fn complete_lesson(&self, request: &CompleteLesson) -> Result<CompletionResult, Error> {
        let url = self.get_config().base_url.for_api("lessons/complete")?;
        let request = self.authenticated(Method::POST, url).await?.json(request);
        self.api_send_request(request).await
    }

    /// Revokes the token on the server and forgets it.
    async fn logout(&self) -> Result<(), Error> {
        let url = self.get_config().base_url.logout()?;
        let response = self
            .authenticated(Method::POST, url)
            .await?
            .send()
            .await
            .map_err(HttpError::from)?;
        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                status,
                message: status.canonical_reason().unwrap_or("Request failed").to_owned(),
            }
            .into());
        }
        *self.get_token().write().await = None;
        Ok(())
    }
}

/// The calls the client stores rely on.
#[async_trait]
pub trait Api: Send + Sync {
    async fn fetch_user(&self) -> Result<User, Error>;
    async fn record_login(&self) -> Result<User, Error>;
    async fn list_modules(&self) -> Result<Vec<Module>, Error>;
    async fn get_module(&self, module_id: &str) -> Result<ModuleWithLessons, Error>;
    async fn complete_lesson(&self, request: &CompleteLesson) -> Result<CompletionResult, Error>;
}

#[async_trait]
impl<T> Api for T
where
    T: SecureClient,
{
    async fn fetch_user(&self) -> Result<User, Error> {
        SecureClient::fetch_user(self).await
    }

    async fn record_login(&self) -> Result<User, Error> {
        SecureClient::record_login(self).await
    }

    async fn list_modules(&self) -> Result<Vec<Module>, Error> {
        PublicClient::list_modules(self).await
    }

    async fn get_module(&self, module_id: &str) -> Result<ModuleWithLessons, Error> {
        PublicClient::get_module(self, module_id).await
    }

    async fn complete_lesson(&self, request: &CompleteLesson) -> Result<CompletionResult, Error> {
        SecureClient::complete_lesson(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_urls() {
        let config = Config::new(Url::parse("https://wisemind.app/backend/").unwrap());
        assert_eq!(
            config.base_url.for_api("lessons/complete").unwrap().as_str(),
            "https://wisemind.app/backend/api/lessons/complete"
        );
        assert_eq!(
            config.base_url.logout().unwrap().as_str(),
            "https://wisemind.app/backend/logout"
        );
    }
}
