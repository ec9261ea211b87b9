use crate::client::base::{BaseClient, Config, SecureClient};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Client with a fixed bearer token, as issued by `wisemind issue-token`.
pub struct SimpleClient {
    config: Config,
    http_client: reqwest::Client,
    token: Arc<RwLock<Option<String>>>,
}

impl SimpleClient {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
            token: Arc::default(),
        }
    }

    #[must_use]
    pub fn with_token(config: Config, token: String) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
            ..Self::new(config)
        }
    }

    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }
}

impl BaseClient for SimpleClient {
    fn get_http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

impl SecureClient for SimpleClient {
    fn get_token(&self) -> Arc<RwLock<Option<String>>> {
        Arc::clone(&self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use test_log::test;
    use url::Url;

    #[test(tokio::test)]
    async fn test_token_required() {
        let client = SimpleClient::new(Config::new(Url::parse("http://localhost:3030/").unwrap()));
        assert!(matches!(client.fetch_token().await, Err(Error::NoSession)));

        client.set_token(Some("abc".to_owned())).await;
        assert_eq!(client.fetch_token().await.unwrap(), "abc");

        let client = SimpleClient::with_token(
            Config::new(Url::parse("http://localhost:3030/").unwrap()),
            "xyz".to_owned(),
        );
        assert_eq!(client.fetch_token().await.unwrap(), "xyz");
    }
}
