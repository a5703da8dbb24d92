use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use types::prelude::*;

use super::envelope::read_envelope;
use super::http::normalize_base_url;
use super::{SourceError, UserSource};

const SERVICE: &str = "User Service";

/// HTTP client for the user directory
#[derive(Clone)]
pub struct UserServiceClient {
    http_client: Client,
    base_url: String,
}

impl UserServiceClient {
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: normalize_base_url(base_url),
        }
    }

    fn transport(source: reqwest::Error) -> SourceError {
        SourceError::Transport {
            service: SERVICE,
            source,
        }
    }
}

#[async_trait]
impl UserSource for UserServiceClient {
    async fn get_user(&self, id: UserId) -> Result<Option<UserRecord>, SourceError> {
        let res = self
            .http_client
            .get(format!("{}/users/{}", self.base_url, id))
            .send()
            .await
            .map_err(Self::transport)?;

        // 404 is an answer, not a failure
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        read_envelope::<UserRecord>(SERVICE, res)
            .await?
            .into_record(SERVICE)
            .map(Some)
    }

    async fn create_user(&self, user: &NewUser) -> Result<UserRecord, SourceError> {
        let res = self
            .http_client
            .post(format!("{}/users", self.base_url))
            .form(&[("name", user.name())])
            .send()
            .await
            .map_err(Self::transport)?;

        read_envelope::<UserRecord>(SERVICE, res)
            .await?
            .into_record(SERVICE)
    }
}
