use crate::config::ApiConfig;
use crate::team::types::{Team, TeamId};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum TeamApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Team {0} not found")]
    NotFound(TeamId),
    #[error("Not authorized to manage teams (HTTP {0})")]
    Unauthorized(u16),
    #[error("Server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

pub type Result<T> = std::result::Result<T, TeamApiError>;

/// Remote team operations. `delete` is the capability the delete dialog
/// needs; `list` feeds the team list that opens it.
#[async_trait]
pub trait TeamResource: Send + Sync {
    async fn list(&self) -> Result<Vec<Team>>;

    async fn delete(&self, id: TeamId) -> Result<()>;
}

pub struct RestTeamResource {
    base_url: String,
    bearer_token: Option<String>,
    client: Client,
}

impl RestTeamResource {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let base_url = api.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(TeamApiError::InvalidBaseUrl(api.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs.max(1)))
            .build()?;

        info!("Team API client initialized (base_url={})", base_url);

        Ok(Self {
            base_url,
            bearer_token: api.bearer_token.clone().filter(|t| !t.trim().is_empty()),
            client,
        })
    }

    fn teams_url(&self) -> String {
        format!("{}/api/teams", self.base_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn normalize_error_message(msg: &str) -> String {
    msg.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

async fn check_status(response: Response, id: Option<TeamId>) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(TeamApiError::NotFound(id)),
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) => {
            Err(TeamApiError::Unauthorized(status.as_u16()))
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            let message = normalize_error_message(&body);
            Err(TeamApiError::Status {
                status: status.as_u16(),
                message: if message.is_empty() {
                    status.canonical_reason().unwrap_or("unknown").to_string()
                } else {
                    message
                },
            })
        }
    }
}

#[async_trait]
impl TeamResource for RestTeamResource {
    async fn list(&self) -> Result<Vec<Team>> {
        let response = self.authorize(self.client.get(self.teams_url())).send().await?;
        let teams = check_status(response, None)
            .await?
            .json::<Vec<Team>>()
            .await?;

        debug!("Fetched {} teams", teams.len());
        Ok(teams)
    }

    async fn delete(&self, id: TeamId) -> Result<()> {
        let url = format!("{}/{}", self.teams_url(), id);
        let response = self.authorize(self.client.delete(url)).send().await?;
        check_status(response, Some(id)).await?;

        info!("Deleted team {}", id);
        Ok(())
    }
}
