//! Netlify deploys via the zip upload endpoint.
//!
//! `POST {api}/sites/{site_id}/deploys` with the archive as the raw body.
//! Credentials are checked before anything is built or sent.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::publish::archive::zip_single_file;
use crate::publish::{PublishError, Publisher, INDEX_FILE};

const UPLOAD_TIMEOUT_SECS: u64 = 120;

/// The fields of a Netlify deploy record this service reads.
#[derive(Debug, Default, Deserialize)]
pub struct DeployResponse {
    pub id: Option<String>,
    pub deploy_ssl_url: Option<String>,
    pub ssl_url: Option<String>,
    pub url: Option<String>,
}

impl DeployResponse {
    /// Prefers the deploy-specific URL, then the site's HTTPS URL, then its plain URL.
    pub fn live_url(self) -> Option<String> {
        [self.deploy_ssl_url, self.ssl_url, self.url]
            .into_iter()
            .flatten()
            .find(|u| !u.trim().is_empty())
    }
}

#[derive(Clone)]
pub struct NetlifyPublisher {
    client: Client,
    api_url: String,
    auth_token: Option<String>,
    site_id: Option<String>,
}

impl NetlifyPublisher {
    pub fn new(config: &Config) -> Result<Self, PublishError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(UPLOAD_TIMEOUT_SECS))
                .build()?,
            api_url: config.netlify_api_url.trim_end_matches('/').to_string(),
            auth_token: config.netlify_auth_token.clone(),
            site_id: config.netlify_site_id.clone(),
        })
    }

    fn credentials(&self) -> Result<(&str, &str), PublishError> {
        let token = self
            .auth_token
            .as_deref()
            .ok_or(PublishError::MissingConfig("NETLIFY_AUTH_TOKEN"))?;
        let site_id = self
            .site_id
            .as_deref()
            .ok_or(PublishError::MissingConfig("NETLIFY_SITE_ID"))?;
        Ok((token, site_id))
    }

    fn deploys_url(&self, site_id: &str) -> String {
        format!("{}/sites/{}/deploys", self.api_url, site_id)
    }
}

#[async_trait]
impl Publisher for NetlifyPublisher {
    async fn publish(&self, html: &str) -> Result<String, PublishError> {
        let (token, site_id) = self.credentials()?;

        let archive = zip_single_file(INDEX_FILE, html.as_bytes())?;
        info!(
            "Uploading deploy archive to site {site_id} ({} bytes)",
            archive.len()
        );

        let response = self
            .client
            .post(self.deploys_url(site_id))
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, "application/zip")
            .body(archive)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Netlify deploy failed with {status}: {body}");
            return Err(PublishError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let deploy: DeployResponse = response.json().await?;
        if let Some(id) = &deploy.id {
            info!("Netlify deploy {id} created");
        }
        deploy.live_url().ok_or(PublishError::MissingUrl)
    }
}
