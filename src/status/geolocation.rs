// ABOUTME: Resolves a public IP to "<country>, <city>" with one HTTP lookup.
// ABOUTME: Never fails: a service miss is Unknown, anything else going wrong is LookupFailed.

use super::Location;
use crate::error::Result;
use crate::types::PublicIp;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Looks up an approximate location for an address.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self, ip: &PublicIp) -> Location;
}

/// Response body of the lookup service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeoResponse {
    pub status: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Reason given alongside a "fail" status.
    #[serde(default)]
    pub message: Option<String>,
}

impl GeoResponse {
    /// Map the body to a location.
    ///
    /// A successful answer that lacks the country or city field is treated
    /// as malformed.
    pub fn into_location(self) -> Location {
        if self.status == "fail" {
            return Location::Unknown;
        }
        match (self.country, self.city) {
            (Some(country), Some(city)) => Location::Place { country, city },
            _ => Location::LookupFailed,
        }
    }
}

/// Geolocation over HTTP against an ip-api.com compatible endpoint.
pub struct HttpGeoLocator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGeoLocator {
    /// `base_url` is the endpoint prefix; the address is appended to it.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url_for(&self, ip: &PublicIp) -> String {
        format!("{}{}", self.base_url, ip)
    }

    async fn fetch(&self, ip: &PublicIp) -> reqwest::Result<GeoResponse> {
        self.client
            .get(self.url_for(ip))
            .send()
            .await?
            .error_for_status()?
            .json::<GeoResponse>()
            .await
    }
}

#[async_trait]
impl GeoLocator for HttpGeoLocator {
    async fn locate(&self, ip: &PublicIp) -> Location {
        match self.fetch(ip).await {
            Ok(response) => {
                if let Some(reason) = response.message.as_deref() {
                    tracing::debug!(%ip, reason, "geolocation service had no match");
                }
                response.into_location()
            }
            Err(e) => {
                tracing::debug!(%ip, error = %e, "geolocation lookup failed");
                Location::LookupFailed
            }
        }
    }
}
