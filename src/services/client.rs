use crate::config::Config;
use crate::model::ResourceRecord;
use crate::services::{ApiError, ListPayload};
use gloo_net::http::Request;

/// Thin wrapper over the dashboard's REST API. One instance is shared by
/// a view for its initial read and for the writes behind edit/delete.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        ApiClient { config }
    }

    /// Fetches the full collection for `T`, accepting either payload shape.
    pub async fn list<T>(&self) -> Result<Vec<T>, ApiError>
    where
        T: ResourceRecord,
    {
        let url = self.config.endpoint(T::PATH);
        log::debug!("fetching {}", url);
        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        let body = response.text().await?;
        let payload: ListPayload<T> = serde_json::from_str(&body)?;
        Ok(payload.into_records())
    }

    /// Writes one edited record back by identifier.
    pub async fn update<T>(&self, record: &T) -> Result<(), ApiError>
    where
        T: ResourceRecord,
    {
        let url = self.record_url::<T>(record.identifier());
        log::debug!("updating {}", url);
        let response = Request::put(&url).json(record)?.send().await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    /// Deletes one record by identifier.
    pub async fn delete<T>(&self, id: &str) -> Result<(), ApiError>
    where
        T: ResourceRecord,
    {
        let url = self.record_url::<T>(id);
        log::debug!("deleting {}", url);
        let response = Request::delete(&url).send().await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    fn record_url<T>(&self, id: &str) -> String
    where
        T: ResourceRecord,
    {
        format!("{}{}/", self.config.endpoint(T::PATH), id)
    }
}
