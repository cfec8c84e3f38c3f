//! Item Requests
//!
//! Reads propagate their error to the page; writes hand theirs to the
//! mutation actions, which turn them into notifications.

use reqwest::{Response, Url};
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::filter::{QUERY_PARAM, STATUS_PARAM};
use crate::models::{FilterState, Item, ItemStatus, NewItem};

const ITEMS: &str = "items";

#[derive(Deserialize)]
struct ListResponse {
    data: Vec<Item>,
}

#[derive(Serialize)]
struct StatusBody {
    status: ItemStatus,
}

impl ApiClient {
    /// `GET /items` always carries both parameters, empty when unset
    pub fn list_url(&self, filter: &FilterState) -> Result<Url, ApiError> {
        let mut url = self.url(&[ITEMS])?;
        url.query_pairs_mut()
            .append_pair(QUERY_PARAM, &filter.query)
            .append_pair(STATUS_PARAM, filter.status.as_str());
        Ok(url)
    }

    pub fn item_url(&self, id: &str) -> Result<Url, ApiError> {
        self.url(&[ITEMS, id])
    }

    pub async fn list(&self, filter: &FilterState) -> Result<Vec<Item>, ApiError> {
        let url = self.list_url(filter)?;
        log::debug!("[API] GET {}", url);
        let response = ensure_success(self.http.get(url).send().await?).await?;
        let body: ListResponse = response.json().await?;
        Ok(body.data)
    }

    pub async fn create(&self, item: &NewItem) -> Result<(), ApiError> {
        let url = self.url(&[ITEMS])?;
        log::debug!("[API] POST {}", url);
        ensure_success(self.http.post(url).json(item).send().await?).await?;
        Ok(())
    }

    /// Writes the opposite of `current` and returns it
    pub async fn set_status(&self, id: &str, current: ItemStatus) -> Result<ItemStatus, ApiError> {
        let url = self.item_url(id)?;
        let status = current.toggled();
        log::debug!("[API] PUT {} status={}", url, status);
        ensure_success(self.http.put(url).json(&StatusBody { status }).send().await?).await?;
        Ok(status)
    }

    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        log::debug!("[API] DELETE {}", url);
        ensure_success(self.http.delete(url).send().await?).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status.as_u16(), &body);
    log::warn!("[API] {}", err);
    Err(err)
}
