//! HTTP-клиент REST-коллекций `/{version}/{collection}`
//!
//! Every request carries the session cookie and asks for JSON. Non-2xx
//! responses are classified into [`ApiError`] from the status and body.

use crate::shared::api_utils::{api_url, item_path};
use async_trait::async_trait;
use contracts::domain::common::{decode_list, decode_one, Listable};
use contracts::shared::api_error::ApiError;
use contracts::shared::listing::ResourceApi;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use web_sys::RequestCredentials;

fn with_session(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include)
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} {} -> {}", response.url(), status, body);
    Err(ApiError::from_response(status, &body))
}

/// GET `url` and return the JSON body
pub async fn get_json(url: &str) -> Result<Value, ApiError> {
    let response = with_session(Request::get(url)).send().await.map_err(network)?;
    check(response)
        .await?
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send_json(builder: RequestBuilder, body: &impl Serialize) -> Result<(), ApiError> {
    let response = with_session(builder)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    check(response).await.map(|_| ())
}

/// REST-клиент одного вида ресурса
pub struct HttpResourceApi<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> HttpResourceApi<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for HttpResourceApi<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for HttpResourceApi<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HttpResourceApi<T> {}

impl<T: Listable> HttpResourceApi<T> {
    fn collection_url() -> String {
        api_url(T::kind().collection())
    }

    fn item_url(id: &str) -> String {
        api_url(&item_path(T::kind().collection(), id))
    }
}

#[async_trait(?Send)]
impl<T> ResourceApi<T> for HttpResourceApi<T>
where
    T: Listable + Serialize + DeserializeOwned,
{
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        let body = get_json(&Self::collection_url()).await?;
        decode_list(T::kind(), body)
    }

    async fn fetch(&self, id: &str) -> Result<T, ApiError> {
        let body = get_json(&Self::item_url(id)).await?;
        decode_one(T::kind(), body)
    }

    async fn create(&self, item: &T) -> Result<(), ApiError> {
        send_json(Request::post(&Self::collection_url()), item).await
    }

    async fn replace(&self, id: &str, item: &T) -> Result<(), ApiError> {
        send_json(Request::put(&Self::item_url(id)), item).await
    }

    async fn patch(&self, id: &str, changes: Value) -> Result<(), ApiError> {
        send_json(Request::patch(&Self::item_url(id)), &changes).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = with_session(Request::delete(&Self::item_url(id)))
            .send()
            .await
            .map_err(network)?;
        check(response).await.map(|_| ())
    }
}
