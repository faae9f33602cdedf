use gloo_net::http::{Request, Response};
use plators_client::{ListQuery, Post, PostPayload};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use crate::endpoint::{COLLECTION_URL, collection_url, item_url, list_url};

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

/// Пишет сообщение в консоль браузера.
pub(crate) fn log_error(context: &str, err: &ApiError) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {err}")));
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

async fn parse_error_body(response: Response) -> ApiError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) if text.trim().is_empty() => format!("HTTP ошибка {status}"),
        Err(_) => text,
    };

    ApiError::Http { status, message }
}

async fn checked(response: Response) -> Result<Response, ApiError> {
    if !response.ok() {
        return Err(parse_error_body(response).await);
    }
    Ok(response)
}

pub(crate) async fn list_posts(query: ListQuery) -> Result<Vec<Post>, ApiError> {
    let response = Request::get(&list_url(COLLECTION_URL, &query))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    parse_json(checked(response).await?).await
}

pub(crate) async fn create_post(payload: &PostPayload) -> Result<Post, ApiError> {
    let response = Request::post(&collection_url(COLLECTION_URL))
        .json(payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    parse_json(checked(response).await?).await
}

pub(crate) async fn update_post(id: i64, payload: &PostPayload) -> Result<Post, ApiError> {
    let response = Request::put(&item_url(COLLECTION_URL, id))
        .json(payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    parse_json(checked(response).await?).await
}

pub(crate) async fn delete_post(id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&item_url(COLLECTION_URL, id))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    checked(response).await?;
    Ok(())
}
