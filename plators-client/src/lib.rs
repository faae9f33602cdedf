//! Клиентская библиотека блога PLATORS.
//!
//! Содержит модель поста, HTTP-клиент удалённой коллекции (`reqwest`, фича
//! `http`), клиентские фильтры вкладок, представление карточек и состояние
//! двух экранов: публичной ленты и админки.
//!
//! Состояние экранов не делает сетевых вызовов само: нативные фронтенды
//! используют драйверы [`AdminScreen`]/[`PublicScreen`] поверх
//! [`PostCollection`], wasm-фронтенд ведёт те же состояния через свои запросы.
#![warn(missing_docs)]

mod collection;
mod error;
pub mod filter;
#[cfg(feature = "http")]
mod http_client;
mod models;
pub mod present;
pub mod screen;

pub use collection::PostCollection;
pub use error::{ClientError, ClientResult};
pub use filter::{AdminFilter, CategoryFilter, TabCounts};
#[cfg(feature = "http")]
pub use http_client::PostsClient;
pub use models::{Category, FormField, ListQuery, ParseValueError, Post, PostDraft, PostPayload};
pub use present::{CardCover, PostCard, format_date};
pub use screen::{
    AdminScreen, AdminState, ListingView, LoadState, LoadTicket, NOTICE_LIMIT, Notice, NoticeLevel,
    PublicScreen, PublicState, SaveKind, SaveRequest,
};
