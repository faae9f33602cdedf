//! Адреса коллекции постов. Модуль не зависит от браузера и тестируется на хосте.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use plators_client::ListQuery;

pub(crate) const COLLECTION_URL: &str = match option_env!("PLATORS_API_URL") {
    Some(value) => value,
    None => "http://127.0.0.1:8080/api/posts",
};

fn base(collection: &str) -> &str {
    collection.trim_end_matches('/')
}

pub(crate) fn list_url(collection: &str, query: &ListQuery) -> String {
    let mut url = format!("{}?published={}", base(collection), query.published);
    if let Some(category) = query.category {
        url.push_str("&category=");
        url.push_str(category.as_str());
    }
    url
}

pub(crate) fn collection_url(collection: &str) -> String {
    base(collection).to_string()
}

pub(crate) fn item_url(collection: &str, id: i64) -> String {
    format!("{}/{id}", base(collection))
}
