// localStorage access shared by config and the tutorial flag.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::Storage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no global window")]
    NoWindow,
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("invalid stored json: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsValue> for StorageError {
    fn from(v: JsValue) -> Self {
        StorageError::Js(v.as_string().unwrap_or_else(|| format!("{:?}", v)))
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;

fn local_storage() -> Result<Storage> {
    let win = web_sys::window().ok_or(StorageError::NoWindow)?;
    win.local_storage()?.ok_or(StorageError::Unavailable)
}

pub fn get_raw(key: &str) -> Result<Option<String>> {
    Ok(local_storage()?.get_item(key)?)
}

pub fn set_raw(key: &str, value: &str) -> Result<()> {
    local_storage()?.set_item(key, value)?;
    Ok(())
}

pub fn set_json<T: Serialize>(key: &str, value: &T) -> Result<()> {
    let s = serde_json::to_string(value)?;
    set_raw(key, &s)
}
