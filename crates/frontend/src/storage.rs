//! Browser local storage implementation of the token store.

use project_client::{ClientError, Result, TokenStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Keeps the token in `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

fn storage_error(err: JsValue) -> ClientError {
    ClientError::Storage(format!("{err:?}"))
}

fn local_storage() -> Result<Storage> {
    web_sys::window()
        .ok_or_else(|| ClientError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(storage_error)?
        .ok_or_else(|| ClientError::Storage("local storage unavailable".to_string()))
}

impl TokenStore for LocalTokenStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        local_storage()?.get_item(key).map_err(storage_error)
    }

    fn save(&self, key: &str, token: &str) -> Result<()> {
        local_storage()?.set_item(key, token).map_err(storage_error)
    }
}
