//! Locally remembered sign-in.
//!
//! The signed-in identity is kept as JSON under [`SESSION_KEY`]: in
//! `localStorage` in the browser, in a process-local slot everywhere else.

use thiserror::Error;
use ui::UserInfo;

pub const SESSION_KEY: &str = "surfacesheet.user";

#[derive(Debug, Error)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum SessionError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage failed: {0}")]
    Storage(String),
    #[error("stored session is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Read the remembered user, if any.
pub fn load_user() -> Result<Option<UserInfo>, SessionError> {
    match backend::read()? {
        Some(raw) => Ok(Some(decode(&raw)?)),
        None => Ok(None),
    }
}

/// Remembered user for startup. A corrupt or unreadable session is
/// discarded and treated as signed out.
pub fn resolve_user() -> Option<UserInfo> {
    match load_user() {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Discarding stored session: {}", e);
            if let Err(e) = clear() {
                tracing::error!("Failed to clear session: {}", e);
            }
            None
        }
    }
}

pub fn store_user(user: &UserInfo) -> Result<(), SessionError> {
    let raw = serde_json::to_string(user)?;
    backend::write(&raw)
}

pub fn clear() -> Result<(), SessionError> {
    backend::remove()
}

fn decode(raw: &str) -> Result<UserInfo, SessionError> {
    Ok(serde_json::from_str(raw)?)
}

/// Build an identity from the sign-in form, rejecting obviously bad input.
pub fn user_from_form(name: &str, email: &str) -> Result<UserInfo, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Name is required");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email");
    }
    Ok(UserInfo {
        id: email.to_lowercase(),
        email: email.to_string(),
        name: Some(name.to_string()),
    })
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::{SessionError, SESSION_KEY};

    fn storage() -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .ok_or(SessionError::Unavailable)?
            .local_storage()
            .map_err(|e| SessionError::Storage(format!("{e:?}")))?
            .ok_or(SessionError::Unavailable)
    }

    pub(super) fn read() -> Result<Option<String>, SessionError> {
        storage()?
            .get_item(SESSION_KEY)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    pub(super) fn write(raw: &str) -> Result<(), SessionError> {
        storage()?
            .set_item(SESSION_KEY, raw)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    pub(super) fn remove() -> Result<(), SessionError> {
        storage()?
            .remove_item(SESSION_KEY)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    use super::{SessionError, SESSION_KEY};

    static STORE: Mutex<BTreeMap<&'static str, String>> = Mutex::new(BTreeMap::new());

    fn store() -> Result<MutexGuard<'static, BTreeMap<&'static str, String>>, SessionError> {
        STORE
            .lock()
            .map_err(|e| SessionError::Storage(e.to_string()))
    }

    pub(super) fn read() -> Result<Option<String>, SessionError> {
        Ok(store()?.get(SESSION_KEY).cloned())
    }

    pub(super) fn write(raw: &str) -> Result<(), SessionError> {
        store()?.insert(SESSION_KEY, raw.to_string());
        Ok(())
    }

    pub(super) fn remove() -> Result<(), SessionError> {
        store()?.remove(SESSION_KEY);
        Ok(())
    }
}
