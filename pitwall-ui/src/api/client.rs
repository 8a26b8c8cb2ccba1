//! HTTP Dataset Client
//!
//! Fetches a dataset document (and optionally an intent log) and feeds it
//! into the store as intents.

use gloo_net::http::{Request, Response};

use pitwall::dataset::{parse_intents, Dataset};
use pitwall::store::{DriverIntent, Intent, RaceIntent, TeamIntent};

use crate::state::GlobalState;

/// Default dataset URL, served next to the app bundle
pub const DEFAULT_DATASET_URL: &str = "/data/dataset.json";

const DATASET_URL_KEY: &str = "pitwall_dataset_url";

/// Get the dataset URL from local storage or use default
pub fn get_dataset_url() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(DATASET_URL_KEY).ok().flatten())
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_DATASET_URL.to_string())
}

/// Set the dataset URL in local storage
pub fn set_dataset_url(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(DATASET_URL_KEY, url.trim());
        }
    }
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let response: Response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("{} returned HTTP {}", url, response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Read error: {}", e))
}

/// Fetch a dataset document
pub async fn fetch_dataset(url: &str) -> Result<Dataset, String> {
    let text = fetch_text(url).await?;
    Dataset::from_json(&text).map_err(|e| e.to_string())
}

/// Fetch an intent log (JSON array of intents)
pub async fn fetch_intents(url: &str) -> Result<Vec<Intent>, String> {
    let text = fetch_text(url).await?;
    parse_intents(&text).map_err(|e| e.to_string())
}

fn set_loading(state: &GlobalState, loading: bool) {
    state.loading.set(loading);
    state.dispatch_all([
        DriverIntent::SetLoading(loading).into(),
        TeamIntent::SetLoading(loading).into(),
        RaceIntent::SetLoading(loading).into(),
    ]);
}

/// Load the dataset into the store
///
/// Slice loading flags are raised for the duration of the fetch. A failed
/// fetch leaves the collections untouched and records the error on every
/// data slice.
pub async fn load_dataset(state: GlobalState, url: String) {
    set_loading(&state, true);

    match fetch_dataset(&url).await {
        Ok(dataset) => {
            let mut intents: Vec<Intent> = vec![
                DriverIntent::SetError(None).into(),
                TeamIntent::SetError(None).into(),
                RaceIntent::SetError(None).into(),
            ];
            intents.extend(dataset.into_intents());
            state.dispatch_all(intents);
            state.last_sync.set(Some(chrono::Local::now()));
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load dataset: {}", e).into());
            state.dispatch_all([
                DriverIntent::SetError(Some(e.clone())).into(),
                TeamIntent::SetError(Some(e.clone())).into(),
                RaceIntent::SetError(Some(e.clone())).into(),
            ]);
            state.show_error(&e);
        }
    }

    set_loading(&state, false);
}

/// Replay an intent log on top of the current store
pub async fn replay_intents(state: GlobalState, url: String) {
    state.loading.set(true);

    match fetch_intents(&url).await {
        Ok(intents) => {
            let count = intents.len();
            state.dispatch_all(intents);
            state.show_success(&format!("Replayed {} intents", count));
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to replay intents: {}", e).into());
            state.show_error(&e);
        }
    }

    state.loading.set(false);
}
