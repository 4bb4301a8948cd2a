use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use serde_json::Value;

/// Loading animation descriptor used while the submit pause plays.
const LOADING_ASSET_URL: &str =
    "https://assets4.lottiefiles.com/packages/lf20_fL5QbCnATl.json";

/// Give up on the fetch well before a user would notice it missing.
const FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// Fetches the animation descriptor. Any transport error, non-success
/// status, or unparsable body degrades to `None`; the submit flow then
/// falls back to the shorter pause with no payload.
pub fn fetch_loading_asset() -> Option<Value> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .ok()?;
    let response = client.get(LOADING_ASSET_URL).send().ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json().ok()
}

/// Starts the fetch on its own thread so the interaction loop never waits
/// on the network. The receiver yields at most one value; until it does,
/// the asset is treated as absent.
pub fn spawn_fetch() -> Receiver<Option<Value>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // The receiver may be gone if the app quit before the fetch finished.
        let _ = tx.send(fetch_loading_asset());
    });
    rx
}
