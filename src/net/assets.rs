//! Creative asset storage boundary.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use futures::future::{FutureExt, LocalBoxFuture};

use super::types::DownloadLink;
use crate::config::SimulatedDelays;
use crate::util::delay;

const ASSET_BASE_URL: &str = "https://codecraft.academy/assets";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("asset {0} not found")]
    NotFound(u32),
}

/// Resolves a downloadable location for a library asset.
pub trait AssetStore {
    fn download(&self, asset_id: u32) -> LocalBoxFuture<'static, Result<DownloadLink, AssetError>>;
}

/// Store that resolves every known asset to a static URL after a delay.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedAssetStore {
    delays: SimulatedDelays,
}

impl SimulatedAssetStore {
    pub fn new(delays: SimulatedDelays) -> Self {
        Self { delays }
    }
}

impl AssetStore for SimulatedAssetStore {
    fn download(&self, asset_id: u32) -> LocalBoxFuture<'static, Result<DownloadLink, AssetError>> {
        let wait_ms = self.delays.asset_download_ms;
        async move {
            delay::sleep(delay::millis(wait_ms)).await;
            if crate::catalog::library::find_asset(asset_id).is_none() {
                return Err(AssetError::NotFound(asset_id));
            }
            Ok(DownloadLink { asset_id, url: asset_url(asset_id) })
        }
        .boxed_local()
    }
}

fn asset_url(asset_id: u32) -> String {
    format!("{ASSET_BASE_URL}/{asset_id}.zip")
}
