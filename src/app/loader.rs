// SPDX-License-Identifier: MPL-2.0
//! Asynchronous image loading.
//!
//! Every result is tagged with the id it was started for, so the viewer can
//! tell a completion for the current target from a stale one.

use crate::domain::gallery::{ImageId, ImageRecord};
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;

/// Decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub id: ImageId,
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Decodes encoded bytes (PNG, JPEG, ...) into an RGBA handle.
pub fn decode(id: ImageId, bytes: &[u8]) -> Result<LoadedAsset> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(LoadedAsset {
        id,
        handle: image::Handle::from_rgba(width, height, pixels),
        width,
        height,
    })
}

/// Reads and decodes the asset behind `record`.
pub async fn load_asset(record: ImageRecord) -> (ImageId, Result<LoadedAsset>) {
    let id = record.id().clone();
    let result = load(id.clone(), record.source_url()).await;
    if let Err(err) = &result {
        log::warn!("failed to load {id}: {err}");
    }
    (id, result)
}

async fn load(id: ImageId, source: &str) -> Result<LoadedAsset> {
    let bytes = tokio::fs::read(source).await?;
    tokio::task::spawn_blocking(move || decode(id, &bytes))
        .await
        .unwrap_or_else(|e| Err(Error::Image(format!("Decode task failed: {e}"))))
}
