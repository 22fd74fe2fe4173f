/// Image asset store
///
/// Resolves the catalog's image references into iced image handles, all up
/// front at startup (catalogs are bounded at tens of items). Records
/// flagged as placeholders, and any reference that fails to load, get a
/// deterministically generated gradient so the gallery always has
/// something to show; a failed load is logged, never fatal.
use crate::state::catalog::{Catalog, PhotoRecord};
use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::collections::HashMap;
use tracing::warn;

/// Maximum edge of grid thumbnails
const THUMBNAIL_SIZE: u32 = 300;

/// Maximum edge of the detail image
const FULLSIZE_MAX: u32 = 1200;

#[derive(Debug, Clone)]
pub struct AssetStore {
    thumbnails: HashMap<String, Handle>,
    fullsizes: HashMap<String, Handle>,
    /// Shown for references that were never preloaded
    fallback: Handle,
}

impl AssetStore {
    /// Decode and resize every catalog image once
    pub fn preload(catalog: &Catalog) -> Self {
        let mut thumbnails = HashMap::new();
        let mut fullsizes = HashMap::new();

        for photo in catalog.photos() {
            thumbnails
                .entry(photo.thumbnail.clone())
                .or_insert_with(|| load_tier(photo, &photo.thumbnail, THUMBNAIL_SIZE));
            fullsizes
                .entry(photo.fullsize.clone())
                .or_insert_with(|| load_tier(photo, &photo.fullsize, FULLSIZE_MAX));
        }

        Self {
            thumbnails,
            fullsizes,
            fallback: placeholder_handle("fotogram", THUMBNAIL_SIZE, THUMBNAIL_SIZE),
        }
    }

    pub fn thumbnail(&self, reference: &str) -> Handle {
        self.thumbnails
            .get(reference)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }

    pub fn fullsize(&self, reference: &str) -> Handle {
        self.fullsizes
            .get(reference)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Load one size tier for a record, falling back to a generated
/// placeholder when the record asks for one or the file will not decode
fn load_tier(photo: &PhotoRecord, reference: &str, max_size: u32) -> Handle {
    if photo.is_placeholder {
        return placeholder_handle(&photo.caption, max_size, max_size * 3 / 4);
    }
    match image::open(reference) {
        Ok(img) => {
            let resized = img.resize(max_size, max_size, FilterType::Lanczos3);
            let rgba = resized.to_rgba8();
            let (width, height) = rgba.dimensions();
            Handle::from_rgba(width, height, rgba.into_raw())
        }
        Err(err) => {
            warn!(reference, %err, "failed to load image, using placeholder");
            placeholder_handle(&photo.caption, max_size, max_size * 3 / 4)
        }
    }
}

fn placeholder_handle(seed: &str, width: u32, height: u32) -> Handle {
    Handle::from_rgba(width, height, placeholder_rgba(seed, width, height))
}

/// A vertical gradient in a hue derived from the seed. Deterministic so a
/// record keeps its placeholder color across runs.
fn placeholder_rgba(seed: &str, width: u32, height: u32) -> Vec<u8> {
    let hash = seed
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    let (r, g, b) = hue_to_rgb((hash % 360) as f32);

    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        // Darker at the top, lighter toward the bottom.
        let shade = if height > 1 {
            0.35 + 0.5 * (y as f32 / (height - 1) as f32)
        } else {
            0.6
        };
        for _ in 0..width {
            pixels.push((r * shade * 255.0) as u8);
            pixels.push((g * shade * 255.0) as u8);
            pixels.push((b * shade * 255.0) as u8);
            pixels.push(255);
        }
    }
    pixels
}

/// Map a hue in degrees to RGB at full saturation, moderate lightness
fn hue_to_rgb(hue: f32) -> (f32, f32, f32) {
    let h = hue / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    }
}
