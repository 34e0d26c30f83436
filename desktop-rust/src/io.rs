use anyhow::{Context, Result};

use crate::model::ThumbData;

pub const THUMB_SIZE: (u32, u32) = (240, 160);

/// 相対パスの画像URLをAPIのベースURLで補完
pub fn resolve_image_url(base_url: &str, img_url: &str) -> String {
    if img_url.trim().is_empty() {
        return String::new();
    }
    if img_url.starts_with("http://") || img_url.starts_with("https://") {
        return img_url.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        img_url.trim_start_matches('/')
    )
}

pub fn fetch_thumbnail(url: &str) -> Result<ThumbData> {
    let bytes = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.bytes())
        .with_context(|| format!("download {url}"))?;
    let image = image::load_from_memory(&bytes).with_context(|| format!("decode {url}"))?;
    let thumb = image.thumbnail(THUMB_SIZE.0, THUMB_SIZE.1);
    Ok(ThumbData {
        url: url.to_string(),
        size: [thumb.width() as usize, thumb.height() as usize],
        pixels: thumb.to_rgba8().into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_is_kept() {
        assert_eq!(
            resolve_image_url("http://localhost:8000", "https://cdn.test/a.jpg"),
            "https://cdn.test/a.jpg"
        );
    }

    #[test]
    fn relative_url_uses_base() {
        assert_eq!(
            resolve_image_url("http://localhost:8000/", "/static/a.jpg"),
            "http://localhost:8000/static/a.jpg"
        );
        assert_eq!(
            resolve_image_url("http://localhost:8000", "static/a.jpg"),
            "http://localhost:8000/static/a.jpg"
        );
    }

    #[test]
    fn missing_image_resolves_to_empty() {
        assert_eq!(resolve_image_url("http://localhost:8000", ""), "");
        assert_eq!(resolve_image_url("http://localhost:8000", "  "), "");
    }
}
