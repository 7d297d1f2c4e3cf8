//! Local image preview: read the picked file into a base64 data URL.

use gloo_file::futures::read_as_data_url;
use web_sys::File;

use crate::types::{AppError, AppResult};

/// Read `file` as a `data:<mime>;base64,...` URL suitable for `<img src>`.
pub async fn read_preview(file: &File) -> AppResult<String> {
    let blob = gloo_file::File::from(file.clone());
    read_as_data_url(&blob)
        .await
        .map_err(|e| AppError::FileRead(e.to_string()))
}

/// Human-readable file size for the preview caption.
pub fn format_size(bytes: f64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes.max(0.0);
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", size as u64, UNITS[unit])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0.0), "0 B");
        assert_eq!(format_size(512.0), "512 B");
        assert_eq!(format_size(2048.0), "2.0 KB");
        assert_eq!(format_size(5.5 * 1024.0 * 1024.0), "5.5 MB");
    }
}
