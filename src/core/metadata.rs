use serde::{Deserialize, Serialize};

/// Codec value yt-dlp uses to mark a missing audio or video track.
pub const NO_CODEC: &str = "none";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub id: Option<String>,
    pub title: Option<String>,
    pub uploader: Option<String>,
    pub duration: Option<f64>,
    pub view_count: Option<u64>,
    #[serde(default)]
    pub formats: Vec<RawFormat>,
}

impl VideoMetadata {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Unknown")
    }

    pub fn uploader(&self) -> &str {
        self.uploader.as_deref().unwrap_or("Unknown")
    }
}

/// One entry of the format list reported by the extraction tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFormat {
    pub format_id: String,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub height: Option<u32>,
    pub filesize: Option<f64>,
    pub filesize_approx: Option<f64>,
    pub ext: Option<String>,
}

impl RawFormat {
    pub fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some(NO_CODEC)
    }

    pub fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some(NO_CODEC)
    }

    /// Audio and video in one container, downloadable without a merge step.
    pub fn is_muxed(&self) -> bool {
        self.has_video() && self.has_audio()
    }

    pub fn ext(&self) -> &str {
        self.ext.as_deref().unwrap_or("unknown")
    }

    /// Exact size when known, otherwise the approximate one. Zero counts as unknown.
    pub fn size_bytes(&self) -> Option<f64> {
        self.filesize
            .filter(|size| *size > 0.0)
            .or_else(|| self.filesize_approx.filter(|size| *size > 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ytdlp_document() {
        let json = r#"{
            "id": "dQw4w9WgXcQ",
            "title": "Never Gonna Give You Up",
            "uploader": "Rick Astley",
            "duration": 212.0,
            "view_count": 1600000000,
            "like_count": 18000000,
            "formats": [
                {
                    "format_id": "139", "vcodec": "none", "acodec": "mp4a.40.5",
                    "ext": "m4a", "filesize": 1234567
                },
                {
                    "format_id": "18", "vcodec": "avc1.42001E", "acodec": "mp4a.40.2",
                    "height": 360, "ext": "mp4", "filesize_approx": 15728640.5
                }
            ]
        }"#;

        let metadata: VideoMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.title(), "Never Gonna Give You Up");
        assert_eq!(metadata.view_count, Some(1_600_000_000));
        assert_eq!(metadata.formats.len(), 2);
        assert!(!metadata.formats[0].is_muxed());
        assert!(metadata.formats[1].is_muxed());
        assert_eq!(metadata.formats[1].height, Some(360));
        assert_eq!(metadata.formats[1].ext(), "mp4");
    }

    #[test]
    fn test_missing_fields_default() {
        let metadata: VideoMetadata = serde_json::from_str(r#"{"formats": [{"format_id": "x"}]}"#).unwrap();
        assert_eq!(metadata.title(), "Unknown");
        assert_eq!(metadata.uploader(), "Unknown");
        assert_eq!(metadata.formats[0].ext(), "unknown");
        // an absent codec is not the "none" sentinel
        assert!(metadata.formats[0].is_muxed());
    }

    #[test]
    fn test_null_fields_fall_back() {
        let json = r#"{
            "id": null,
            "title": null,
            "uploader": null,
            "formats": [{"format_id": "18", "ext": null, "height": null}]
        }"#;

        let metadata: VideoMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.title(), "Unknown");
        assert_eq!(metadata.uploader(), "Unknown");
        assert_eq!(metadata.formats[0].ext(), "unknown");
        assert_eq!(metadata.formats[0].height, None);
    }

    #[test]
    fn test_size_bytes_fallback() {
        let mut format = RawFormat {
            format_id: "22".to_string(),
            filesize: Some(0.0),
            filesize_approx: Some(2048.0),
            ..Default::default()
        };
        assert_eq!(format.size_bytes(), Some(2048.0));

        format.filesize = Some(4096.0);
        assert_eq!(format.size_bytes(), Some(4096.0));

        format.filesize = None;
        format.filesize_approx = None;
        assert_eq!(format.size_bytes(), None);
    }
}
