use crate::core::RawFormat;
use std::collections::HashSet;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// One selectable quality tier, derived from the first muxed format seen at its height.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionOption {
    pub label: String,
    pub height: u32,
    pub format_id: String,
    /// 0 when the size is unknown.
    pub size_megabytes: f64,
    pub ext: String,
}

impl ResolutionOption {
    fn from_format(format: &RawFormat, height: u32) -> Self {
        Self {
            label: format!("{}p", height),
            height,
            format_id: format.format_id.clone(),
            size_megabytes: format.size_bytes().map_or(0.0, |bytes| bytes / BYTES_PER_MEGABYTE),
            ext: format.ext().to_string(),
        }
    }

    pub fn size_known(&self) -> bool {
        self.size_megabytes > 0.0
    }
}

/// Reduce the raw format list to muxed resolution tiers, highest first.
///
/// Formats without a height, or with a zero height, are dropped. When several formats share a height the
/// first one encountered is kept, regardless of its quality.
pub fn reduce_formats(formats: &[RawFormat]) -> Vec<ResolutionOption> {
    let mut seen = HashSet::new();
    let mut options: Vec<ResolutionOption> = formats
        .iter()
        .filter(|f| f.is_muxed())
        .filter_map(|f| f.height.filter(|height| *height > 0).map(|height| (f, height)))
        .filter(|(_, height)| seen.insert(*height))
        .map(|(f, height)| ResolutionOption::from_format(f, height))
        .collect();

    options.sort_by(|a, b| b.height.cmp(&a.height));
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_height(label: &str) -> Option<u32> {
        let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    fn muxed(id: &str, height: Option<u32>) -> RawFormat {
        RawFormat {
            format_id: id.to_string(),
            vcodec: Some("avc1".to_string()),
            acodec: Some("mp4a".to_string()),
            height,
            ext: Some("mp4".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(reduce_formats(&[]).is_empty());
    }

    #[test]
    fn test_first_wins_and_descending() {
        let formats = vec![muxed("A", Some(480)), muxed("B", Some(480)), muxed("C", Some(720))];
        let options = reduce_formats(&formats);

        let reduced: Vec<(u32, &str)> = options.iter().map(|o| (o.height, o.format_id.as_str())).collect();
        assert_eq!(reduced, vec![(720, "C"), (480, "A")]);
        assert_eq!(options[0].label, "720p");
    }

    #[test]
    fn test_drops_unmuxed_and_heightless() {
        let mut video_only = muxed("137", Some(1080));
        video_only.acodec = Some("none".to_string());
        let mut audio_only = muxed("140", None);
        audio_only.vcodec = Some("none".to_string());
        let heightless = muxed("sb0", None);

        let formats = vec![video_only, audio_only, heightless, muxed("18", Some(360))];
        let options = reduce_formats(&formats);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].format_id, "18");
    }

    #[test]
    fn test_drops_zero_height() {
        let options = reduce_formats(&[muxed("sb", Some(0)), muxed("18", Some(360))]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "360p");
        assert!(options.iter().all(|o| o.height > 0));
    }

    #[test]
    fn test_missing_ext_is_unknown() {
        let mut format = muxed("18", Some(360));
        format.ext = None;
        assert_eq!(reduce_formats(&[format])[0].ext, "unknown");
    }

    #[test]
    fn test_unmuxed_duplicate_does_not_claim_height() {
        let mut video_only = muxed("136", Some(720));
        video_only.acodec = Some("none".to_string());

        let options = reduce_formats(&[video_only, muxed("22", Some(720))]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].format_id, "22");
    }

    #[test]
    fn test_size_in_megabytes() {
        let mut exact = muxed("22", Some(720));
        exact.filesize = Some(5.0 * 1024.0 * 1024.0);
        let mut approx = muxed("18", Some(360));
        approx.filesize_approx = Some(1024.0 * 1024.0 / 2.0);
        let unknown = muxed("17", Some(144));

        let options = reduce_formats(&[exact, approx, unknown]);
        assert_eq!(options[0].size_megabytes, 5.0);
        assert_eq!(options[1].size_megabytes, 0.5);
        assert_eq!(options[2].size_megabytes, 0.0);
        assert!(!options[2].size_known());
    }

    #[test]
    fn test_labels_unique_and_sorted() {
        let heights = [360, 1080, 144, 720, 360, 240, 1080, 480];
        let formats: Vec<RawFormat> = heights
            .iter()
            .enumerate()
            .map(|(i, h)| muxed(&i.to_string(), Some(*h)))
            .collect();

        let options = reduce_formats(&formats);
        let labels: HashSet<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels.len(), options.len());
        assert!(options.windows(2).all(|w| label_height(&w[0].label) > label_height(&w[1].label)));
    }
}
