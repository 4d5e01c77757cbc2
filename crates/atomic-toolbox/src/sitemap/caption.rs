//! Caption derivation for image records.

use super::types::{ImageId, ImageRecord};
use crate::text::scrub::scrub;
use crate::text::{ListFormatter, WordInput};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use tracing::debug;

/// Caption strings for one image, ready to embed in markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageCaption {
    pub id: ImageId,
    /// Caption sentence, e.g. `"icon related to cat and dog"`.
    pub title: String,
    /// Plain sentence, e.g. `"cat and dog"`.
    pub alt: String,
}

/// Raw caption text: alt, then title, then the file name stem of the source URL.
///
/// Alt and title are scrubbed first. A candidate only wins when it tokenizes to
/// at least one word, so `"&"` falls through to the next one. Returns an empty
/// string when nothing yields words.
pub fn caption_source(formatter: &ListFormatter, record: &ImageRecord) -> String {
    let alt = record.alt.as_deref().map(|s| scrub(s, false)).unwrap_or_default();
    let title = record.title.as_deref().map(|s| scrub(s, false)).unwrap_or_default();
    let stem = file_stem(&record.source_url);

    [alt, title, stem]
        .into_iter()
        .find(|candidate| !formatter.words(&WordInput::Text(candidate.clone())).is_empty())
        .unwrap_or_default()
}

/// File name without extension from the percent-decoded path of `source_url`.
pub fn file_stem(source_url: &str) -> String {
    let path = match url::Url::parse(source_url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => source_url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let path = percent_decode_str(&path).decode_utf8_lossy();
    let name = path.rsplit('/').next().unwrap_or_default();
    let stem = match name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => name,
    };
    stem.trim().to_string()
}

/// Captions for one record. Empty caption text yields empty strings.
pub fn caption_record(formatter: &ListFormatter, subject: &str, record: &ImageRecord) -> ImageCaption {
    let source = caption_source(formatter, record);
    if source.is_empty() {
        debug!(id = %record.id, "no caption source for image");
        return ImageCaption {
            id: record.id.clone(),
            title: String::new(),
            alt: String::new(),
        };
    }

    let input = WordInput::Text(source);
    ImageCaption {
        id: record.id.clone(),
        title: formatter.caption_sentence(subject, &input),
        alt: formatter.sentence(&input),
    }
}

/// Captions for every record, in input order.
pub fn caption_records(
    formatter: &ListFormatter,
    subject: &str,
    records: &[ImageRecord],
) -> Vec<ImageCaption> {
    records
        .iter()
        .map(|r| caption_record(formatter, subject, r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_wins() {
        let record = ImageRecord::new(1, "https://origin.example/img/rocket.png")
            .with_alt("cat, dog")
            .with_title("Ignored");
        assert_eq!(caption_source(&ListFormatter::default(), &record), "cat, dog");
    }

    #[test]
    fn test_title_when_alt_blank() {
        let record = ImageRecord::new(1, "https://origin.example/img/rocket.png")
            .with_alt("  ")
            .with_title("Moon & Stars");
        assert_eq!(caption_source(&ListFormatter::default(), &record), "Moon & Stars");
    }

    #[test]
    fn test_markup_only_alt_falls_through() {
        let record = ImageRecord::new(1, "https://origin.example/img/rocket.png")
            .with_alt("<span></span>");
        assert_eq!(caption_source(&ListFormatter::default(), &record), "rocket");
    }

    #[test]
    fn test_file_stem_fallback() {
        let record = ImageRecord::new(1, "https://origin.example/img/red-blue-green.svg?v=2");
        assert_eq!(caption_source(&ListFormatter::default(), &record), "red-blue-green");
    }

    #[test]
    fn test_wordless_alt_falls_through() {
        let f = ListFormatter::default();
        let record = ImageRecord::new(1, "https://origin.example/img/rocket.png")
            .with_alt("&")
            .with_title(" , ");
        assert_eq!(caption_source(&f, &record), "rocket");

        let caption = caption_record(&f, "icon", &record);
        assert_eq!(caption.title, "icon related to rocket");

        let record = record.with_title("Moon");
        assert_eq!(caption_source(&f, &record), "Moon");
    }

    #[test]
    fn test_encoded_file_name_caption() {
        let record = ImageRecord::new(2, "https://origin.example/x/sun moon.png");
        let caption = caption_record(&ListFormatter::default(), "icon", &record);
        assert_eq!(caption.title, "icon related to sun and moon");
        assert_eq!(caption.alt, "sun and moon");

        let record = ImageRecord::new(3, "https://origin.example/x/caf%C3%A9.png");
        let caption = caption_record(&ListFormatter::default(), "icon", &record);
        assert_eq!(caption.title, "icon related to café");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("https://origin.example/a/b/icon.final.png"), "icon.final");
        assert_eq!(file_stem("https://origin.example/a/b/"), "");
        assert_eq!(file_stem("/uploads/bolt.png#frag"), "bolt");
        assert_eq!(file_stem("/uploads/.hidden"), ".hidden");
        assert_eq!(file_stem("noext"), "noext");
        assert_eq!(file_stem("https://origin.example/x/cats%20and%20dogs.png"), "cats and dogs");
        assert_eq!(file_stem("https://origin.example/x/caf%C3%A9.jpg"), "café");
        assert_eq!(file_stem("/uploads/sun%2Dmoon.svg"), "sun-moon");
    }

    #[test]
    fn test_no_source_gives_empty_caption() {
        let record = ImageRecord::new(9, "https://origin.example/");
        let caption = caption_record(&ListFormatter::default(), "icon", &record);
        assert_eq!(caption.title, "");
        assert_eq!(caption.alt, "");
    }

    #[test]
    fn test_caption_record() {
        let record = ImageRecord::new(3, "https://origin.example/x.png").with_alt("<b>cat</b> & dog");
        let caption = caption_record(&ListFormatter::default(), "icon", &record);
        assert_eq!(caption.title, "icon related to cat and dog");
        assert_eq!(caption.alt, "cat and dog");
    }

    #[test]
    fn test_caption_records_preserve_order() {
        let records = vec![
            ImageRecord::new(1, "https://origin.example/sun.png"),
            ImageRecord::new(2, "https://origin.example/moon.png"),
        ];
        let captions = caption_records(&ListFormatter::default(), "icon", &records);
        assert_eq!(captions[0].alt, "sun");
        assert_eq!(captions[1].alt, "moon");
        assert_eq!(captions[1].id, ImageId::Number(2));
    }
}
