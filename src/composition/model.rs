use std::{path::Path, str::FromStr};

use crate::foundation::{
    core::Rgba8,
    error::{BannerError, BannerResult},
};

/// Fully decoded composition request.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CompositionRequest {
    pub background: ImageDescriptor,
    #[serde(rename = "bgRgba")]
    pub background_colors: BandColors,
    #[serde(rename = "like")]
    pub primary_overlay: ImageDescriptor,
    #[serde(rename = "dislike")]
    pub secondary_overlay: ImageDescriptor,
    pub output: OutputDescriptor,
    #[serde(rename = "likeIcon", default)]
    pub top_icons: Vec<IconDescriptor>,
    #[serde(rename = "dislikeIcon", default)]
    pub bottom_icons: Vec<IconDescriptor>,
}

/// An image file plus its declared size.
///
/// For overlays the declared size is advisory only; the decoded bounds win.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ImageDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub file: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BandColors {
    pub top: Rgba8,
    pub bottom: Rgba8,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OutputDescriptor {
    pub file: String,
    pub format: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct IconDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub file: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl FromStr for OutputFormat {
    type Err = BannerError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(BannerError::unsupported_format(tag)),
        }
    }
}

impl OutputDescriptor {
    pub fn output_format(&self) -> BannerResult<OutputFormat> {
        self.format.parse()
    }
}

impl CompositionRequest {
    /// Parse a request from JSON text.
    pub fn from_json_str(text: &str) -> BannerResult<Self> {
        if text.trim().is_empty() {
            return Err(BannerError::config("composition request is empty"));
        }
        serde_json::from_str(text)
            .map_err(|e| BannerError::config(format!("parse composition request: {e}")))
    }

    /// Read and parse a request file. Any failure here is a [`BannerError::Config`].
    pub fn load(path: impl AsRef<Path>) -> BannerResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(BannerError::config("no composition request path given"));
        }
        let text = std::fs::read_to_string(path).map_err(|e| {
            BannerError::config(format!("read composition request '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Check the request before any image I/O happens.
    pub fn validate(&self) -> BannerResult<()> {
        if self.background.width == 0 || self.background.height == 0 {
            return Err(BannerError::config("background width/height must be > 0"));
        }

        let fixed = [
            ("background", &self.background.file),
            ("like", &self.primary_overlay.file),
            ("dislike", &self.secondary_overlay.file),
            ("output", &self.output.file),
        ];
        for (field, file) in fixed {
            if file.trim().is_empty() {
                return Err(BannerError::config(format!("{field}.file must not be empty")));
            }
        }

        let icon_lists = [("likeIcon", &self.top_icons), ("dislikeIcon", &self.bottom_icons)];
        for (field, icons) in icon_lists {
            for (i, icon) in icons.iter().enumerate() {
                if icon.file.trim().is_empty() {
                    return Err(BannerError::config(format!(
                        "{field}[{i}].file must not be empty"
                    )));
                }
            }
        }

        self.output.output_format()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
{
  "background": { "file": "./images/bg.png", "width": 800, "height": 400 },
  "bgRgba": { "top": [0, 153, 153, 255], "bottom": [192, 192, 192, 255] },
  "like": { "name": "like", "file": "./images/like.png", "width": 500, "height": 198 },
  "dislike": { "file": "./images/dislike.png", "width": 500, "height": 198 },
  "output": { "file": "./images/out.jpg", "format": "jpg" },
  "likeIcon": [ { "name": "rust", "file": "./icons/rust.png" }, { "file": "./icons/go.png" } ],
  "dislikeIcon": []
}
"#;

    #[test]
    fn parses_sample_request() {
        let req = CompositionRequest::from_json_str(SAMPLE).unwrap();
        assert_eq!(req.background.width, 800);
        assert_eq!(req.background_colors.top, Rgba8::new(0, 153, 153, 255));
        assert_eq!(req.primary_overlay.name.as_deref(), Some("like"));
        assert_eq!(req.secondary_overlay.name, None);
        assert_eq!(req.top_icons.len(), 2);
        assert_eq!(req.top_icons[0].name.as_deref(), Some("rust"));
        assert_eq!(req.top_icons[1].name, None);
        assert!(req.bottom_icons.is_empty());
        assert_eq!(req.output.output_format().unwrap(), OutputFormat::Jpeg);
        req.validate().unwrap();
    }

    #[test]
    fn missing_icon_lists_default_to_empty() {
        let json = r#"
{
  "background": { "file": "bg.png", "width": 10, "height": 10 },
  "bgRgba": { "top": [0, 0, 0, 255], "bottom": [255, 255, 255, 255] },
  "like": { "file": "a.png" },
  "dislike": { "file": "b.png" },
  "output": { "file": "out.png", "format": "png" }
}
"#;
        let req = CompositionRequest::from_json_str(json).unwrap();
        assert!(req.top_icons.is_empty());
        assert!(req.bottom_icons.is_empty());
        assert_eq!(req.primary_overlay.width, 0);
    }

    #[test]
    fn empty_and_malformed_documents_are_config_errors() {
        assert!(matches!(
            CompositionRequest::from_json_str("  \n"),
            Err(BannerError::Config(_))
        ));
        assert!(matches!(
            CompositionRequest::from_json_str("{ \"background\": "),
            Err(BannerError::Config(_))
        ));
        assert!(matches!(
            CompositionRequest::from_json_str(r#"{ "background": { "file": "x" } }"#),
            Err(BannerError::Config(_))
        ));
    }

    #[test]
    fn unreadable_file_is_config_error() {
        let err = CompositionRequest::load("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, BannerError::Config(_)));
        let err = CompositionRequest::load("").unwrap_err();
        assert!(matches!(err, BannerError::Config(_)));
    }

    #[test]
    fn format_tags() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("JPG".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
        assert_eq!("jpeg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
        assert!(matches!(
            "gif".parse::<OutputFormat>(),
            Err(BannerError::UnsupportedFormat(tag)) if tag == "gif"
        ));
    }

    #[test]
    fn validate_rejects_unsupported_format_and_empty_paths() {
        let mut req = CompositionRequest::from_json_str(SAMPLE).unwrap();
        req.output.format = "gif".to_string();
        assert!(matches!(
            req.validate(),
            Err(BannerError::UnsupportedFormat(_))
        ));

        let mut req = CompositionRequest::from_json_str(SAMPLE).unwrap();
        req.top_icons[1].file = String::new();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("likeIcon[1].file"));

        let mut req = CompositionRequest::from_json_str(SAMPLE).unwrap();
        req.background.height = 0;
        assert!(matches!(req.validate(), Err(BannerError::Config(_))));
    }
}
