use std::{fmt, path::PathBuf};

use base64::{Engine as _, engine::general_purpose};
use url::Url;

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Where a product photo comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Url(Url),
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Interprets `location` as a URL when it carries an http(s) scheme and
    /// as a local path otherwise.
    pub fn parse(location: &str) -> Self {
        if (location.starts_with("http://") || location.starts_with("https://"))
            && let Ok(url) = Url::parse(location)
        {
            return ImageSource::Url(url);
        }

        ImageSource::Path(PathBuf::from(location))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Path(path) => write!(f, "{}", path.display()),
            ImageSource::Url(url) => write!(f, "{}", url),
            ImageSource::Bytes(data) => write!(f, "<{} bytes>", data.len()),
        }
    }
}

/// Raw image bytes held in memory for exactly one vision call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ImagePayload {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            mime_type: DEFAULT_IMAGE_MIME_TYPE.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn encode(&self) -> EncodedImage {
        EncodedImage {
            mime_type: self.mime_type.clone(),
            data: general_purpose::STANDARD.encode(&self.data),
        }
    }
}

/// Base64 form of an [`ImagePayload`], ready for a data-URI or an inline
/// model part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: String,
    pub data: String,
}

impl EncodedImage {
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}
