//! Jar archive settings.

use serde::Deserialize;

/// How entry contents are stored in the archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// Deflate every entry.
    #[default]
    Deflate,
    /// Store entries uncompressed.
    Store,
}

impl Compression {
    pub(crate) fn method(self) -> zip::CompressionMethod {
        match self {
            Self::Deflate => zip::CompressionMethod::Deflated,
            Self::Store => zip::CompressionMethod::Stored,
        }
    }
}

impl std::str::FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deflate" => Ok(Self::Deflate),
            "store" => Ok(Self::Store),
            other => Err(format!(
                "Invalid compression: {}. Valid values: deflate, store",
                other
            )),
        }
    }
}

/// Manifest and entry options for the produced jar.
#[derive(Debug, Clone, Default)]
pub struct ArchiveSettings {
    /// `Main-Class` manifest attribute.
    ///
    /// Default: None (attribute omitted)
    pub main_class: Option<String>,

    /// Entry compression.
    ///
    /// Default: [`Compression::Deflate`]
    pub compression: Compression,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compression_names() {
        assert_eq!("deflate".parse::<Compression>(), Ok(Compression::Deflate));
        assert_eq!("STORE".parse::<Compression>(), Ok(Compression::Store));
        assert!("bzip2".parse::<Compression>().is_err());
    }
}
