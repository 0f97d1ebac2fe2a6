//! Supported genesis document formats.

use std::fmt;
use std::path::Path;

/// On-disk format of a genesis document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenesisFormat {
    Ron,
    Toml,
    Json,
}

impl GenesisFormat {
    pub const ALL: [GenesisFormat; 3] = [Self::Ron, Self::Toml, Self::Json];

    /// File extension (without the dot) used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Ron => "ron",
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Case-insensitive lookup by extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// Detects the format from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for GenesisFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ron => "RON",
            Self::Toml => "TOML",
            Self::Json => "JSON",
        })
    }
}
