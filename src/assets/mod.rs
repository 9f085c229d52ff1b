//! Planet texture loading.
//!
//! Bytes are fetched and decoded off the render thread by a
//! [`TextureLoader`]; results are drained with [`TextureLoader::poll`] on
//! the render thread. A failed load is reported once and never retried.

mod fetch;
mod loader;

use std::fmt;

pub use fetch::{DefaultFetcher, TextureFetcher};
pub use loader::{
    decode_texture, LoadedTexture, TextureLoad, TextureLoader,
    MAX_TEXTURE_DIMENSION,
};

/// Errors from fetching or decoding a texture.
#[derive(Debug)]
pub enum AssetError {
    /// Reading a local file failed.
    Io {
        /// Path that was read.
        source: String,
        /// Underlying error.
        error: std::io::Error,
    },
    /// Downloading a remote texture failed.
    Http {
        /// URL that was requested.
        source: String,
        /// Transport or status error.
        message: String,
    },
    /// A URL was given but the crate was built without remote support.
    RemoteDisabled(String),
    /// The bytes are not a supported image.
    Decode {
        /// Where the bytes came from.
        source: String,
        /// Decoder error.
        message: String,
    },
    /// A loader thread could not be started.
    Spawn(std::io::Error),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source, error } => {
                write!(f, "failed to read {source}: {error}")
            }
            Self::Http { source, message } => {
                write!(f, "failed to download {source}: {message}")
            }
            Self::RemoteDisabled(source) => write!(
                f,
                "cannot download {source}: built without the `remote` feature"
            ),
            Self::Decode { source, message } => {
                write!(f, "failed to decode {source}: {message}")
            }
            Self::Spawn(e) => write!(f, "failed to start texture loader: {e}"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { error, .. } | Self::Spawn(error) => Some(error),
            _ => None,
        }
    }
}
