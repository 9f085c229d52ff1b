use super::AssetError;

/// Largest texture download accepted, in bytes.
#[cfg(feature = "remote")]
const MAX_TEXTURE_BYTES: u64 = 32 * 1024 * 1024;

/// Resolves a texture source string to raw encoded bytes.
///
/// Shared by the loader threads, so implementations may block but must be
/// `Sync`.
pub trait TextureFetcher: Send + Sync + 'static {
    /// Fetch the bytes behind `source`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] if the source cannot be read.
    fn fetch(&self, source: &str) -> Result<Vec<u8>, AssetError>;
}

/// Reads `http://` and `https://` sources over the network (with the
/// `remote` feature) and everything else from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFetcher;

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

impl TextureFetcher for DefaultFetcher {
    fn fetch(&self, source: &str) -> Result<Vec<u8>, AssetError> {
        if is_remote(source) {
            return download(source);
        }
        std::fs::read(source).map_err(|error| AssetError::Io {
            source: source.to_owned(),
            error,
        })
    }
}

#[cfg(feature = "remote")]
fn download(url: &str) -> Result<Vec<u8>, AssetError> {
    let http = |e: ureq::Error| AssetError::Http {
        source: url.to_owned(),
        message: e.to_string(),
    };
    ureq::get(url)
        .call()
        .map_err(http)?
        .into_body()
        .with_config()
        .limit(MAX_TEXTURE_BYTES)
        .read_to_vec()
        .map_err(http)
}

#[cfg(not(feature = "remote"))]
fn download(url: &str) -> Result<Vec<u8>, AssetError> {
    Err(AssetError::RemoteDisabled(url.to_owned()))
}
