use std::sync::{mpsc, Arc, Mutex};
use std::thread::JoinHandle;

use super::{AssetError, TextureFetcher};

/// Decoded RGBA8 image ready for GPU upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTexture {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 rows, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

/// Outcome of one texture request, delivered by [`TextureLoader::poll`].
#[derive(Debug)]
pub struct TextureLoad {
    /// Body index the texture was requested for.
    pub index: usize,
    /// Decoded texture, or why it could not be loaded.
    pub result: Result<LoadedTexture, AssetError>,
}

/// Largest texture edge the renderer accepts. Equals
/// `max_texture_dimension_2d` of the default wgpu limits the device is
/// created with.
pub const MAX_TEXTURE_DIMENSION: u32 = 8192;

/// Decode PNG or JPEG bytes into RGBA8, downscaling (aspect preserved) so
/// neither edge exceeds [`MAX_TEXTURE_DIMENSION`].
///
/// # Errors
///
/// Returns [`AssetError::Decode`] if the format is unsupported or the
/// data is corrupt.
pub fn decode_texture(
    source: &str,
    bytes: &[u8],
) -> Result<LoadedTexture, AssetError> {
    let image = image::load_from_memory(bytes).map_err(|e| {
        AssetError::Decode {
            source: source.to_owned(),
            message: e.to_string(),
        }
    })?;
    let image = if image.width() > MAX_TEXTURE_DIMENSION
        || image.height() > MAX_TEXTURE_DIMENSION
    {
        log::warn!(
            "texture {source} is {}x{}, downscaling to fit {MAX_TEXTURE_DIMENSION}",
            image.width(),
            image.height()
        );
        image.resize(
            MAX_TEXTURE_DIMENSION,
            MAX_TEXTURE_DIMENSION,
            image::imageops::FilterType::Triangle,
        )
    } else {
        image
    };
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedTexture {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

enum LoadRequest {
    Load { index: usize, source: String },
    Shutdown,
}

/// Worker threads sharing the request queue.
const LOADER_THREADS: usize = 4;

/// Background texture fetch-and-decode workers.
///
/// A small pool of named threads pulls requests from one shared queue, so
/// a slow download does not hold up the others. Results arrive in
/// completion order and stay in the channel until the render thread drains
/// them with [`poll`](Self::poll).
pub struct TextureLoader {
    request_tx: mpsc::Sender<LoadRequest>,
    result_rx: mpsc::Receiver<TextureLoad>,
    threads: Vec<JoinHandle<()>>,
    outstanding: usize,
}

impl TextureLoader {
    /// Start the loader threads.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Spawn`] if the OS refuses to create a thread.
    /// Workers already started exit once the request channel closes.
    pub fn spawn<F: TextureFetcher>(fetcher: F) -> Result<Self, AssetError> {
        let (request_tx, request_rx) = mpsc::channel::<LoadRequest>();
        let (result_tx, result_rx) = mpsc::channel::<TextureLoad>();
        let fetcher = Arc::new(fetcher);
        let request_rx = Arc::new(Mutex::new(request_rx));

        let threads = (0..LOADER_THREADS)
            .map(|i| {
                let fetcher = Arc::clone(&fetcher);
                let request_rx = Arc::clone(&request_rx);
                let result_tx = result_tx.clone();
                std::thread::Builder::new()
                    .name(format!("texture-loader-{i}"))
                    .spawn(move || {
                        Self::thread_loop(&*fetcher, &request_rx, &result_tx);
                    })
                    .map_err(AssetError::Spawn)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            request_tx,
            result_rx,
            threads,
            outstanding: 0,
        })
    }

    /// Queue a texture for body `index` (non-blocking send).
    pub fn request(&mut self, index: usize, source: impl Into<String>) {
        let source = source.into();
        log::debug!("requesting texture {source} for body {index}");
        if self
            .request_tx
            .send(LoadRequest::Load { index, source })
            .is_ok()
        {
            self.outstanding += 1;
        }
    }

    /// Drain every result that has arrived since the last poll.
    pub fn poll(&mut self) -> Vec<TextureLoad> {
        let loads: Vec<TextureLoad> = self.result_rx.try_iter().collect();
        self.outstanding = self.outstanding.saturating_sub(loads.len());
        loads
    }

    /// Requests sent whose results have not been polled yet.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Shut down the loader threads and wait for them to finish.
    pub fn shutdown(&mut self) {
        self.signal_shutdown();
        for handle in self.threads.drain(..) {
            let _ = handle.join();
        }
    }

    /// One `Shutdown` per worker; each worker consumes exactly one.
    fn signal_shutdown(&self) {
        for _ in 0..self.threads.len() {
            let _ = self.request_tx.send(LoadRequest::Shutdown);
        }
    }

    fn thread_loop<F: TextureFetcher>(
        fetcher: &F,
        request_rx: &Mutex<mpsc::Receiver<LoadRequest>>,
        result_tx: &mpsc::Sender<TextureLoad>,
    ) {
        loop {
            // The lock is released before the fetch starts.
            let request = request_rx.lock().map(|rx| rx.recv());
            let Ok(Ok(LoadRequest::Load { index, source })) = request else {
                break;
            };
            let result = fetcher
                .fetch(&source)
                .and_then(|bytes| decode_texture(&source, &bytes));
            if result_tx.send(TextureLoad { index, result }).is_err() {
                break;
            }
        }
    }
}

impl Drop for TextureLoader {
    fn drop(&mut self) {
        // Don't join: a download in flight would stall teardown. Each
        // worker exits once its current fetch returns.
        self.signal_shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::time::{Duration, Instant};

    use super::*;

    /// Serves encoded images from memory.
    struct MemoryFetcher(HashMap<String, Vec<u8>>);

    impl TextureFetcher for MemoryFetcher {
        fn fetch(&self, source: &str) -> Result<Vec<u8>, AssetError> {
            self.0.get(source).cloned().ok_or_else(|| AssetError::Io {
                source: source.to_owned(),
                error: std::io::ErrorKind::NotFound.into(),
            })
        }
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([10, 20, 30, 255]),
        );
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn loader() -> TextureLoader {
        let files = HashMap::from([
            ("mars.png".to_owned(), png(4, 2)),
            ("garbage.png".to_owned(), vec![0, 1, 2, 3]),
        ]);
        TextureLoader::spawn(MemoryFetcher(files)).unwrap()
    }

    fn wait_for(loader: &mut TextureLoader, count: usize) -> Vec<TextureLoad> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut loads = Vec::new();
        while loads.len() < count && Instant::now() < deadline {
            loads.extend(loader.poll());
            std::thread::sleep(Duration::from_millis(1));
        }
        loads
    }

    #[test]
    fn decodes_png() {
        let texture = decode_texture("mem", &png(3, 5)).unwrap();
        assert_eq!((texture.width, texture.height), (3, 5));
        assert_eq!(texture.rgba.len(), 3 * 5 * 4);
        assert_eq!(&texture.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn oversized_texture_is_downscaled() {
        let texture = decode_texture("mem", &png(16384, 4)).unwrap();
        assert_eq!((texture.width, texture.height), (8192, 2));
        assert_eq!(texture.rgba.len(), 8192 * 2 * 4);
    }

    #[test]
    fn texture_at_limit_is_untouched() {
        let texture =
            decode_texture("mem", &png(MAX_TEXTURE_DIMENSION, 1)).unwrap();
        assert_eq!((texture.width, texture.height), (MAX_TEXTURE_DIMENSION, 1));
    }

    #[test]
    fn corrupt_bytes_fail_to_decode() {
        let err = decode_texture("mem", b"not an image").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn loader_reports_success_and_failure() {
        let mut loader = loader();
        loader.request(0, "mars.png");
        loader.request(1, "missing.png");
        loader.request(2, "garbage.png");
        assert_eq!(loader.outstanding(), 3);

        let mut loads = wait_for(&mut loader, 3);
        loads.sort_by_key(|load| load.index);
        assert_eq!(loads.len(), 3);

        let mars = loads[0].result.as_ref().unwrap();
        assert_eq!((mars.width, mars.height), (4, 2));
        assert!(matches!(loads[1].result, Err(AssetError::Io { .. })));
        assert!(matches!(loads[2].result, Err(AssetError::Decode { .. })));
        assert_eq!(loader.outstanding(), 0);

        loader.shutdown();
    }

    /// Blocks on `slow.png` until released; everything else is instant.
    struct GatedFetcher {
        release: Mutex<mpsc::Receiver<()>>,
    }

    impl TextureFetcher for GatedFetcher {
        fn fetch(&self, source: &str) -> Result<Vec<u8>, AssetError> {
            if source == "slow.png" {
                let _ = self.release.lock().unwrap().recv();
            }
            Ok(png(1, 1))
        }
    }

    #[test]
    fn slow_download_does_not_block_others() {
        let (release_tx, release_rx) = mpsc::channel();
        let mut loader = TextureLoader::spawn(GatedFetcher {
            release: Mutex::new(release_rx),
        })
        .unwrap();
        loader.request(0, "slow.png");
        loader.request(1, "fast.png");

        let first = wait_for(&mut loader, 1);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].index, 1);

        release_tx.send(()).unwrap();
        let rest = wait_for(&mut loader, 1);
        assert_eq!(rest[0].index, 0);
        loader.shutdown();
    }

    #[test]
    fn poll_without_requests_is_empty() {
        let mut loader = loader();
        assert!(loader.poll().is_empty());
        loader.shutdown();
    }
}
