use image::imageops::FilterType;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextureLoadError {
    #[error("io problem while loading texture {path:?}: {what:?}")]
    IoError { path: PathBuf, what: String },
    #[error("format problem while loading texture {path:?}: {what:?}")]
    FormatError { path: PathBuf, what: String },
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct TextureSlot(pub(crate) usize);

/// RGBA8 pixels of the base level followed by progressively halved levels down to 1×1.
pub struct MipChain {
    levels: Vec<RgbaImage>,
}

impl MipChain {
    #[must_use]
    pub fn new(base: RgbaImage) -> Self {
        let mut levels = vec![base];
        loop {
            let previous = &levels[levels.len() - 1];
            let (width, height) = previous.dimensions();
            if width <= 1 && height <= 1 {
                break;
            }
            let next = image::imageops::resize(previous, (width / 2).max(1), (height / 2).max(1), FilterType::Triangle);
            levels.push(next);
        }
        MipChain { levels }
    }

    #[must_use]
    pub fn levels(&self) -> &[RgbaImage] {
        &self.levels
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.levels[0].width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.levels[0].height()
    }
}

pub struct TextureWarehouse {
    textures: Vec<MipChain>,
}

impl TextureWarehouse {
    #[must_use]
    pub fn new() -> Self {
        Self { textures: Vec::new() }
    }

    /// Decodes any format the `image` crate understands; grey, grey-alpha and
    /// RGB sources are widened to RGBA.
    pub fn load(&mut self, source_file: &Path) -> Result<TextureSlot, TextureLoadError> {
        let reader = image::ImageReader::open(source_file)
            .map_err(|e| TextureLoadError::IoError { path: source_file.to_path_buf(), what: e.to_string() })?
            .with_guessed_format()
            .map_err(|e| TextureLoadError::IoError { path: source_file.to_path_buf(), what: e.to_string() })?;
        let decoded = reader
            .decode()
            .map_err(|e| TextureLoadError::FormatError { path: source_file.to_path_buf(), what: e.to_string() })?;

        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(TextureLoadError::FormatError { path: source_file.to_path_buf(), what: "empty image".to_string() });
        }

        Ok(self.add(decoded.to_rgba8()))
    }

    pub fn add(&mut self, pixels: RgbaImage) -> TextureSlot {
        assert!(pixels.width() > 0 && pixels.height() > 0, "texture must not be empty");
        self.textures.push(MipChain::new(pixels));
        TextureSlot(self.textures.len() - 1)
    }

    #[must_use]
    pub fn get(&self, slot: TextureSlot) -> &MipChain {
        &self.textures[slot.0]
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.textures.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &MipChain> {
        self.textures.iter()
    }
}

impl Default for TextureWarehouse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_mip_chain_halves_down_to_one_pixel() {
        let system_under_test = MipChain::new(RgbaImage::new(8, 2));

        let sizes: Vec<(u32, u32)> = system_under_test.levels().iter().map(|level| level.dimensions()).collect();

        assert_eq!(sizes, vec![(8, 2), (4, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn test_single_pixel_has_single_level() {
        let system_under_test = MipChain::new(RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255])));

        assert_eq!(system_under_test.levels().len(), 1);
    }

    #[test]
    fn test_load_rgb_png() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("label.png");
        RgbImage::from_pixel(4, 4, Rgb([10, 20, 30])).save(&path).expect("failed to write test image");

        let mut system_under_test = TextureWarehouse::new();
        let slot = system_under_test.load(&path).expect("failed to load texture");

        let texture = system_under_test.get(slot);
        assert_eq!((texture.width(), texture.height()), (4, 4));
        assert_eq!(texture.levels()[0].get_pixel(1, 1), &Rgba([10, 20, 30, 255]));
        assert_eq!(texture.levels().len(), 3);
    }

    #[test]
    fn test_load_grayscale_png() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("mask.png");
        GrayImage::from_pixel(2, 2, Luma([200])).save(&path).expect("failed to write test image");

        let mut system_under_test = TextureWarehouse::new();
        let slot = system_under_test.load(&path).expect("failed to load texture");

        assert_eq!(system_under_test.get(slot).levels()[0].get_pixel(0, 0), &Rgba([200, 200, 200, 255]));
    }

    #[test]
    fn test_slots_are_distinct() {
        let mut system_under_test = TextureWarehouse::new();

        let first = system_under_test.add(RgbaImage::new(2, 2));
        let second = system_under_test.add(RgbaImage::new(2, 2));

        assert_ne!(first, second);
        assert_eq!(system_under_test.count(), 2);
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let mut system_under_test = TextureWarehouse::new();

        let error = system_under_test.load(Path::new("no/such/texture.png")).err().expect("loading must fail");

        assert!(matches!(error, TextureLoadError::IoError { .. }));
        assert!(error.to_string().contains("texture.png"));
    }

    #[test]
    fn test_garbage_file_is_format_error() {
        let mut temp_file = NamedTempFile::new().expect("failed to create temp file");
        temp_file.write_all(b"definitely not an image").expect("failed to write dummy data into the temp file");

        let mut system_under_test = TextureWarehouse::new();
        let error = system_under_test.load(temp_file.path()).err().expect("loading must fail");

        assert!(matches!(error, TextureLoadError::FormatError { .. }));
    }
}
