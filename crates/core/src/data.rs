use std::fmt;
use std::path::PathBuf;

use image::imageops::FilterType;
use image::{ColorType, DynamicImage, RgbaImage};

/// Windows 标准图标尺寸，从大到小排列
pub const ICON_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];

// ICO 目录项只能描述 1..=256 像素
pub const MAX_ICON_SIZE: u32 = 256;

#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub sizes: Vec<u32>,
    pub filter: FilterType,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            sizes: ICON_SIZES.to_vec(),
            filter: FilterType::Lanczos3,
        }
    }
}

/// 解码后的输入图像，加载后只读。
pub struct SourceImage {
    pub(crate) image: DynamicImage,
}

impl SourceImage {
    pub fn new(image: DynamicImage) -> Self {
        SourceImage { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn color(&self) -> ColorType {
        self.image.color()
    }

    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }
}

impl fmt::Display for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {:?}", self.width(), self.height(), self.color())
    }
}

/// 某一目标尺寸下的 RGBA 图标。
pub struct IconVariant {
    pub(crate) image: RgbaImage,
}

impl IconVariant {
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IcoEntry {
    pub width: u32,
    pub height: u32,
    pub bit_count: u16,
    pub is_png: bool,
    pub data: Vec<u8>,
}

impl IcoEntry {
    /// 该项的原始图像数据（PNG 或 BMP）。
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_square_of(&self, size: u32) -> bool {
        self.width == size && self.height == size
    }
}

#[derive(Clone, Debug)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub file_size: u64,
    pub sizes: Vec<u32>,
    pub source_dimensions: (u32, u32),
}

impl ConversionReport {
    pub fn size_kb(&self) -> f64 {
        self.file_size as f64 / 1024.0
    }
}
