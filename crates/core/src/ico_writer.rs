use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use ico::{IconDir, ResourceType};
use image::ExtendedColorType;
use image::codecs::ico::{IcoEncoder, IcoFrame};

use crate::data::{IcoEntry, IconVariant};
use crate::error::{ConvertError, Result};

/// 将所有尺寸编码为一个 ICO 容器，每帧以 32 位 RGBA PNG 存储。
pub fn encode_ico(variants: &[IconVariant]) -> Result<Vec<u8>> {
    let frames = variants
        .iter()
        .map(|variant| {
            let (width, height) = variant.image.dimensions();
            IcoFrame::as_png(variant.image.as_raw(), width, height, ExtendedColorType::Rgba8)
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(ConvertError::Encode)?;

    let mut buf = Vec::new();
    IcoEncoder::new(&mut buf)
        .encode_images(&frames)
        .map_err(ConvertError::Encode)?;

    Ok(buf)
}

/// 先在内存中完成编码，编码失败时不会留下残缺的输出文件。
pub fn write_ico(variants: &[IconVariant], path: &Path) -> Result<u64> {
    let buf = encode_ico(variants)?;

    fs::write(path, &buf).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("已写入 {} ({} 字节)", path.display(), buf.len());
    Ok(buf.len() as u64)
}

/// 读取 ICO 目录，返回每个图像的尺寸、位深和原始数据。
pub fn read_ico_directory(bytes: &[u8]) -> Result<Vec<IcoEntry>> {
    let dir = IconDir::read(Cursor::new(bytes)).map_err(ConvertError::Malformed)?;
    if dir.resource_type() != ResourceType::Icon {
        return Err(ConvertError::Malformed(io::Error::new(
            io::ErrorKind::InvalidData,
            "不是 ICO 图标（可能是光标文件）",
        )));
    }

    let entries = dir
        .entries()
        .iter()
        .map(|entry| IcoEntry {
            width: entry.width(),
            height: entry.height(),
            bit_count: entry.bits_per_pixel(),
            is_png: entry.is_png(),
            data: entry.data().to_vec(),
        })
        .collect();

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgba, RgbaImage};

    use super::*;

    fn variant(size: u32) -> IconVariant {
        IconVariant {
            image: RgbaImage::from_pixel(size, size, Rgba([0, 128, 255, 64])),
        }
    }

    #[test]
    fn directory_lists_every_encoded_size() {
        let variants: Vec<_> = [256, 48, 16].into_iter().map(variant).collect();
        let ico = encode_ico(&variants).unwrap();

        let entries = read_ico_directory(&ico).unwrap();
        let sizes: Vec<(u32, u32)> = entries.iter().map(|e| (e.width, e.height)).collect();
        assert_eq!(sizes, vec![(256, 256), (48, 48), (16, 16)]);
    }

    #[test]
    fn embedded_frames_keep_alpha() {
        let ico = encode_ico(&[variant(32)]).unwrap();
        let entries = read_ico_directory(&ico).unwrap();

        let frame = image::load_from_memory(entries[0].data()).unwrap();
        assert!(frame.color().has_alpha());
        assert_eq!(frame.to_rgba8().get_pixel(5, 5), &Rgba([0, 128, 255, 64]));
    }

    #[test]
    fn entries_outlive_the_source_buffer() {
        let entries = {
            let ico = encode_ico(&[variant(64), variant(16)]).unwrap();
            read_ico_directory(&ico).unwrap()
        };

        for entry in &entries {
            assert!(entry.is_png);
            assert_eq!(entry.bit_count, 32);
            assert!(entry.is_square_of(entry.width));
            let frame = image::load_from_memory(entry.data()).unwrap();
            assert_eq!(frame.width(), entry.width);
        }
    }

    #[test]
    fn largest_frame_is_what_decoders_pick() {
        let variants: Vec<_> = [16, 128, 32].into_iter().map(variant).collect();
        let ico = encode_ico(&variants).unwrap();

        let decoded = image::load_from_memory_with_format(&ico, image::ImageFormat::Ico).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (128, 128));
        assert!(matches!(decoded, DynamicImage::ImageRgba8(_)));
    }

    #[test]
    fn truncated_or_foreign_data_is_rejected() {
        assert!(matches!(
            read_ico_directory(&[0, 0, 1]),
            Err(ConvertError::Malformed(_))
        ));
        assert!(matches!(
            read_ico_directory(b"\x89PNG\r\n\x1a\n"),
            Err(ConvertError::Malformed(_))
        ));

        let mut ico = encode_ico(&[variant(16)]).unwrap();
        ico.truncate(ico.len() - 1);
        assert!(matches!(
            read_ico_directory(&ico),
            Err(ConvertError::Malformed(_))
        ));
    }

    #[test]
    fn write_fails_cleanly_for_missing_directory() {
        let path = std::env::temp_dir()
            .join(format!("pngico-writer-{}", std::process::id()))
            .join("no-such-dir")
            .join("icon.ico");

        assert!(matches!(
            write_ico(&[variant(16)], &path),
            Err(ConvertError::Write { .. })
        ));
        assert!(!path.exists());
    }
}
