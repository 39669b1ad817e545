use image::DynamicImage;
use image::imageops::FilterType;

use crate::data::{IconVariant, MAX_ICON_SIZE, SourceImage};
use crate::error::{ConvertError, Result};

pub fn validate_sizes(sizes: &[u32]) -> Result<()> {
    if sizes.is_empty() {
        return Err(ConvertError::NoSizes);
    }

    match sizes.iter().find(|&&size| size == 0 || size > MAX_ICON_SIZE) {
        Some(&size) => Err(ConvertError::InvalidSize(size)),
        None => Ok(()),
    }
}

fn resize_variant(image: &DynamicImage, size: u32, filter: FilterType) -> IconVariant {
    // 非正方形输入直接拉伸到正方形
    let resized = image.resize_exact(size, size, filter);

    if !resized.color().has_alpha() {
        log::debug!("{}x{} 补充 alpha 通道", size, size);
    }

    IconVariant {
        image: resized.into_rgba8(),
    }
}

pub fn generate_variants(
    source: &SourceImage,
    sizes: &[u32],
    filter: FilterType,
) -> Result<Vec<IconVariant>> {
    validate_sizes(sizes)?;

    let mut variants = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let variant = resize_variant(&source.image, size, filter);
        log::debug!("已生成 {}x{}", variant.size(), variant.size());
        variants.push(variant);
    }

    Ok(variants)
}
