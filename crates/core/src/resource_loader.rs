use std::path::Path;

use image::{ImageError, ImageReader};

use crate::data::SourceImage;
use crate::error::{ConvertError, Result};

pub fn load_source(path: &Path) -> Result<SourceImage> {
    if !path.exists() {
        return Err(ConvertError::MissingInput(path.to_path_buf()));
    }

    let decode_error = |source: ImageError| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };

    // 优先按文件内容识别格式，识别不出时再退回扩展名
    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    let source = SourceImage::new(image);
    log::info!("已加载 {}: {}", path.display(), source);
    Ok(source)
}
