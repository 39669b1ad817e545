use std::io;
use std::path::PathBuf;

use image::ImageError;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("输入文件不存在: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("加载图像失败: {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("创建输出目录失败: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ICO 编码失败")]
    Encode(#[source] ImageError),

    #[error("写入 ICO 文件失败: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("无效的图标尺寸: {0}（应在 1 到 256 之间）")]
    InvalidSize(u32),

    #[error("未指定任何图标尺寸")]
    NoSizes,

    #[error("ICO 数据格式错误")]
    Malformed(#[source] io::Error),
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
