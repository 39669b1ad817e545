mod converter;
mod data;
mod error;
mod ico_writer;
mod image_generator;
mod resource_loader;

pub use converter::{ConvertObserver, Converter, convert};
pub use data::{
    ConversionReport, ConvertOptions, ICON_SIZES, IcoEntry, IconVariant, MAX_ICON_SIZE,
    SourceImage,
};
pub use error::{ConvertError, Result};
pub use ico_writer::{encode_ico, read_ico_directory, write_ico};
pub use image::imageops::FilterType;
pub use image_generator::generate_variants;
pub use resource_loader::load_source;
