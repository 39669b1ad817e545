use std::fs;
use std::path::Path;

use crate::data::{ConversionReport, ConvertOptions, IconVariant, SourceImage};
use crate::error::{ConvertError, Result};
use crate::ico_writer::write_ico;
use crate::image_generator::{generate_variants, validate_sizes};
use crate::resource_loader::load_source;

/// 转换过程中的进度回调，默认不做任何事。
pub trait ConvertObserver {
    fn on_loaded(&mut self, _path: &Path, _source: &SourceImage) {}

    fn on_variant(&mut self, _variant: &IconVariant) {}

    fn on_written(&mut self, _report: &ConversionReport) {}
}

struct Silent;

impl ConvertObserver for Silent {}

#[derive(Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Result<Self> {
        validate_sizes(&options.sizes)?;
        Ok(Converter { options })
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionReport> {
        self.convert_with(input, output, &mut Silent)
    }

    pub fn convert_with(
        &self,
        input: &Path,
        output: &Path,
        observer: &mut dyn ConvertObserver,
    ) -> Result<ConversionReport> {
        let source = load_source(input)?;
        observer.on_loaded(input, &source);

        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| ConvertError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let variants = generate_variants(&source, &self.options.sizes, self.options.filter)?;
        for variant in &variants {
            observer.on_variant(variant);
        }

        let file_size = write_ico(&variants, output)?;

        let report = ConversionReport {
            output: output.to_path_buf(),
            file_size,
            sizes: variants.iter().map(IconVariant::size).collect(),
            source_dimensions: (source.width(), source.height()),
        };
        observer.on_written(&report);

        Ok(report)
    }
}

/// 使用标准尺寸把 `input` 转换为 `output` 处的 ICO 文件。
pub fn convert(input: &Path, output: &Path) -> Result<ConversionReport> {
    Converter::default().convert(input, output)
}
