use std::path::Path;

use pngico_core::{ConversionReport, ConvertObserver, IconVariant, SourceImage};

pub struct ConsoleProgress {
    quiet: bool,
    total: usize,
}

impl ConsoleProgress {
    pub fn new(quiet: bool, total: usize) -> Self {
        ConsoleProgress { quiet, total }
    }

    pub fn banner(&self, input: &Path) {
        if self.quiet {
            return;
        }
        println!("PNG -> ICO 图标转换");
        println!("{}", "=".repeat(40));
        println!("输入: {}", input.display());
    }
}

impl ConvertObserver for ConsoleProgress {
    fn on_loaded(&mut self, _path: &Path, source: &SourceImage) {
        if self.quiet {
            return;
        }
        println!("已加载: {}", source);
        println!();
        println!("正在生成 {} 种尺寸...", self.total);
    }

    fn on_variant(&mut self, variant: &IconVariant) {
        if !self.quiet {
            println!("  {}x{}", variant.size(), variant.size());
        }
    }

    fn on_written(&mut self, report: &ConversionReport) {
        if self.quiet {
            return;
        }
        println!();
        println!("图标已生成: {}", report.output.display());
        println!("  大小: {:.2} KB", report.size_kb());
    }
}
