mod config;
mod progress;

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use pngico_core::{ConvertOptions, Converter, read_ico_directory};

use config::Config;
use progress::ConsoleProgress;

fn verify_icon(path: &Path, expected: &[u32]) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("读取 {} 失败", path.display()))?;
    let entries = read_ico_directory(&bytes)?;

    let found: BTreeSet<(u32, u32)> = entries
        .iter()
        .map(|entry| (entry.width, entry.height))
        .collect();
    let expected: BTreeSet<(u32, u32)> = expected.iter().map(|&size| (size, size)).collect();
    if found != expected || entries.len() != expected.len() {
        bail!("ICO 校验失败: 期望尺寸 {:?}，实际 {:?}", expected, found);
    }

    log::info!("校验通过: {} 个图像", entries.len());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    let converter = Converter::new(ConvertOptions::default())?;
    let sizes = converter.options().sizes.clone();

    let mut progress = ConsoleProgress::new(config.quiet, sizes.len());
    progress.banner(&config.input);

    converter
        .convert_with(&config.input, &config.output, &mut progress)
        .context("图标转换失败")?;

    if config.verify {
        verify_icon(&config.output, &sizes)?;
    }

    if !config.quiet {
        println!();
        println!("转换完成！");
    }

    Ok(())
}
