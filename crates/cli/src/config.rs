use std::path::PathBuf;

use clap::Parser;

const DEFAULT_INPUT: &str = "image/gugugaga-removebg-preview.png";
const DEFAULT_OUTPUT: &str = "assets/icon.ico";

/// 将 PNG 转换为 Windows 多尺寸 ICO 图标
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// 输入图像路径
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// 输出 ICO 路径，目录不存在时自动创建
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 写入后重新读取 ICO 目录并校验尺寸
    #[arg(long)]
    pub verify: bool,

    /// 只输出错误信息
    #[arg(short, long)]
    pub quiet: bool,
}
