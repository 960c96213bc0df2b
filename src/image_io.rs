//! # 图像读写模块
//!
//! 在图像文件与 [`PixelBuffer`] 之间转换。输入统一转换为 8 位 RGB，
//! 输出格式由目标路径的扩展名决定，只应使用无损格式。

use crate::pixel::{Bgr, PixelBuffer};
use anyhow::{Context, Result};
use colored::Colorize;
use image::{Rgb, RgbImage};
use std::path::Path;

/// 读取并解码图像文件，返回 (B, G, R) 顺序的像素缓冲区。
///
/// 图像高度对应 `rows`，宽度对应 `cols`。alpha 通道及高位深数据会被转换为 8 位 RGB。
pub fn load(path: &Path) -> Result<PixelBuffer> {
    let rgb = image::open(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let (width, height) = rgb.dimensions();
    log::debug!("decoded {} as {}x{} RGB", path.display(), width, height);

    let pixels = rgb
        .pixels()
        .map(|&Rgb([red, green, blue])| Bgr::new(blue, green, red))
        .collect();

    PixelBuffer::new(height as usize, width as usize, pixels).with_context(|| {
        format!(
            "Image has no usable pixels: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

/// 将像素缓冲区编码并写入 `path`。
pub fn save(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let width = u32::try_from(buffer.cols()).context("Image width does not fit in u32")?;
    let height = u32::try_from(buffer.rows()).context("Image height does not fit in u32")?;

    let raw = buffer
        .pixels()
        .iter()
        .flat_map(|px| [px.red, px.green, px.blue])
        .collect();
    let rgb = RgbImage::from_raw(width, height, raw)
        .context("Pixel data does not match the image dimensions")?;

    rgb.save(path).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    log::debug!("encoded {}x{} RGB to {}", width, height, path.display());
    Ok(())
}
