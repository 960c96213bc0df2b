//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{
    BLUE_BITS, DOCTORED_PREFIX, GREEN_BITS, MAX_PREFIXED_LEN, RECOVERED_EXTENSION,
    RECOVERED_PREFIX, RED_BITS,
};
use crate::image_io;
use crate::steganography::{capacity, embed, embed_message, extract_fixed, extract_prefixed};
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和待隐藏文件、检查隐写空间是否足够、调用隐写核心函数写入数据，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及模式选项的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像或文本文件。
/// * 图像没有足够的空间，或消息超过长度前缀的上限。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_hidden_path(&args.image));
    ensure_writable(&dest, args.force)?;

    let mut picture = image_io::load(&args.image)?;

    let text = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let prefixed = !args.fixed;
    let available_space = capacity(picture.rows(), picture.cols(), prefixed);
    info!(
        "hiding {} bytes in {}x{} image ({} mode)",
        text.len(),
        picture.cols(),
        picture.rows(),
        if prefixed { "prefixed" } else { "fixed" }
    );

    anyhow::ensure!(
        available_space >= text.len(),
        "Not enough space in the image to hide the text. \nRequired: {}, Available: {}",
        text.len().to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    let hidden = if prefixed {
        anyhow::ensure!(
            text.len() <= MAX_PREFIXED_LEN,
            "The text is {} bytes long, but the length prefix holds at most {}. \nUse --fixed and recover with --count instead.",
            text.len().to_string().red().bold(),
            MAX_PREFIXED_LEN.to_string().green().bold()
        );
        embed_message(&mut picture, &text)
    } else {
        embed(&mut picture, &text)
    };
    hidden.context("Failed to hide the text in the image.")?;

    if let Some(last) = text.len().checked_sub(usize::from(args.fixed)) {
        debug!("last written pixel at {:?}", picture.position(last));
    }

    image_io::save(&picture, &dest)?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    if args.fixed {
        println!(
            "Recover it with: --count {}",
            text.len().to_string().green().bold()
        );
    }

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、按长度前缀或固定数量提取隐藏字节，
/// 最后将恢复的内容写入目标文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件。
/// * 长度前缀损坏，或 `--count` 超出图像范围。
/// * 无法写入到目标文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let dest = args
        .text
        .clone()
        .unwrap_or_else(|| default_recovered_path(&args.image));
    ensure_writable(&dest, args.force)?;

    let picture = image_io::load(&args.image)?;

    let text = match args.count {
        Some(count) => {
            info!("extracting {} bytes in fixed mode", count);
            extract_fixed(&picture, count).with_context(|| {
                format!(
                    "Failed to recover {} bytes from '{}'.",
                    count.to_string().red().bold(),
                    args.image.to_string_lossy().red().bold()
                )
            })?
        }
        None => extract_prefixed(&picture).with_context(|| {
            format!(
                "Failed to recover message length from '{}'. \nThe image may not contain a hidden message or is corrupted.",
                args.image.to_string_lossy().red().bold()
            )
        })?,
    };
    debug!("recovered {} bytes", text.len());

    fs::write(&dest, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令：打印图像尺寸以及两种格式下可隐藏的字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = image_io::load(&args.image)?;
    let (rows, cols) = (picture.rows(), picture.cols());

    println!(
        "{}: {}x{} pixels, {} hidden bits per pixel",
        args.image.to_string_lossy().bold(),
        cols,
        rows,
        RED_BITS + GREEN_BITS + BLUE_BITS
    );
    println!(
        "  prefixed: {} bytes (at most {})",
        capacity(rows, cols, true).min(MAX_PREFIXED_LEN).to_string().green().bold(),
        MAX_PREFIXED_LEN
    );
    println!(
        "  fixed:    {} bytes",
        capacity(rows, cols, false).to_string().green().bold()
    );
    Ok(())
}

/// 默认的隐写输出路径：与输入图像同目录，文件名加上 `doctored_` 前缀。
pub fn default_hidden_path(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("{DOCTORED_PREFIX}{name}"))
}

/// 默认的恢复输出路径：与图像同目录，名为 `recovered_<图像文件名>.txt`。
pub fn default_recovered_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("{RECOVERED_PREFIX}{stem}.{RECOVERED_EXTENSION}"))
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
