//! # rgb332_hide 库
//!
//! 本库包含 3/3/2 位 RGB 隐写工具的核心逻辑：
//! [`codec`] 负责字节与位三元组之间的转换，[`steganography`] 负责把字节按光栅顺序
//! 写入或读出像素缓冲区。图像文件读写与命令行处理位于外层模块。

// 声明库包含的所有模块。

pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod handler;
pub mod image_io;
pub mod pixel;
pub mod steganography;

pub use error::StegoError;
pub use pixel::{Bgr, PixelBuffer};
