//! # 像素缓冲区模块
//!
//! 以具名字段表示单个像素，通道顺序固定为 (B, G, R)。
//! 这一顺序与既有隐写图像逐位兼容，不可调换。

use crate::error::{Result, StegoError};

/// 一个 8 位三通道像素，交错形式为 `[blue, green, red]`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bgr {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Bgr {
    pub const fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }

    /// 按 (B, G, R) 顺序返回三个通道值。
    pub const fn to_array(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }
}

impl From<[u8; 3]> for Bgr {
    fn from([blue, green, red]: [u8; 3]) -> Self {
        Self { blue, green, red }
    }
}

/// `rows × cols` 的像素网格，按行优先顺序存储。
///
/// 尺寸在构造时确定且之后不再改变，面积总是大于零。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    rows: usize,
    cols: usize,
    pixels: Vec<Bgr>,
}

impl PixelBuffer {
    /// 由行优先的像素序列构造缓冲区。
    ///
    /// # Errors
    ///
    /// 面积为零、`rows * cols` 溢出或 `pixels.len()` 与尺寸不符时返回
    /// [`StegoError::InvalidBuffer`]。
    pub fn new(rows: usize, cols: usize, pixels: Vec<Bgr>) -> Result<Self> {
        let area = checked_area(rows, cols)?;
        if pixels.len() != area {
            return Err(StegoError::InvalidBuffer(
                "pixel count does not match rows * cols",
            ));
        }
        Ok(Self { rows, cols, pixels })
    }

    /// 构造一个所有像素都等于 `pixel` 的缓冲区。
    pub fn filled(rows: usize, cols: usize, pixel: Bgr) -> Result<Self> {
        let area = checked_area(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            pixels: vec![pixel; area],
        })
    }

    /// 由交错的通道数据构造缓冲区，每个像素占 `channels` 个字节。
    ///
    /// 每个像素的前三个字节依次视为 B、G、R，多余的通道 (如 alpha) 被忽略。
    ///
    /// # Errors
    ///
    /// `channels < 3`、面积为零或 `data.len() != rows * cols * channels` 时返回
    /// [`StegoError::InvalidBuffer`]。
    pub fn from_interleaved(rows: usize, cols: usize, channels: usize, data: &[u8]) -> Result<Self> {
        if channels < 3 {
            return Err(StegoError::InvalidBuffer("fewer than 3 channels per pixel"));
        }
        let area = checked_area(rows, cols)?;
        let expected = area
            .checked_mul(channels)
            .ok_or(StegoError::InvalidBuffer("buffer size overflows usize"))?;
        if data.len() != expected {
            return Err(StegoError::InvalidBuffer(
                "data length does not match rows * cols * channels",
            ));
        }

        let pixels = data
            .chunks_exact(channels)
            .map(|px| Bgr::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self { rows, cols, pixels })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 像素总数，即 `rows * cols`。
    pub fn area(&self) -> usize {
        self.pixels.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Bgr> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.pixels.get(row * self.cols + col)
    }

    /// 行优先的全部像素。
    pub fn pixels(&self) -> &[Bgr] {
        &self.pixels
    }

    /// 以 `[B, G, R]` 交错形式导出全部像素。
    pub fn to_interleaved(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_array()).collect()
    }

    /// 将光栅序号 `index` 换算为 `(row, col)`。
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// 光栅顺序前 `count` 个像素。调用方需保证 `count <= area()`。
    pub(crate) fn slots(&self, count: usize) -> &[Bgr] {
        &self.pixels[..count]
    }

    pub(crate) fn slots_mut(&mut self, count: usize) -> &mut [Bgr] {
        &mut self.pixels[..count]
    }
}

fn checked_area(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(0) => Err(StegoError::InvalidBuffer("buffer has zero area")),
        Some(area) => Ok(area),
        None => Err(StegoError::InvalidBuffer("rows * cols overflows usize")),
    }
}
