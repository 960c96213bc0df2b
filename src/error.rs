//! 隐写核心的错误类型。

use thiserror::Error;

/// 核心操作的结果类型别名。
pub type Result<T> = std::result::Result<T, StegoError>;

/// 嵌入与提取过程中可能出现的错误。
///
/// 所有错误都在读写像素之前检测，失败时缓冲区保持原样。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StegoError {
    /// 载荷所需的像素数超过图像容量。
    #[error("capacity exceeded: payload needs {required} pixels but only {available} are available")]
    CapacityExceeded { required: usize, available: usize },

    /// 自描述格式的消息超过单字节长度前缀能表示的上限。
    #[error("message of {length} bytes exceeds the {max}-byte limit of the length prefix")]
    MessageTooLong { length: usize, max: usize },

    /// 固定数量提取请求的字节数超过图像像素数。
    #[error("cannot extract {count} bytes: image only holds {available}")]
    OutOfBounds { count: usize, available: usize },

    /// 长度前缀解码后超出图像可容纳的范围，图像可能已损坏或未经隐写。
    #[error("decoded length {length} exceeds the {available} pixels after the prefix")]
    CorruptLength { length: usize, available: usize },

    /// 像素缓冲区不可用：面积为零、尺寸溢出、通道数不足或数据长度不符。
    #[error("invalid pixel buffer: {0}")]
    InvalidBuffer(&'static str),
}
