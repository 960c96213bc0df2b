/// 蓝色通道承载的位数 (字节的最低 2 位)。
pub const BLUE_BITS: u32 = 2;

/// 绿色通道承载的位数 (字节的中间 3 位)。
pub const GREEN_BITS: u32 = 3;

/// 红色通道承载的位数 (字节的最高 3 位)。
pub const RED_BITS: u32 = 3;

/// 写入前清除蓝色通道低 2 位的掩码，高 6 位保持不变。
pub const BLUE_CLEAR_MASK: u8 = 0xFC;

/// 写入前清除绿色通道低 3 位的掩码，高 5 位保持不变。
pub const GREEN_CLEAR_MASK: u8 = 0xF8;

/// 写入前清除红色通道低 3 位的掩码，高 5 位保持不变。
pub const RED_CLEAR_MASK: u8 = 0xF8;

pub const LOW2_MASK: u8 = 0b11;
pub const LOW3_MASK: u8 = 0b111;

/// 自描述格式中长度前缀占用的像素数。
/// 长度本身也经过 3/3/2 拆分写入一个像素，因此只能表示 0..=255。
pub const LENGTH_PREFIX_SLOTS: usize = 1;

/// 自描述格式可隐藏的最大消息长度 (字节)。
pub const MAX_PREFIXED_LEN: usize = u8::MAX as usize;

/// 未指定输出路径时，隐写图像文件名的前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文件名的前缀。
pub const RECOVERED_PREFIX: &str = "recovered_";

/// 恢复文件的默认扩展名。
pub const RECOVERED_EXTENSION: &str = "txt";
