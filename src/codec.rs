//! # 位编解码模块
//!
//! 在一个字节与 (3, 3, 2) 位三元组之间进行无损转换。

use crate::constants::{BLUE_BITS, GREEN_BITS, LOW2_MASK, LOW3_MASK};

/// 一个字节拆分后的三组位：高 3 位、中 3 位、低 2 位。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitTriple {
    /// 位 5..=7，取值 0..=7，写入红色通道。
    pub high3: u8,
    /// 位 2..=4，取值 0..=7，写入绿色通道。
    pub mid3: u8,
    /// 位 0..=1，取值 0..=3，写入蓝色通道。
    pub low2: u8,
}

impl BitTriple {
    pub const fn new(high3: u8, mid3: u8, low2: u8) -> Self {
        Self { high3, mid3, low2 }
    }
}

/// 将一个字节拆分为 (高 3 位, 中 3 位, 低 2 位)。
pub const fn split(byte: u8) -> BitTriple {
    BitTriple {
        high3: byte >> (GREEN_BITS + BLUE_BITS),
        mid3: (byte >> BLUE_BITS) & LOW3_MASK,
        low2: byte & LOW2_MASK,
    }
}

/// 将三元组合并回一个字节，是 [`split`] 的精确逆运算。
///
/// 每个字段在合并前都会按其宽度截断，超出范围的高位被丢弃，
/// 不会串入相邻字段。
pub const fn merge(bits: BitTriple) -> u8 {
    let upper = ((bits.high3 & LOW3_MASK) << GREEN_BITS) | (bits.mid3 & LOW3_MASK);
    (upper << BLUE_BITS) | (bits.low2 & LOW2_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_inverts_split_for_every_byte() {
        for b in 0..=u8::MAX {
            assert_eq!(merge(split(b)), b, "byte {b:#010b}");
        }
    }

    #[test]
    fn split_places_bits_in_expected_groups() {
        assert_eq!(split(0b101_110_01), BitTriple::new(0b101, 0b110, 0b01));
        assert_eq!(split(0xFF), BitTriple::new(7, 7, 3));
        assert_eq!(split(0), BitTriple::default());
    }

    #[test]
    fn merge_masks_out_of_range_fields() {
        assert_eq!(merge(BitTriple::new(0xFF, 0, 0)), 0b111_000_00);
        assert_eq!(merge(BitTriple::new(0, 0x0F, 0)), 0b000_111_00);
        assert_eq!(merge(BitTriple::new(0, 0, 0x07)), 0b000_000_11);
    }
}
