use crate::codec::{BitTriple, merge, split};
use crate::constants::{
    BLUE_CLEAR_MASK, GREEN_CLEAR_MASK, LENGTH_PREFIX_SLOTS, LOW2_MASK, LOW3_MASK,
    MAX_PREFIXED_LEN, RED_CLEAR_MASK,
};
use crate::error::{Result, StegoError};
use crate::pixel::{Bgr, PixelBuffer};

/// 计算 `rows × cols` 图像可隐藏的字节数。
///
/// 自描述格式 (`prefixed`) 需要预留一个像素存放长度。
pub fn capacity(rows: usize, cols: usize, prefixed: bool) -> usize {
    let slots = rows.saturating_mul(cols);
    if prefixed {
        slots.saturating_sub(LENGTH_PREFIX_SLOTS)
    } else {
        slots
    }
}

/// 按光栅顺序把 `payload` 的每个字节写入一个像素。
///
/// 字节拆分为 3/3/2 位，分别写入红、绿、蓝通道的低位，其余位保持不变。
/// 载荷之后的像素不会被修改。
///
/// # Errors
///
/// `payload.len()` 超过像素总数时返回 [`StegoError::CapacityExceeded`]，
/// 此时缓冲区未被改动。
pub fn embed(buffer: &mut PixelBuffer, payload: &[u8]) -> Result<()> {
    let available = capacity(buffer.rows(), buffer.cols(), false);
    if payload.len() > available {
        return Err(StegoError::CapacityExceeded {
            required: payload.len(),
            available,
        });
    }

    buffer
        .slots_mut(payload.len())
        .iter_mut()
        .zip(payload)
        .for_each(|(pixel, &byte)| write_pixel(pixel, split(byte)));

    Ok(())
}

/// 以自描述格式隐藏 `message`：第一个像素写入长度，随后写入消息本身。
///
/// # Errors
///
/// * 消息超过 255 字节时返回 [`StegoError::MessageTooLong`]。
/// * 图像放不下长度前缀加消息时返回 [`StegoError::CapacityExceeded`]。
pub fn embed_message(buffer: &mut PixelBuffer, message: &[u8]) -> Result<()> {
    let length = u8::try_from(message.len()).map_err(|_| StegoError::MessageTooLong {
        length: message.len(),
        max: MAX_PREFIXED_LEN,
    })?;

    let available = capacity(buffer.rows(), buffer.cols(), true);
    if message.len() > available {
        return Err(StegoError::CapacityExceeded {
            required: message.len() + LENGTH_PREFIX_SLOTS,
            available: available + LENGTH_PREFIX_SLOTS,
        });
    }

    let mut payload = Vec::with_capacity(message.len() + LENGTH_PREFIX_SLOTS);
    payload.push(length);
    payload.extend_from_slice(message);

    embed(buffer, &payload)
}

/// 从前 `count` 个像素中读取固定数量的字节。
///
/// # Errors
///
/// `count` 超过像素总数时返回 [`StegoError::OutOfBounds`]。
pub fn extract_fixed(buffer: &PixelBuffer, count: usize) -> Result<Vec<u8>> {
    let available = capacity(buffer.rows(), buffer.cols(), false);
    if count > available {
        return Err(StegoError::OutOfBounds { count, available });
    }

    Ok(buffer
        .slots(count)
        .iter()
        .map(|&pixel| merge(read_pixel(pixel)))
        .collect())
}

/// 读取自描述格式的消息：先从第一个像素解出长度，再读取其后对应数量的像素。
///
/// # Errors
///
/// 解出的长度超过剩余像素数时返回 [`StegoError::CorruptLength`]，
/// 通常说明图像未经隐写或已损坏。
pub fn extract_prefixed(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let length = extract_fixed(buffer, LENGTH_PREFIX_SLOTS)?[0] as usize;

    let available = capacity(buffer.rows(), buffer.cols(), true);
    if length > available {
        return Err(StegoError::CorruptLength { length, available });
    }

    let mut message = extract_fixed(buffer, LENGTH_PREFIX_SLOTS + length)?;
    message.drain(..LENGTH_PREFIX_SLOTS);
    Ok(message)
}

fn write_pixel(pixel: &mut Bgr, bits: BitTriple) {
    pixel.blue = (pixel.blue & BLUE_CLEAR_MASK) | bits.low2;
    pixel.green = (pixel.green & GREEN_CLEAR_MASK) | bits.mid3;
    pixel.red = (pixel.red & RED_CLEAR_MASK) | bits.high3;
}

fn read_pixel(pixel: Bgr) -> BitTriple {
    BitTriple::new(pixel.red & LOW3_MASK, pixel.green & LOW3_MASK, pixel.blue & LOW2_MASK)
}
