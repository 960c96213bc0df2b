use rand::{Rng, RngCore};
use rgb332_hide::{
    Bgr, PixelBuffer, StegoError,
    steganography::{capacity, embed, embed_message, extract_fixed, extract_prefixed},
};

/// 一个辅助函数，用于创建带有随机像素的缓冲区
fn random_buffer(rows: usize, cols: usize) -> PixelBuffer {
    let mut raw = vec![0u8; rows * cols * 3];
    rand::rng().fill_bytes(&mut raw);
    PixelBuffer::from_interleaved(rows, cols, 3, &raw).expect("valid buffer")
}

fn random_payload(len: usize) -> Vec<u8> {
    let mut payload = vec![0u8; len];
    rand::rng().fill_bytes(&mut payload);
    payload
}

/// 验证 26×1 图像中固定数量隐藏 'A'..='Z' 后可原样取回
#[test]
fn test_fixed_alphabet_in_single_column() {
    let mut buffer = random_buffer(26, 1);
    let alphabet: Vec<u8> = (65..=90).collect();

    embed(&mut buffer, &alphabet).unwrap();

    assert_eq!(extract_fixed(&buffer, 26).unwrap(), alphabet);
}

/// 验证自描述格式下 "HI" 在 5×1 图像中的往返
#[test]
fn test_prefixed_hi_message() {
    let mut buffer = random_buffer(5, 1);

    embed(&mut buffer, &[2, 72, 73]).unwrap();

    let recovered = extract_prefixed(&buffer).unwrap();
    assert_eq!(recovered, vec![72, 73]);
    assert_eq!(String::from_utf8(recovered).unwrap(), "HI");
}

/// 验证 embed_message 自动写入长度前缀
#[test]
fn test_embed_message_writes_length_prefix() {
    let mut buffer = random_buffer(4, 4);

    embed_message(&mut buffer, b"hello").unwrap();

    assert_eq!(extract_fixed(&buffer, 1).unwrap(), vec![5]);
    assert_eq!(extract_prefixed(&buffer).unwrap(), b"hello");
}

/// 验证随机尺寸与随机载荷下两种格式的往返
#[test]
fn test_random_round_trips() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let rows = rng.random_range(1..=20);
        let cols = rng.random_range(1..=20);

        let fixed_len = rng.random_range(0..=rows * cols);
        let payload = random_payload(fixed_len);
        let mut buffer = random_buffer(rows, cols);
        embed(&mut buffer, &payload).unwrap();
        assert_eq!(extract_fixed(&buffer, fixed_len).unwrap(), payload);

        let message_len = rng.random_range(0..=(rows * cols - 1).min(255));
        let message = random_payload(message_len);
        let mut buffer = random_buffer(rows, cols);
        embed_message(&mut buffer, &message).unwrap();
        assert_eq!(extract_prefixed(&buffer).unwrap(), message);
    }
}

/// 验证载荷之外的像素逐位保持不变，载荷像素只改动低位
#[test]
fn test_untouched_and_high_bits_preserved() {
    let original = random_buffer(8, 7);
    let payload = random_payload(20);
    let mut buffer = original.clone();

    embed(&mut buffer, &payload).unwrap();

    for (i, (before, after)) in original.pixels().iter().zip(buffer.pixels()).enumerate() {
        if i < payload.len() {
            assert_eq!(before.blue & 0xFC, after.blue & 0xFC, "blue high bits at {i}");
            assert_eq!(before.green & 0xF8, after.green & 0xF8, "green high bits at {i}");
            assert_eq!(before.red & 0xF8, after.red & 0xF8, "red high bits at {i}");
        } else {
            assert_eq!(before, after, "pixel {i} beyond payload must not change");
        }
    }
}

/// 验证每个通道承载的具体位：高 3 位→红，中 3 位→绿，低 2 位→蓝
#[test]
fn test_channel_bit_assignment() {
    let mut buffer = PixelBuffer::filled(1, 1, Bgr::new(0xFF, 0xFF, 0xFF)).unwrap();

    embed(&mut buffer, &[0b101_010_01]).unwrap();

    assert_eq!(
        buffer.get(0, 0),
        Some(&Bgr::new(0xFC | 0b01, 0xF8 | 0b010, 0xF8 | 0b101))
    );
}

/// 验证光栅顺序：写满一行后才进入下一行
#[test]
fn test_raster_order_across_rows() {
    let mut buffer = PixelBuffer::filled(2, 3, Bgr::default()).unwrap();

    embed(&mut buffer, &[1, 2, 3, 4]).unwrap();

    let byte_at = |row, col| {
        let px = buffer.get(row, col).unwrap();
        ((px.red & 7) << 5) | ((px.green & 7) << 2) | (px.blue & 3)
    };
    assert_eq!(byte_at(0, 0), 1);
    assert_eq!(byte_at(0, 2), 3);
    assert_eq!(byte_at(1, 0), 4);
    assert_eq!(buffer.get(1, 1), Some(&Bgr::default()));
}

/// 验证 2×2 图像的容量边界
#[test]
fn test_capacity_boundary() {
    assert_eq!(capacity(2, 2, false), 4);
    assert_eq!(capacity(2, 2, true), 3);

    let original = random_buffer(2, 2);
    let mut buffer = original.clone();
    assert_eq!(
        embed(&mut buffer, &[1, 2, 3, 4, 5]),
        Err(StegoError::CapacityExceeded {
            required: 5,
            available: 4
        })
    );
    assert_eq!(buffer, original, "failed embed must not modify the buffer");

    embed_message(&mut buffer, b"abc").unwrap();
    assert_eq!(extract_prefixed(&buffer).unwrap(), b"abc");

    let mut buffer = original.clone();
    assert!(matches!(
        embed_message(&mut buffer, b"abcd"),
        Err(StegoError::CapacityExceeded { .. })
    ));
    assert_eq!(buffer, original);
}

/// 验证超过 255 字节的自描述消息被拒绝
#[test]
fn test_message_too_long() {
    let mut buffer = random_buffer(20, 20);

    assert_eq!(
        embed_message(&mut buffer, &[0u8; 256]),
        Err(StegoError::MessageTooLong {
            length: 256,
            max: 255
        })
    );

    embed_message(&mut buffer, &[7u8; 255]).unwrap();
    assert_eq!(extract_prefixed(&buffer).unwrap(), vec![7u8; 255]);
}

/// 验证固定数量提取越界时报错
#[test]
fn test_extract_fixed_out_of_bounds() {
    let buffer = random_buffer(3, 3);

    assert_eq!(
        extract_fixed(&buffer, 10),
        Err(StegoError::OutOfBounds {
            count: 10,
            available: 9
        })
    );
    assert_eq!(extract_fixed(&buffer, 9).unwrap().len(), 9);
    assert!(extract_fixed(&buffer, 0).unwrap().is_empty());
}

/// 验证长度前缀超出图像范围时报告损坏
#[test]
fn test_extract_prefixed_corrupt_length() {
    let mut buffer = random_buffer(2, 2);
    embed(&mut buffer, &[200]).unwrap();

    assert_eq!(
        extract_prefixed(&buffer),
        Err(StegoError::CorruptLength {
            length: 200,
            available: 3
        })
    );
}

/// 验证单像素图像：只能容纳长度前缀 0
#[test]
fn test_single_pixel_image() {
    let mut buffer = random_buffer(1, 1);

    embed_message(&mut buffer, b"").unwrap();
    assert!(extract_prefixed(&buffer).unwrap().is_empty());

    assert!(matches!(
        embed_message(&mut buffer, b"x"),
        Err(StegoError::CapacityExceeded { .. })
    ));
}
