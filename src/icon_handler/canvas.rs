//! # 画布合成与编码模块
//!
//! ## 设计思路
//!
//! 画布始终是 `S x S` 的全透明 RGBA；缩放后的图像按自身 alpha 作为二值遮罩贴入：
//! alpha > 0 的像素原样覆盖，其余位置保持透明，不做跨边缘的部分覆盖混合。
//!
//! ## 实现思路
//!
//! - `compose` 只依赖 `FitLayout`，不关心布局如何得出。
//! - `encode_png` 先编码到内存，便于同一画布写入多个文件名（round 别名）。
//! - `Uncompressed` 档位不压缩、不做行过滤，避免任何代际质量损失。

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use std::fs;
use std::path::Path;

use super::pipeline::FitLayout;
use super::{IconError, PngCompression};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// 将已缩放图像居中贴到全透明画布上。
pub fn compose(fitted: &RgbaImage, layout: &FitLayout) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(layout.canvas, layout.canvas, TRANSPARENT);

    for (x, y, pixel) in fitted.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }

        let (dst_x, dst_y) = (layout.x + x, layout.y + y);
        if dst_x < layout.canvas && dst_y < layout.canvas {
            canvas.put_pixel(dst_x, dst_y, *pixel);
        }
    }

    canvas
}

/// 将画布编码为 PNG 字节。
pub fn encode_png(canvas: &RgbaImage, compression: PngCompression) -> Result<Vec<u8>, IconError> {
    let (compression_type, filter) = match compression {
        PngCompression::Uncompressed => (CompressionType::Uncompressed, PngFilter::NoFilter),
        PngCompression::Balanced => (CompressionType::Default, PngFilter::Adaptive),
        PngCompression::Smallest => (CompressionType::Best, PngFilter::Adaptive),
    };

    let mut bytes = Vec::new();
    PngEncoder::new_with_quality(&mut bytes, compression_type, filter)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| IconError::Encode(format!("PNG 编码失败：{}", e)))?;

    Ok(bytes)
}

/// 将已编码的 PNG 写入目标路径。
pub fn write_png(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    fs::write(path, bytes)
        .map_err(|e| IconError::FileSystem(format!("写入 {} 失败：{}", path.display(), e)))
}
