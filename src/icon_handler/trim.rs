//! # 裁边模块
//!
//! ## 设计思路
//!
//! 两种裁边启发式（按左上角像素、按纯白背景）本质相同：
//! “与参考色的差值超过阈值的像素”的最小外接矩形。
//! 因此只实现一个通用的 `reference_bbox`，以参考色与放大参数区分。
//!
//! ## 实现思路
//!
//! 1. 逐像素、逐通道计算 `|p - ref|`
//! 2. 线性放大 `(d + d) / scale + offset` 并截断到 `0..=255`，吸收压缩噪声
//! 3. 任一通道非零即视为前景，累积外接矩形；
//!    像素与参考色都完全透明时只比较 alpha（不可见像素的 RGB 不参与）
//! 4. 找不到前景（纯色图）时返回 `None`，调用方保持原图不变

use image::{Rgba, RgbaImage};

use super::TrimStrategy;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// 裁边外接矩形，`right` / `bottom` 为开区间。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimBoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl TrimBoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

/// 差值放大参数。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amplification {
    pub scale: f32,
    pub offset: f32,
}

impl Default for Amplification {
    fn default() -> Self {
        Self {
            scale: 2.0,
            offset: -100.0,
        }
    }
}

impl Amplification {
    fn apply(self, diff: u8) -> u8 {
        let doubled = f32::from(diff) * 2.0;
        (doubled / self.scale + self.offset).clamp(0.0, 255.0) as u8
    }
}

/// 计算与参考色存在明显差异的像素的最小外接矩形。
///
/// 所有像素都与参考色一致（在噪声容差内）时返回 `None`。
pub fn reference_bbox(
    image: &RgbaImage,
    reference: Rgba<u8>,
    amplification: Amplification,
) -> Option<TrimBoundingBox> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 && reference[3] == 0 {
            continue;
        }

        let differs = pixel
            .0
            .iter()
            .zip(reference.0.iter())
            .any(|(&p, &r)| amplification.apply(p.abs_diff(r)) > 0);

        if !differs {
            continue;
        }

        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((left, top, right, bottom)) => {
                (left.min(x), top.min(y), right.max(x), bottom.max(y))
            }
        });
    }

    bounds.map(|(left, top, right, bottom)| TrimBoundingBox {
        left,
        top,
        right: right + 1,
        bottom: bottom + 1,
    })
}

/// 按策略选出裁边矩形。
///
/// `CornerOrWhite` 会额外以纯白为背景计算一次，只有面积严格更小时才采用，
/// 用于处理“白色底板而非透明通道”的素材。
pub fn select_bbox(
    image: &RgbaImage,
    strategy: TrimStrategy,
    amplification: Amplification,
) -> Option<TrimBoundingBox> {
    if image.width() == 0 || image.height() == 0 {
        return None;
    }

    let corner = *image.get_pixel(0, 0);

    match strategy {
        TrimStrategy::None => None,
        TrimStrategy::Corner => reference_bbox(image, corner, amplification),
        TrimStrategy::CornerOrWhite => {
            let by_corner = reference_bbox(image, corner, amplification);
            let by_white = reference_bbox(image, WHITE, amplification);

            match (by_corner, by_white) {
                (Some(c), Some(w)) if w.area() < c.area() => {
                    log::debug!("白底裁边更紧凑：{:?} -> {:?}", c, w);
                    Some(w)
                }
                (Some(c), _) => Some(c),
                (None, _) => None,
            }
        }
    }
}

/// 按矩形裁剪，返回独立的新图像。
pub fn crop(image: &RgbaImage, bbox: TrimBoundingBox) -> RgbaImage {
    image::imageops::crop_imm(image, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}
