//! # 等比适配与重采样模块
//!
//! ## 设计思路
//!
//! 将“算布局”与“做重采样”分开：布局是纯整数/浮点计算，便于穷举测试；
//! 重采样固定使用 Lanczos3，小尺寸图标的边缘质量不能用最近邻或双线性换速度。
//!
//! ## 实现思路
//!
//! 1. 可绘制边长 `A = S - 2 * floor(S * p)`
//! 2. 长边缩放到 `A`，短边按宽高比向下取整（至少 1 像素）
//! 3. 偏移量 `floor((S - w) / 2)`，保证完全落在画布内且居中
//! 4. `fast_image_resize` 执行卷积缩放，失败时回退 `image::imageops::resize`

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::RgbaImage;

use super::{IconError, IconTransformer};

/// 适配布局：缩放后尺寸与在画布上的偏移。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitLayout {
    /// 画布边长 `S`。
    pub canvas: u32,
    /// 扣除留白后的可绘制边长 `A`。
    pub available: u32,
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

/// 计算等比适配布局。
///
/// # 示例
/// ```rust
/// use icon_resizer::icon_handler::compute_layout;
///
/// let layout = compute_layout(1024, 512, 96, 0.0)?;
/// assert_eq!((layout.width, layout.height, layout.x, layout.y), (96, 48, 0, 24));
/// # Ok::<(), icon_resizer::icon_handler::IconError>(())
/// ```
pub fn compute_layout(
    source_width: u32,
    source_height: u32,
    size: u32,
    padding: f64,
) -> Result<FitLayout, IconError> {
    if source_width == 0 || source_height == 0 {
        return Err(IconError::Decode("源图片尺寸为 0".to_string()));
    }

    if size == 0 {
        return Err(IconError::InvalidConfig("目标尺寸不能为 0".to_string()));
    }

    if !(0.0..0.5).contains(&padding) {
        return Err(IconError::InvalidConfig(format!(
            "留白比例必须在 [0, 0.5) 内：{}",
            padding
        )));
    }

    let pad = (f64::from(size) * padding).floor() as u32;
    let available = size
        .checked_sub(pad * 2)
        .filter(|available| *available > 0)
        .ok_or_else(|| {
            IconError::InvalidConfig(format!(
                "留白比例 {} 在 {}px 画布上没有剩余绘制空间",
                padding, size
            ))
        })?;

    let aspect = f64::from(source_width) / f64::from(source_height);
    let (width, height) = if source_width > source_height {
        let height = (f64::from(available) / aspect).floor() as u32;
        (available, height.clamp(1, available))
    } else {
        let width = (f64::from(available) * aspect).floor() as u32;
        (width.clamp(1, available), available)
    };

    Ok(FitLayout {
        canvas: size,
        available,
        width,
        height,
        x: (size - width) / 2,
        y: (size - height) / 2,
    })
}

impl IconTransformer {
    /// 使用 Lanczos3 将图像缩放到指定尺寸。
    ///
    /// 尺寸不变时直接返回副本，保证重复执行的结果一致。
    pub(crate) fn resize_lanczos(
        image: &RgbaImage,
        target_width: u32,
        target_height: u32,
    ) -> RgbaImage {
        if image.dimensions() == (target_width, target_height) {
            return image.clone();
        }

        match Self::resize_with_fast_image_resize(image, target_width, target_height) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                    err
                );
                image::imageops::resize(image, target_width, target_height, FilterType::Lanczos3)
            }
        }
    }

    fn resize_with_fast_image_resize(
        image: &RgbaImage,
        target_width: u32,
        target_height: u32,
    ) -> Result<RgbaImage, IconError> {
        let (src_width, src_height) = image.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            image.as_raw().clone(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }
}
