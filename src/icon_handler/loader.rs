//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理源图片的读取，并在“尽可能早”的阶段执行输入校验。
//! 目标是尽快失败：源文件缺失时不产生任何输出，超大图片在完整解码前拒绝。
//!
//! ## 实现思路
//!
//! 1. 存在性检查（缺失 → `MissingSource`）
//! 2. 读取 header 尺寸，按像素上限快速拒绝
//! 3. 完整解码并统一转换为 RGBA

use image::ImageReader;
use std::path::Path;

use super::source::SourceImage;
use super::{IconConfig, IconError, IconTransformer};

impl IconTransformer {
    /// 从本地路径加载源图片。
    pub(super) fn load_source(
        &self,
        path: &Path,
        config: &IconConfig,
    ) -> Result<SourceImage, IconError> {
        if !path.exists() {
            return Err(IconError::MissingSource(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(IconError::FileSystem(format!(
                "源路径不是文件：{}",
                path.display()
            )));
        }

        let (header_width, header_height) = Self::inspect_dimensions(path)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let decoded = ImageReader::open(path)
            .map_err(|e| IconError::FileSystem(format!("读取源图片失败：{}", e)))?
            .with_guessed_format()
            .map_err(|e| IconError::Decode(format!("无法识别图片格式：{}", e)))?
            .decode()
            .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

        let rgba = decoded.to_rgba8();
        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(IconError::Decode("源图片尺寸为 0".to_string()));
        }

        log::info!(
            "📂 源图片加载成功 - 路径: {} 尺寸: {}x{} 原始颜色类型: {:?}",
            path.display(),
            rgba.width(),
            rgba.height(),
            decoded.color()
        );

        Ok(SourceImage::from_rgba(rgba))
    }

    /// 仅通过图片头信息读取宽高。
    ///
    /// 用于在完整解码前做像素限制检查。
    fn inspect_dimensions(path: &Path) -> Result<(u32, u32), IconError> {
        ImageReader::open(path)
            .map_err(|e| IconError::FileSystem(format!("读取源图片失败：{}", e)))?
            .with_guessed_format()
            .map_err(|e| IconError::Decode(format!("无法识别图片格式：{}", e)))?
            .into_dimensions()
            .map_err(|e| IconError::Decode(format!("无法读取图片尺寸：{}", e)))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(
        config: &IconConfig,
        width: u32,
        height: u32,
    ) -> Result<(), IconError> {
        let pixels = u64::from(width)
            .checked_mul(u64::from(height))
            .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(IconError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn missing_file_is_reported_as_missing_source() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let transformer = IconTransformer::new(IconConfig::default());
        let config = IconConfig::default();

        let result = transformer.load_source(&dir.path().join("nope.png"), &config);

        assert!(matches!(result, Err(IconError::MissingSource(_))));
    }

    #[test]
    fn non_image_payload_is_a_decode_error() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"<html>not an image</html>").expect("write failed");
        let transformer = IconTransformer::new(IconConfig::default());

        let result = transformer.load_source(&path, &IconConfig::default());

        assert!(matches!(result, Err(IconError::Decode(_))));
    }

    #[test]
    fn oversized_image_is_rejected_before_decode() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("big.png");
        RgbaImage::from_pixel(64, 64, Rgba([1, 2, 3, 255]))
            .save(&path)
            .expect("save failed");
        let mut config = IconConfig::default();
        config.max_decoded_pixels = 1_000;
        let transformer = IconTransformer::new(config.clone());

        let result = transformer.load_source(&path, &config);

        assert!(matches!(result, Err(IconError::ResourceLimit(_))));
    }

    #[test]
    fn rgb_sources_are_converted_to_rgba() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("rgb.png");
        image::RgbImage::from_pixel(5, 3, image::Rgb([9, 8, 7]))
            .save(&path)
            .expect("save failed");
        let transformer = IconTransformer::new(IconConfig::default());

        let source = transformer
            .load_source(&path, &IconConfig::default())
            .expect("load failed");

        assert_eq!(source.dimensions(), (5, 3));
        assert_eq!(*source.pixels().get_pixel(0, 0), Rgba([9, 8, 7, 255]));
    }
}
