//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入”和“流水线中间结果”解耦：
//! - `SourceImage` 表示已解码、已转 RGBA 的源图，单次运行独占
//! - `RunReport` 表示一次图标族生成的结果摘要

use image::RgbaImage;
use std::path::PathBuf;

use super::trim::{self, Amplification, TrimBoundingBox};
use super::TrimStrategy;

/// 已解码的源图片（RGBA）。
///
/// 只会被裁边替换为子区域的新图像，本身从不落盘。
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// 按策略裁边并替换当前像素。
    ///
    /// 返回实际采用的矩形；纯色图或 `TrimStrategy::None` 时返回 `None` 且图像不变。
    pub fn trim(
        &mut self,
        strategy: TrimStrategy,
        amplification: Amplification,
    ) -> Option<TrimBoundingBox> {
        let bbox = trim::select_bbox(&self.pixels, strategy, amplification)?;

        if bbox.left == 0
            && bbox.top == 0
            && bbox.width() == self.width()
            && bbox.height() == self.height()
        {
            return Some(bbox);
        }

        self.pixels = trim::crop(&self.pixels, bbox);
        Some(bbox)
    }
}

/// 单次图标族生成的结果摘要。
#[derive(Debug, Clone)]
pub struct RunReport {
    /// 图标族名称。
    pub family: String,
    /// 源图原始尺寸。
    pub source_size: (u32, u32),
    /// 裁边后尺寸（未裁边时与原始尺寸相同）。
    pub trimmed_size: (u32, u32),
    /// 按写入顺序排列的输出文件。
    pub outputs: Vec<PathBuf>,
}
