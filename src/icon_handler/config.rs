//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `IconConfig`，保证运行时行为可观测、可调整、可测试。
//! 裁边策略与 PNG 压缩档位作为高层语义，通过字符串解析供命令行直接使用。
//!
//! ## 实现思路
//!
//! - `Default` 提供与原始脚本一致的配置：按左上角像素裁边、无压缩输出。
//! - `TrimStrategy` / `PngCompression` 负责档位字符串解析与反向输出。
//! - `amplification` 将 scale/offset 组合成裁边模块使用的噪声抑制参数。

use super::IconError;
use super::trim::Amplification;

/// 裁边策略。
///
/// - `None`：不裁边，直接使用原图
/// - `Corner`：以 (0,0) 像素作为背景色裁边
/// - `CornerOrWhite`：额外以纯白背景裁边，面积严格更小时采用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimStrategy {
    None,
    Corner,
    CornerOrWhite,
}

impl TrimStrategy {
    /// 从外部字符串解析裁边策略。
    ///
    /// # 示例
    /// ```rust
    /// use icon_resizer::icon_handler::TrimStrategy;
    ///
    /// let s = TrimStrategy::from_str("corner-or-white")?;
    /// assert_eq!(s.as_str(), "corner-or-white");
    /// # Ok::<(), icon_resizer::icon_handler::IconError>(())
    /// ```
    pub fn from_str(strategy: &str) -> Result<Self, IconError> {
        match strategy.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "corner" => Ok(Self::Corner),
            "corner-or-white" => Ok(Self::CornerOrWhite),
            other => Err(IconError::InvalidConfig(format!(
                "未知裁边策略：{}（可选：none / corner / corner-or-white）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Corner => "corner",
            Self::CornerOrWhite => "corner-or-white",
        }
    }
}

/// PNG 压缩档位。
///
/// 所有档位都是无损的；`Uncompressed` 不做 deflate 压缩也不做行过滤，
/// 对应图标资源的“最高保真”策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngCompression {
    Uncompressed,
    Balanced,
    Smallest,
}

impl PngCompression {
    /// 从外部字符串解析压缩档位。
    pub fn from_str(profile: &str) -> Result<Self, IconError> {
        match profile.trim().to_lowercase().as_str() {
            "uncompressed" => Ok(Self::Uncompressed),
            "balanced" => Ok(Self::Balanced),
            "smallest" => Ok(Self::Smallest),
            other => Err(IconError::InvalidConfig(format!(
                "未知压缩档位：{}（可选：uncompressed / balanced / smallest）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uncompressed => "uncompressed",
            Self::Balanced => "balanced",
            Self::Smallest => "smallest",
        }
    }
}

/// 图标生成配置。
///
/// 字段覆盖了加载、裁边、编码三个阶段。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 裁边策略。
    pub trim: TrimStrategy,
    /// 差值放大公式 `(d + d) / scale + offset` 中的 scale。
    pub trim_scale: f32,
    /// 差值放大公式中的 offset，负值用于吸收压缩噪声。
    pub trim_offset: f32,
    /// 输出 PNG 的压缩档位。
    pub compression: PngCompression,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            trim: TrimStrategy::Corner,
            trim_scale: 2.0,
            trim_offset: -100.0,
            compression: PngCompression::Uncompressed,
            max_decoded_pixels: 40_000_000,
        }
    }
}

impl IconConfig {
    /// 裁边模块使用的噪声抑制参数。
    pub(crate) fn amplification(&self) -> Amplification {
        Amplification {
            scale: self.trim_scale,
            offset: self.trim_offset,
        }
    }

    /// 校验配置本身是否可用。
    pub(crate) fn validate(&self) -> Result<(), IconError> {
        if !(self.trim_scale.is_finite() && self.trim_scale > 0.0) {
            return Err(IconError::InvalidConfig(format!(
                "裁边放大系数必须为正数：{}",
                self.trim_scale
            )));
        }

        if !self.trim_offset.is_finite() {
            return Err(IconError::InvalidConfig(format!(
                "裁边偏移量必须为有限数：{}",
                self.trim_offset
            )));
        }

        if self.max_decoded_pixels == 0 {
            return Err(IconError::InvalidConfig("像素上限不能为 0".to_string()));
        }

        Ok(())
    }
}
