//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! 对用户而言只有两类结果：
//! - `MissingSource`：源图片不存在，任何输出都不会产生
//! - 其余分支：处理失败，当前图标族剩余输出不再尝试（已写入的文件保留）

use std::path::PathBuf;

/// 图标处理统一错误类型。
///
/// 该类型会在入口层被上转为 `AppError`，最终打印给用户。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("源图片不存在：{}", .0.display())]
    MissingSource(PathBuf),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),
}

impl IconError {
    /// 是否为“源图片缺失”错误（其余均视为处理失败）。
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Self::MissingSource(_))
    }
}
