//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义入口层统一的 `AppError` 枚举，命令行参数错误与图标处理错误
//! 都汇总到这里，`main` 只需要一种错误类型即可打印并决定退出码。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 提供 `From` 转换，无需手动 map。

use crate::icon_handler::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标生成流水线错误（加载 / 裁边 / 编码 / 写入）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 命令行参数不合法
    #[error("参数错误: {0}")]
    Argument(String),
}

impl AppError {
    /// 进程退出码：源图片缺失为 2，其余失败为 1。
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Icon(err) if err.is_missing_source() => 2,
            _ => 1,
        }
    }
}
