//! # 图标生成模块（icon_handler）
//!
//! ## 设计思路
//!
//! 该模块将“加载校验 → 裁边 → 等比适配 → 画布合成 → 编码落盘”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线（`IconTransformer`）
//! - `loader`：负责源文件存在性、像素上限与解码
//! - `trim`：负责按参考色计算外接矩形并裁剪
//! - `pipeline`：负责适配布局计算与 Lanczos 重采样
//! - `canvas`：负责透明画布合成与 PNG 编码
//! - `family`：负责图标族描述（内置族 + JSON 自定义族）
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! 可以按下面顺序理解调用链：
//!
//! ```text
//! main.rs（命令行参数 → IconConfig + 若干 FamilyJob）
//!    ↓
//! handler.rs（run_all 统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（存在性 + 像素上限 + 解码为 RGBA）
//!    ├─ trim.rs（参考色外接矩形 + 裁剪，所有图标族共享一次）
//!    └─ 每个 FamilyJob 的每个 TargetSpec：
//!         ├─ pipeline.rs（布局 + Lanczos 缩放）
//!         └─ canvas.rs（合成 + 编码 + 写入所有文件名）
//!    ↓
//! 返回 Vec<RunReport> / IconError
//! ```

mod canvas;
mod config;
mod error;
mod family;
mod handler;
mod loader;
mod pipeline;
mod source;
mod trim;

pub use canvas::{compose, encode_png};
pub use config::{IconConfig, PngCompression, TrimStrategy};
pub use error::IconError;
pub use family::{
    ANDROID_DENSITIES, ANDROID_LAUNCHER, ANDROID_LAUNCHER_ROUND, EXTENSION_SIZES, FamilyKind,
    IconFamily, PaddingPreset, TargetSpec,
};
pub use handler::{FamilyJob, IconTransformer};
pub use pipeline::{FitLayout, compute_layout};
pub use source::{RunReport, SourceImage};
pub use trim::{Amplification, TrimBoundingBox, reference_bbox, select_bbox};
