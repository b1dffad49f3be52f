//! # Logo 图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs ── clap 参数 ── env_logger 初始化               │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ RunPlan
//! ┌───────┴──────────────────────────────────────────────────┐
//! │  ┌─ error ────── AppError (统一错误类型 + 退出码)          │
//! │  ├─ cli ──────── 参数 → IconConfig + IconFamily + 输出根   │
//! │  └─ icon_handler                                         │
//! │      ├─ loader    存在性 / 像素上限 / 解码               │
//! │      ├─ trim      参考色外接矩形裁边                     │
//! │      ├─ pipeline  等比适配布局 + Lanczos 缩放            │
//! │      ├─ canvas    透明画布合成 + PNG 编码                │
//! │      └─ family    扩展 / Android / 自定义图标族          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，决定进程退出码 |
//! | [`cli`] | 命令行参数解析与运行计划生成 |
//! | [`icon_handler`] | 单张源图 → 多尺寸图标族的完整流水线 |

pub mod cli;
pub mod error;
pub mod icon_handler;
