//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconTransformer` 只负责流程编排与配置持有，不关心命令行。
//! 处理链路固定为：
//! 1. 校验配置与所有图标族描述
//! 2. 加载源图片（缺失时不产生任何输出）
//! 3. 裁边一次
//! 4. 按顺序对每个图标族的每个目标：适配 → 合成 → 编码 → 写入所有文件名
//!
//! ## 实现思路
//!
//! - 多个图标族共享同一次加载与裁边。
//! - 任一目标失败立即返回，剩余目标不再尝试；已写入的文件不回滚。
//! - 记录 `load/trim/render/total` 阶段耗时，便于性能诊断。

use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::canvas::{self, compose};
use super::family::{IconFamily, TargetSpec};
use super::pipeline::compute_layout;
use super::source::{RunReport, SourceImage};
use super::{IconConfig, IconError};

/// 单个图标族及其输出根目录。
#[derive(Debug, Clone)]
pub struct FamilyJob {
    pub family: IconFamily,
    pub output_root: PathBuf,
}

/// 图标生成器。
///
/// 封装配置，并编排各子模块实现完整流程。
pub struct IconTransformer {
    config: IconConfig,
}

impl IconTransformer {
    /// 根据配置创建生成器。
    ///
    /// # 示例
    /// ```rust
    /// use icon_resizer::icon_handler::{IconConfig, IconTransformer};
    ///
    /// let transformer = IconTransformer::new(IconConfig::default());
    /// assert_eq!(transformer.config().trim_offset, -100.0);
    /// ```
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// 为一个图标族生成全部输出。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use icon_resizer::icon_handler::{IconConfig, IconFamily, IconTransformer};
    /// use std::path::Path;
    ///
    /// let transformer = IconTransformer::new(IconConfig::default());
    /// let report = transformer.run(
    ///     Path::new("logo.png"),
    ///     &IconFamily::android_mipmap(),
    ///     Path::new("app/src/main/res"),
    /// )?;
    /// assert_eq!(report.outputs.len(), 10);
    /// # Ok::<(), icon_resizer::icon_handler::IconError>(())
    /// ```
    pub fn run(
        &self,
        source_path: &Path,
        family: &IconFamily,
        output_root: &Path,
    ) -> Result<RunReport, IconError> {
        let job = FamilyJob {
            family: family.clone(),
            output_root: output_root.to_path_buf(),
        };
        let mut reports = self.run_all(source_path, std::slice::from_ref(&job))?;
        reports
            .pop()
            .ok_or_else(|| IconError::InvalidConfig("没有生成任何图标族".to_string()))
    }

    /// 加载并裁边一次，然后按顺序生成多个图标族。
    ///
    /// 任一图标族失败时立即返回，后续图标族不再尝试。
    pub fn run_all(
        &self,
        source_path: &Path,
        jobs: &[FamilyJob],
    ) -> Result<Vec<RunReport>, IconError> {
        let total_started = Instant::now();
        let config = &self.config;
        config.validate()?;
        if jobs.is_empty() {
            return Err(IconError::InvalidConfig("没有指定任何图标族".to_string()));
        }
        for job in jobs {
            job.family.validate()?;
        }

        let load_started = Instant::now();
        let mut source = self.load_source(source_path, config)?;
        let load_elapsed = load_started.elapsed();
        let source_size = source.dimensions();

        let trim_started = Instant::now();
        match source.trim(config.trim, config.amplification()) {
            Some(bbox) => log::info!(
                "✂️ 裁边完成 - 策略: {} 矩形: ({}, {})-({}, {}) 尺寸: {}x{} -> {}x{}",
                config.trim.as_str(),
                bbox.left,
                bbox.top,
                bbox.right,
                bbox.bottom,
                source_size.0,
                source_size.1,
                source.width(),
                source.height()
            ),
            None => log::info!("✂️ 未裁边 - 策略: {}", config.trim.as_str()),
        }
        let trim_elapsed = trim_started.elapsed();

        let mut reports = Vec::with_capacity(jobs.len());
        for job in jobs {
            let render_started = Instant::now();
            let mut outputs = Vec::new();
            for target in &job.family.targets {
                let written = self.render_target(&source, target, &job.output_root)?;
                outputs.extend(written);
            }

            log::info!(
                "🗂️ 图标族 {} 生成完成 - 输出根目录: {} render: {:?} 文件数: {}",
                job.family.name,
                job.output_root.display(),
                render_started.elapsed(),
                outputs.len()
            );

            reports.push(RunReport {
                family: job.family.name.clone(),
                source_size,
                trimmed_size: source.dimensions(),
                outputs,
            });
        }

        log::info!(
            "⏱️ 全部完成 - 图标族: {} load: {:?} trim: {:?} total: {:?}",
            reports.len(),
            load_elapsed,
            trim_elapsed,
            total_started.elapsed()
        );

        Ok(reports)
    }

    /// 对单张图执行“等比适配 + 居中合成”，返回 `size x size` 画布。
    pub fn render(
        &self,
        image: &RgbaImage,
        size: u32,
        padding: f64,
    ) -> Result<RgbaImage, IconError> {
        let layout = compute_layout(image.width(), image.height(), size, padding)?;
        let fitted = Self::resize_lanczos(image, layout.width, layout.height);
        Ok(compose(&fitted, &layout))
    }

    fn render_target(
        &self,
        source: &SourceImage,
        target: &TargetSpec,
        output_root: &Path,
    ) -> Result<Vec<PathBuf>, IconError> {
        let canvas = self.render(source.pixels(), target.size, target.padding)?;
        let bytes = canvas::encode_png(&canvas, self.config.compression)?;

        let target_dir = match &target.subdirectory {
            Some(subdirectory) => output_root.join(subdirectory),
            None => output_root.to_path_buf(),
        };
        fs::create_dir_all(&target_dir).map_err(|e| {
            IconError::FileSystem(format!("创建目录 {} 失败：{}", target_dir.display(), e))
        })?;

        let mut written = Vec::with_capacity(target.file_names.len());
        for file_name in &target.file_names {
            let path = target_dir.join(file_name);
            canvas::write_png(&path, &bytes)?;
            log::info!(
                "🖼️ 已生成 {}x{} 图标 [{}] -> {}（{}）",
                target.size,
                target.size,
                target.label,
                path.display(),
                self.config.compression.as_str()
            );
            written.push(path);
        }

        Ok(written)
    }
}
