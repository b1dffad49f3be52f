//! 命令行参数模块
//!
//! # 设计思路
//!
//! 源图片与输出目录都是显式参数，不再写死在代码里。
//! 参数解析（clap）与“参数 → 运行计划”的转换分开，后者可以直接单元测试。

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::icon_handler::{
    FamilyJob, FamilyKind, IconConfig, IconFamily, PaddingPreset, PngCompression, TrimStrategy,
};

#[derive(Debug, Parser)]
#[command(
    name = "icon-resizer",
    about = "Generate browser-extension and Android launcher icons from a single logo"
)]
pub struct CliArgs {
    /// Path to the source logo (PNG or any format decodable to RGBA).
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Built-in icon family: extension | android | all.
    #[arg(short, long, value_name = "FAMILY", conflicts_with = "family_file")]
    pub family: Option<String>,

    /// JSON file describing a custom icon family.
    #[arg(long, value_name = "FILE")]
    pub family_file: Option<PathBuf>,

    /// Output root for every selected family. Without it, `extension`
    /// and custom families write beside the source, `android` into `./res`.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Padding preset for built-in families: full-bleed (default) | padded | maximized.
    #[arg(long, value_name = "PRESET", conflicts_with = "family_file")]
    pub preset: Option<String>,

    /// Padding fraction applied to every target, in [0, 0.5). Overrides the preset.
    #[arg(short, long, value_name = "FRACTION")]
    pub padding: Option<f64>,

    /// Trim strategy: none | corner | corner-or-white.
    #[arg(long, default_value = "corner")]
    pub trim: String,

    /// PNG compression: uncompressed | balanced | smallest.
    #[arg(long, default_value = "uncompressed")]
    pub compression: String,
}

/// 一次运行所需的全部输入。
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub source: PathBuf,
    /// 共享同一次加载与裁边的图标族，按顺序生成。
    pub jobs: Vec<FamilyJob>,
    pub config: IconConfig,
}

impl CliArgs {
    /// 将命令行参数转换为运行计划。
    pub fn into_plan(self) -> Result<RunPlan, AppError> {
        let config = IconConfig {
            trim: TrimStrategy::from_str(&self.trim)?,
            compression: PngCompression::from_str(&self.compression)?,
            ..IconConfig::default()
        };

        let mut families = match (&self.family_file, &self.family) {
            (Some(path), _) => vec![(IconFamily::from_json_file(path)?, source_dir(&self.source))],
            (None, selection) => {
                let preset = match &self.preset {
                    Some(preset) => PaddingPreset::from_str(preset)?,
                    None => PaddingPreset::FullBleed,
                };
                parse_selection(selection.as_deref().unwrap_or("android"))?
                    .into_iter()
                    .map(|kind| {
                        let root = match kind {
                            FamilyKind::Extension => source_dir(&self.source),
                            FamilyKind::Android => PathBuf::from("res"),
                        };
                        (kind.family(preset), root)
                    })
                    .collect()
            }
        };

        if let Some(padding) = self.padding {
            if !(0.0..0.5).contains(&padding) {
                return Err(AppError::Argument(format!(
                    "--padding 必须在 [0, 0.5) 内：{}",
                    padding
                )));
            }
            families = families
                .into_iter()
                .map(|(family, root)| (family.with_padding(padding), root))
                .collect();
        }

        let jobs = families
            .into_iter()
            .map(|(family, default_root)| FamilyJob {
                family,
                output_root: self.output.clone().unwrap_or(default_root),
            })
            .collect();

        Ok(RunPlan {
            source: self.source,
            jobs,
            config,
        })
    }
}

/// `all` 展开为扩展 + Android，其余按单个图标族解析。
fn parse_selection(selection: &str) -> Result<Vec<FamilyKind>, AppError> {
    if selection.trim().eq_ignore_ascii_case("all") {
        return Ok(vec![FamilyKind::Extension, FamilyKind::Android]);
    }
    Ok(vec![FamilyKind::from_str(selection)?])
}

fn source_dir(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("icon-resizer").chain(args.iter().copied()))
            .expect("args should parse")
    }

    #[test]
    fn android_is_the_default_family() {
        let plan = parse(&["assets/logo.png"]).into_plan().unwrap();

        assert_eq!(plan.jobs.len(), 1);
        assert_eq!(plan.jobs[0].family, IconFamily::android_mipmap());
        assert_eq!(plan.jobs[0].output_root, PathBuf::from("res"));
        assert_eq!(plan.config.compression, PngCompression::Uncompressed);
    }

    #[test]
    fn extension_family_writes_beside_source() {
        let plan = parse(&["assets/logo.png", "--family", "extension"])
            .into_plan()
            .unwrap();

        assert_eq!(plan.jobs[0].output_root, PathBuf::from("assets"));

        let bare = parse(&["logo.png", "-f", "extension"]).into_plan().unwrap();
        assert_eq!(bare.jobs[0].output_root, PathBuf::from("."));
    }

    #[test]
    fn all_families_keep_their_own_default_roots() {
        let plan = parse(&["assets/logo.png", "--family", "all", "--preset", "maximized"])
            .into_plan()
            .unwrap();

        let layout: Vec<(&str, PathBuf)> = plan
            .jobs
            .iter()
            .map(|job| (job.family.name.as_str(), job.output_root.clone()))
            .collect();
        assert_eq!(
            layout,
            [
                ("extension", PathBuf::from("assets")),
                ("android", PathBuf::from("res")),
            ]
        );
        assert_eq!(
            plan.jobs[0].family,
            IconFamily::extension_with(PaddingPreset::Maximized)
        );
        assert_eq!(
            plan.jobs[1].family,
            IconFamily::android_mipmap_with(PaddingPreset::Maximized)
        );
    }

    #[test]
    fn explicit_output_and_padding_are_applied() {
        let plan = parse(&[
            "logo.png",
            "--output",
            "out",
            "--padding",
            "0.15",
            "--trim",
            "corner-or-white",
            "--compression",
            "smallest",
        ])
        .into_plan()
        .unwrap();

        assert_eq!(plan.jobs[0].output_root, PathBuf::from("out"));
        assert!(plan.jobs[0].family.targets.iter().all(|t| t.padding == 0.15));
        assert_eq!(plan.config.trim, TrimStrategy::CornerOrWhite);
        assert_eq!(plan.config.compression, PngCompression::Smallest);
    }

    #[test]
    fn out_of_range_padding_is_an_argument_error() {
        let result = parse(&["logo.png", "--padding", "0.7"]).into_plan();

        assert!(matches!(result, Err(AppError::Argument(_))));
    }

    #[test]
    fn family_and_family_file_conflict() {
        let result = CliArgs::try_parse_from([
            "icon-resizer",
            "logo.png",
            "--family",
            "android",
            "--family-file",
            "f.json",
        ]);

        assert!(result.is_err());

        let with_preset = CliArgs::try_parse_from([
            "icon-resizer",
            "logo.png",
            "--preset",
            "padded",
            "--family-file",
            "f.json",
        ]);
        assert!(with_preset.is_err());
    }

    #[test]
    fn unknown_family_or_preset_is_rejected() {
        let family = parse(&["logo.png", "--family", "ios"]).into_plan();
        let preset = parse(&["logo.png", "--preset", "huge"]).into_plan();

        assert!(matches!(family, Err(AppError::Icon(_))));
        assert!(matches!(preset, Err(AppError::Icon(_))));
    }
}
