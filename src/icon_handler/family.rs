//! # 图标族描述模块
//!
//! ## 设计思路
//!
//! 把各平台的尺寸表、目录名、文件名统一成一个可配置的“图标族”描述：
//! 有序的 `{label, size, padding, file_names, subdirectory}` 序列。
//! 内置浏览器扩展与 Android mipmap 两个族，也支持从 JSON 文件加载自定义族。
//!
//! ## 实现思路
//!
//! - `TargetSpec` / `IconFamily` 派生 serde，便于持久化与外部配置。
//! - `PaddingPreset` 描述内置族的留白档位（满版 / 常规留白 / 最大化）。
//! - 多个文件名（如 `ic_launcher_round.png`）写入的是同一张画布，只是别名。
//! - `validate` 在任何输出前拒绝空族、零尺寸、无文件名、越出输出根目录的路径。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};

use super::IconError;

/// Android 启动图标密度桶与尺寸。
pub const ANDROID_DENSITIES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// 浏览器扩展图标尺寸。
pub const EXTENSION_SIZES: [u32; 4] = [16, 32, 48, 128];

pub const ANDROID_LAUNCHER: &str = "ic_launcher.png";
pub const ANDROID_LAUNCHER_ROUND: &str = "ic_launcher_round.png";

/// 单个输出目标。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// 逻辑标签（密度桶或像素尺寸）。
    pub label: String,
    /// 输出正方形边长（像素）。
    pub size: u32,
    /// 单侧留白比例，范围 `[0, 0.5)`。
    #[serde(default)]
    pub padding: f64,
    /// 输出文件名，至少一个；多个文件名写入同一张画布。
    pub file_names: Vec<String>,
    /// 相对输出根目录的子目录，缺省时直接写入根目录。
    #[serde(default)]
    pub subdirectory: Option<String>,
}

/// 有序的输出目标集合。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconFamily {
    pub name: String,
    pub targets: Vec<TargetSpec>,
}

/// 内置图标族类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyKind {
    Extension,
    Android,
}

/// 内置图标族的留白档位。
///
/// - `FullBleed`：全部 0，图形贴满画布
/// - `Padded`：Android 8%，扩展 5%
/// - `Maximized`：Android 15%，扩展 5%，但 16px 不留白（小图留白会糊成一团）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingPreset {
    FullBleed,
    Padded,
    Maximized,
}

impl PaddingPreset {
    pub fn from_str(preset: &str) -> Result<Self, IconError> {
        match preset.trim().to_lowercase().as_str() {
            "full-bleed" => Ok(Self::FullBleed),
            "padded" => Ok(Self::Padded),
            "maximized" => Ok(Self::Maximized),
            other => Err(IconError::InvalidConfig(format!(
                "未知留白档位：{}（可选：full-bleed / padded / maximized）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullBleed => "full-bleed",
            Self::Padded => "padded",
            Self::Maximized => "maximized",
        }
    }

    /// 某个内置族在指定尺寸下的留白比例。
    pub fn padding_for(self, kind: FamilyKind, size: u32) -> f64 {
        match (self, kind) {
            (Self::FullBleed, _) => 0.0,
            (Self::Padded, FamilyKind::Android) => 0.08,
            (Self::Padded, FamilyKind::Extension) => 0.05,
            (Self::Maximized, FamilyKind::Android) => 0.15,
            (Self::Maximized, FamilyKind::Extension) if size <= 16 => 0.0,
            (Self::Maximized, FamilyKind::Extension) => 0.05,
        }
    }
}

impl FamilyKind {
    pub fn from_str(kind: &str) -> Result<Self, IconError> {
        match kind.trim().to_lowercase().as_str() {
            "extension" => Ok(Self::Extension),
            "android" => Ok(Self::Android),
            other => Err(IconError::InvalidConfig(format!(
                "未知图标族：{}（可选：extension / android）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Extension => "extension",
            Self::Android => "android",
        }
    }

    pub fn family(self, preset: PaddingPreset) -> IconFamily {
        match self {
            Self::Extension => IconFamily::extension_with(preset),
            Self::Android => IconFamily::android_mipmap_with(preset),
        }
    }
}

impl IconFamily {
    /// 浏览器扩展图标：`icon{16,32,48,128}.png`，写在输出根目录，不留白。
    pub fn extension() -> Self {
        Self::extension_with(PaddingPreset::FullBleed)
    }

    pub fn extension_with(preset: PaddingPreset) -> Self {
        Self {
            name: FamilyKind::Extension.as_str().to_string(),
            targets: EXTENSION_SIZES
                .iter()
                .map(|&size| TargetSpec {
                    label: size.to_string(),
                    size,
                    padding: preset.padding_for(FamilyKind::Extension, size),
                    file_names: vec![format!("icon{}.png", size)],
                    subdirectory: None,
                })
                .collect(),
        }
    }

    /// Android 启动图标：每个密度目录写 `ic_launcher.png` 与 `ic_launcher_round.png`，不留白。
    pub fn android_mipmap() -> Self {
        Self::android_mipmap_with(PaddingPreset::FullBleed)
    }

    pub fn android_mipmap_with(preset: PaddingPreset) -> Self {
        Self {
            name: FamilyKind::Android.as_str().to_string(),
            targets: ANDROID_DENSITIES
                .iter()
                .map(|&(folder, size)| TargetSpec {
                    label: folder.to_string(),
                    size,
                    padding: preset.padding_for(FamilyKind::Android, size),
                    file_names: vec![
                        ANDROID_LAUNCHER.to_string(),
                        ANDROID_LAUNCHER_ROUND.to_string(),
                    ],
                    subdirectory: Some(folder.to_string()),
                })
                .collect(),
        }
    }

    /// 统一覆盖每个目标的留白比例。
    pub fn with_padding(mut self, padding: f64) -> Self {
        for target in &mut self.targets {
            target.padding = padding;
        }
        self
    }

    /// 从 JSON 文本解析自定义图标族。
    pub fn from_json_str(json: &str) -> Result<Self, IconError> {
        let family: Self = serde_json::from_str(json)
            .map_err(|e| IconError::InvalidConfig(format!("解析图标族描述失败：{}", e)))?;
        family.validate()?;
        Ok(family)
    }

    /// 从 JSON 文件加载自定义图标族。
    pub fn from_json_file(path: &Path) -> Result<Self, IconError> {
        let content = fs::read_to_string(path).map_err(|e| {
            IconError::FileSystem(format!("读取图标族描述 {} 失败：{}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// 校验描述本身是否可执行。
    pub fn validate(&self) -> Result<(), IconError> {
        if self.targets.is_empty() {
            return Err(IconError::InvalidConfig(format!(
                "图标族 {} 没有任何输出目标",
                self.name
            )));
        }

        for target in &self.targets {
            if target.size == 0 {
                return Err(IconError::InvalidConfig(format!(
                    "目标 {} 的尺寸不能为 0",
                    target.label
                )));
            }

            if !(0.0..0.5).contains(&target.padding) {
                return Err(IconError::InvalidConfig(format!(
                    "目标 {} 的留白比例必须在 [0, 0.5) 内：{}",
                    target.label, target.padding
                )));
            }

            if target.file_names.is_empty() {
                return Err(IconError::InvalidConfig(format!(
                    "目标 {} 没有输出文件名",
                    target.label
                )));
            }

            for name in &target.file_names {
                let mut components = Path::new(name).components();
                let single_normal = matches!(components.next(), Some(Component::Normal(_)))
                    && components.next().is_none();
                if !single_normal {
                    return Err(IconError::InvalidConfig(format!(
                        "目标 {} 的文件名必须是单个普通文件名：{:?}",
                        target.label, name
                    )));
                }
            }

            if let Some(subdirectory) = &target.subdirectory {
                if !is_contained_relative(subdirectory) {
                    return Err(IconError::InvalidConfig(format!(
                        "目标 {} 的子目录必须是输出根目录内的相对路径：{:?}",
                        target.label, subdirectory
                    )));
                }
            }
        }

        Ok(())
    }
}

/// 非空、相对、且不含 `..` / 根 / 盘符的路径。
fn is_contained_relative(path: &str) -> bool {
    let path = Path::new(path);
    path.components().next().is_some()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddings(family: &IconFamily) -> Vec<f64> {
        family.targets.iter().map(|t| t.padding).collect()
    }

    #[test]
    fn android_family_matches_density_table() {
        let family = IconFamily::android_mipmap();

        let table: Vec<(&str, u32)> = family
            .targets
            .iter()
            .map(|t| (t.subdirectory.as_deref().unwrap_or(""), t.size))
            .collect();
        assert_eq!(table, ANDROID_DENSITIES.to_vec());
        assert!(family
            .targets
            .iter()
            .all(|t| t.file_names == [ANDROID_LAUNCHER, ANDROID_LAUNCHER_ROUND]));
    }

    #[test]
    fn extension_family_writes_beside_root() {
        let family = IconFamily::extension();

        let names: Vec<&str> = family
            .targets
            .iter()
            .map(|t| t.file_names[0].as_str())
            .collect();
        assert_eq!(names, ["icon16.png", "icon32.png", "icon48.png", "icon128.png"]);
        assert!(family.targets.iter().all(|t| t.subdirectory.is_none()));
    }

    #[test]
    fn full_bleed_preset_has_no_padding() {
        assert_eq!(paddings(&IconFamily::extension()), [0.0; 4]);
        assert_eq!(paddings(&IconFamily::android_mipmap()), [0.0; 5]);
    }

    #[test]
    fn padded_preset_uses_per_family_fractions() {
        assert_eq!(
            paddings(&IconFamily::android_mipmap_with(PaddingPreset::Padded)),
            [0.08; 5]
        );
        assert_eq!(
            paddings(&IconFamily::extension_with(PaddingPreset::Padded)),
            [0.05; 4]
        );
    }

    #[test]
    fn maximized_preset_keeps_smallest_extension_icon_unpadded() {
        assert_eq!(
            paddings(&IconFamily::extension_with(PaddingPreset::Maximized)),
            [0.0, 0.05, 0.05, 0.05]
        );
        assert_eq!(
            paddings(&FamilyKind::Android.family(PaddingPreset::Maximized)),
            [0.15; 5]
        );
    }

    #[test]
    fn preset_names_round_trip() {
        for preset in [
            PaddingPreset::FullBleed,
            PaddingPreset::Padded,
            PaddingPreset::Maximized,
        ] {
            assert_eq!(PaddingPreset::from_str(preset.as_str()).unwrap(), preset);
        }
        assert!(PaddingPreset::from_str("huge").is_err());
    }

    #[test]
    fn with_padding_overrides_every_target() {
        let family = IconFamily::android_mipmap().with_padding(0.15);

        assert!(family.targets.iter().all(|t| t.padding == 0.15));
    }

    #[test]
    fn json_family_defaults_padding_and_subdirectory() {
        let json = r#"{
            "name": "store",
            "targets": [
                { "label": "hero", "size": 512, "file_names": ["store.png"] }
            ]
        }"#;

        let family = IconFamily::from_json_str(json).expect("parse failed");

        assert_eq!(family.targets[0].padding, 0.0);
        assert_eq!(family.targets[0].subdirectory, None);
    }

    #[test]
    fn validate_rejects_bad_descriptors() {
        let mut family = IconFamily::extension();
        family.targets[1].file_names.clear();
        assert!(matches!(family.validate(), Err(IconError::InvalidConfig(_))));

        let empty = IconFamily {
            name: "empty".to_string(),
            targets: Vec::new(),
        };
        assert!(matches!(empty.validate(), Err(IconError::InvalidConfig(_))));

        let padded = IconFamily::extension().with_padding(0.6);
        assert!(matches!(padded.validate(), Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_paths_escaping_output_root() {
        for name in ["../icon.png", "/tmp/icon.png", "nested/icon.png", "", ".."] {
            let mut family = IconFamily::extension();
            family.targets[0].file_names = vec![name.to_string()];
            assert!(
                matches!(family.validate(), Err(IconError::InvalidConfig(_))),
                "file name {name:?} should be rejected"
            );
        }

        for subdirectory in ["../res", "/etc", "mipmap/../../x", ""] {
            let mut family = IconFamily::android_mipmap();
            family.targets[0].subdirectory = Some(subdirectory.to_string());
            assert!(
                matches!(family.validate(), Err(IconError::InvalidConfig(_))),
                "subdirectory {subdirectory:?} should be rejected"
            );
        }

        let mut nested = IconFamily::android_mipmap();
        nested.targets[0].subdirectory = Some("app/src/main/res/mipmap-mdpi".to_string());
        assert!(nested.validate().is_ok());
    }

    #[test]
    fn family_kind_parses_known_names() {
        assert_eq!(FamilyKind::from_str("Android").unwrap(), FamilyKind::Android);
        assert_eq!(
            FamilyKind::from_str("extension")
                .unwrap()
                .family(PaddingPreset::FullBleed),
            IconFamily::extension()
        );
        assert!(FamilyKind::from_str("ios").is_err());
    }
}
