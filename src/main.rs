//! # Logo 图标生成工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数解析与结果汇报。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use clap::Parser;
use std::process::ExitCode;

use icon_resizer::cli::CliArgs;
use icon_resizer::error::AppError;
use icon_resizer::icon_handler::IconTransformer;

fn run(args: CliArgs) -> Result<(), AppError> {
    let plan = args.into_plan()?;
    for job in &plan.jobs {
        log::info!(
            "计划生成图标族 {} - 源: {} 输出根目录: {}",
            job.family.name,
            plan.source.display(),
            job.output_root.display()
        );
    }

    let transformer = IconTransformer::new(plan.config);
    let reports = transformer.run_all(&plan.source, &plan.jobs)?;

    for report in &reports {
        log::info!(
            "✅ {} 完成 - 源尺寸: {}x{} 裁边后: {}x{} 输出文件: {}",
            report.family,
            report.source_size.0,
            report.source_size.1,
            report.trimmed_size.0,
            report.trimmed_size.1,
            report.outputs.len()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(CliArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("❌ 图标生成失败: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
