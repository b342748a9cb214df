use base_convert::core::batch::{BatchEngine, BatchPipeline};
use base_convert::utils::error::AppError;
use base_convert::utils::{logger, validation::Validate};
use base_convert::{BatchConfig, LocalStorage};
use clap::Parser;
use std::path::Path;

#[derive(Parser)]
#[command(name = "batch-convert")]
#[command(about = "Convert many integer literals from a TOML batch file")]
struct Args {
    /// Path to TOML batch file
    #[arg(short, long, default_value = "batch.toml")]
    config: String,

    /// Override output directory from config
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Dry run - show the job plan without converting
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting batch converter");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match BatchConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    // 應用命令列覆蓋設定
    if let Some(output) = args.output {
        tracing::info!("🔧 Output directory overridden to: {}", output);
        config.output.path = output;
    }

    if let Err(e) = config.validate() {
        exit_with(e);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No conversion will occur");
        print_plan(&config);
        return Ok(());
    }

    // CSV 工作檔相對於配置檔所在目錄
    let config_dir = Path::new(&args.config)
        .parent()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default();
    let input_storage = LocalStorage::new(config_dir);
    let output_storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = BatchPipeline::new(input_storage, output_storage, config);

    match BatchEngine::new(pipeline).run() {
        Ok(summary) => {
            println!(
                "✅ Converted {} of {} jobs ({} failed)",
                summary.succeeded, summary.total, summary.failed
            );
            println!("📁 Output saved to: {}", summary.output);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn print_plan(config: &BatchConfig) {
    println!("🔍 Batch '{}'", config.batch.name);
    if let Some(description) = &config.batch.description {
        println!("  {}", description);
    }

    println!();
    println!("📋 Inline jobs: {}", config.jobs.len());
    for (index, job) in config.jobs.iter().enumerate() {
        println!(
            "  jobs[{}]: {} (base {} -> base {})",
            index, job.input, job.from, job.to
        );
    }

    if let Some(csv_path) = config.csv_path() {
        println!("📄 CSV job file: {}", csv_path);
        if let Some(radix) = config.default_target_radix() {
            println!("  Default target radix: {}", radix);
        }
    }

    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.output_path());
    println!("  Formats: {}", config.output.formats.join(", "));
    println!(
        "  On conversion error: {}",
        if config.stop_on_error() { "stop" } else { "continue" }
    );
}

fn exit_with(e: AppError) -> ! {
    tracing::error!(
        "❌ Batch failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
