use base_convert::config::OutputFormat;
use base_convert::utils::logger;
use base_convert::{convert, AppError, CliConfig, ConversionResult};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let outcome = config
        .to_request()
        .and_then(|request| convert(&request).map_err(AppError::from));

    match outcome {
        Ok(result) => match config.format {
            OutputFormat::Text => print_text(&result),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        },
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn print_text(result: &ConversionResult) {
    println!(
        "{} (base {}) -> {} (base {})",
        result.normalized_digits, result.source_radix, result.primary_output, result.target_radix
    );
    for projection in &result.projections {
        println!("  {:>12}: {}", projection.label, projection.value);
    }
}

fn exit_with(e: AppError) -> ! {
    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
