use anyhow::{Context, Result};
use clap::Parser;
use streakbits::cli::{Cli, OutputFormat};
use streakbits::config::ReportConfig;
use streakbits::csv_output::CsvOutput;
use streakbits::json_output::JsonOutput;
use streakbits::record::AttendanceRecord;
use streakbits::stats::StreakSummary;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load the report config file, then apply command line overrides
fn load_config(args: &Cli) -> Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if let Some(days) = args.days {
        config = config.with_window_days(days);
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(&args)?;

    let record = args.update_plan().apply(AttendanceRecord::from_raw(args.raw));

    if args.raw_only {
        println!("{}", record.to_raw());
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => StreakSummary::from_record(record, &config).print_summary(),
        OutputFormat::Json => {
            let output = JsonOutput::new(StreakSummary::from_record(record, &config));
            println!("{}", output.to_json()?);
        }
        OutputFormat::Csv => {
            let output = CsvOutput::from_record(record, config.window_days);
            print!("{}", output.to_csv());
        }
    }

    Ok(())
}
