use anyhow::Context;
use clap::Parser;
use tokio::runtime::Runtime;

use liquidity_lag::analysis::{
    AnalysisParams, LagSweepParams, OscillatorParams, SegmentationParams, run_analysis,
};
use liquidity_lag::models::day_totals;
use liquidity_lag::{Cli, data};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse and validate args
    let args = Cli::parse();
    args.validate()?;

    // C. Data loading (blocking; the analysis core itself is synchronous)
    let rt = Runtime::new().context("failed to create Tokio runtime")?;
    let (target_source, driver_source) = data::select_sources(&args);
    let (target, driver) =
        rt.block_on(data::load_pair(target_source.as_ref(), driver_source.as_ref()))?;

    // D. Run the pipeline
    let params = AnalysisParams {
        oscillator: OscillatorParams {
            change_window_days: args.zscore_window,
            ..OscillatorParams::default()
        },
        sweep: LagSweepParams {
            max_lag_weeks: args.max_lag_weeks,
            ..LagSweepParams::default()
        },
        segmentation: SegmentationParams::default(),
    };
    let report = run_analysis(&target, &driver, &params)?;

    // E. Print results
    println!();
    println!(
        "Best lag: {} weeks | correlation {:.3}",
        report.best_lag_weeks(),
        report.best_correlation()
    );
    println!(
        "Period: {} → {} ({} aligned days)",
        report.aligned.first_date().expect("non-empty table"),
        report.aligned.last_date().expect("non-empty table"),
        report.aligned.len()
    );

    println!("\nCorrelation by lag:");
    for candidate in &report.sweep.candidates {
        let marker = if candidate.lag_weeks == report.best_lag_weeks() {
            "  <- best"
        } else {
            ""
        };
        println!(
            "  {:>2} weeks: {:+.3}{}",
            candidate.lag_weeks, candidate.correlation, marker
        );
    }

    println!("\nLiquidity zones (driver shifted {} weeks):", report.best_lag_weeks());
    for zone in &report.zones {
        println!(
            "  {} → {}  {} ({} days)",
            zone.start_date,
            zone.end_date,
            zone.kind,
            zone.num_days()
        );
    }
    for (kind, days) in day_totals(&report.zones) {
        println!("  total {kind}: {days} days");
    }

    // F. Optional exports
    if let Some(path) = &args.export {
        std::fs::write(path, report.aligned.to_delimited())
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Wrote aligned table to {}", path.display());
    }
    if let Some(path) = &args.export_report {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Wrote JSON report to {}", path.display());
    }

    Ok(())
}
