//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::config::{AnalysisConfig, StopWordMatching};
use chatlens::format::{OutputFormat, write_to_format};
use chatlens::logging::init_logging;
use chatlens::metrics::{AnalysisReport, SenderFilter, StopWords, Tally, analyze};
use chatlens::output::{OutputConfig, write_report_json};
use chatlens::parser::{ExportParser, SAMPLE_EXPORT};

/// Rows shown per table in the terminal summary.
const SHOWN_ROWS: usize = 10;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level, args.log_json);

    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_path(path)?,
        None => AnalysisConfig::default(),
    };
    if args.skip_invalid {
        config.parser.skip_invalid = true;
    }
    if args.substring_stop_words {
        config.metrics.stop_word_matching = StopWordMatching::Substring;
    }
    if let Some(limit) = args.top_words {
        config.metrics.top_words = limit;
    }

    // Print header
    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    match &args.input {
        Some(input) => println!("📂 Input:   {}", input),
        None => println!("📂 Input:   bundled sample chat"),
    }
    println!();

    // Step 1: Parse
    println!("⏳ Parsing WhatsApp export...");
    let parse_start = Instant::now();
    let parser = ExportParser::with_config(config.parser.clone());
    let set = match &args.input {
        Some(input) => parser.parse(Path::new(input))?,
        None => parser.parse_str(SAMPLE_EXPORT)?,
    };
    println!(
        "   Found {} messages ({:.2}s)",
        set.len(),
        parse_start.elapsed().as_secs_f64()
    );

    if args.list_users {
        println!();
        println!("👥 Participants:");
        for choice in SenderFilter::choices(&set) {
            println!("   {}", choice);
        }
        return Ok(());
    }

    // Step 2: Select
    let filter = match &args.user {
        Some(name) => name
            .parse::<SenderFilter>()
            .map_err(|e| ChatlensError::invalid_format("sender filter", e))?,
        None => SenderFilter::Overall,
    };
    set.select_checked(&filter)?;

    // Step 3: Analyze
    let stop_words = match &args.stop_words {
        Some(path) => StopWords::from_path(path)?,
        None => StopWords::bundled(),
    };
    let report = analyze(&set, &filter, &stop_words, &config.metrics);
    print_report(&report);

    // Step 4: Write files
    if let Some(path) = &args.json {
        write_report_json(&report, path)?;
        println!("💾 Report saved to {}", path);
    }
    if let Some(path) = &args.records {
        let format = OutputFormat::from_path(path)?;
        write_to_format(&set, path, format, &OutputConfig::new().with_derived_fields())?;
        println!("💾 Records saved to {} ({})", path, format);
    }

    println!();
    println!(
        "✅ Done in {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_report(report: &AnalysisReport) {
    let counts = &report.basic_counts;

    println!();
    println!("📊 Statistics ({}):", report.selected);
    println!("   Messages:  {}", counts.messages);
    println!("   Words:     {}", counts.words);
    println!("   Media:     {}", counts.media);
    println!("   Links:     {}", counts.links);

    if let Some(top) = &report.top_senders {
        println!();
        println!("👥 Most active:");
        for share in top.shares.iter().take(SHOWN_ROWS) {
            println!("   {:<20} {:>6.2}%", share.name, share.percent);
        }
    }

    print_table("🔤 Top words:", &report.top_words);
    print_table("😀 Top emoji:", &report.emoji_counts);

    if !report.monthly_timeline.is_empty() {
        println!();
        println!("📅 Monthly timeline:");
        for point in &report.monthly_timeline {
            println!("   {:<20} {:>6}", point.label, point.count);
        }
    }

    print_table("📆 Busiest days:", &report.weekday_activity);
    print_table("🗓️  Busiest months:", &report.month_activity);

    let heatmap = &report.activity_heatmap;
    let busiest = heatmap
        .days
        .iter()
        .enumerate()
        .flat_map(|(row, day)| {
            heatmap
                .bands
                .iter()
                .enumerate()
                .map(move |(column, band)| (day, band, heatmap.counts[row][column]))
        })
        .max_by_key(|&(_, _, count)| count);
    if let Some((day, band, count)) = busiest {
        println!();
        println!("🔥 Peak hour: {} {} ({} messages)", day, band, count);
    }
}

fn print_table(title: &str, rows: &[Tally]) {
    if rows.is_empty() {
        return;
    }
    println!();
    println!("{}", title);
    for row in rows.iter().take(SHOWN_ROWS) {
        println!("   {:<20} {:>6}", row.label, row.count);
    }
}
