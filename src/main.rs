use std::process::ExitCode;
use clap::Parser;
use log::{error, info};
use fontfix::cli::Args;
use fontfix::organizer::{
    build_report, fix_fonts, group_by_family, summarize, write_groups, write_report, CopyWriter,
    WrittenFonts,
};
use fontfix::utils::{collect_font_files, init_logging};
use fontfix::{Config, Result, StyleWordDictionary};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.config();
    init_logging(config.debug_mode);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &Config) -> Result<()> {
    // Dictionary and options are validated before any font is touched
    let dictionary = match &config.rules_path {
        Some(path) => StyleWordDictionary::load(path)?,
        None => StyleWordDictionary::embedded()?,
    };
    let options = config.classify_options()?;

    let fonts = collect_font_files(&args.inputs, config.recursive)?;
    if fonts.is_empty() {
        info!("No font files found");
        return Ok(());
    }

    let outcomes = fix_fonts(&fonts, &dictionary, &options, config.name_source);

    let mut written = WrittenFonts::new();
    if let (Some(output_dir), false) = (&config.output_dir, config.dry_run) {
        let groups = group_by_family(&outcomes);
        written = write_groups(&groups, output_dir, &CopyWriter);
    }

    let reports = build_report(&outcomes, &written);
    if let Some(report_path) = &config.report_path {
        if config.dry_run {
            info!("Dry run: report not written to {}", report_path.display());
        } else {
            write_report(report_path, &reports)?;
        }
    }

    if config.dry_run || config.report_path.is_none() {
        for report in &reports {
            match (&report.result, &report.error) {
                (Some(result), _) => println!(
                    "{}\t{}\t{}",
                    report.path.display(),
                    result.family_name,
                    result.style_name
                ),
                (None, Some(error)) => println!("{}\tSKIPPED\t{}", report.path.display(), error),
                (None, None) => {}
            }
        }
    }

    let (fixed, skipped) = summarize(&outcomes);
    let write_failures = written.values().filter(|target| target.is_err()).count();
    println!("Font name fixing summary:");
    println!("  - {} fonts fixed", fixed);
    println!("  - {} fonts skipped", skipped);
    if write_failures > 0 {
        println!("  - {} fonts failed to write", write_failures);
    }

    Ok(())
}
