//! Manga Gari - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use manga_gari::{
    cli::Cli,
    config::validate_config,
    download::{build_client, download_chapters, RunStats},
    error::{exit_codes, Error, Result},
    fs::{cleanup_images, output_pdf_path},
    output::{
        create_spinner, print_banner, print_error, print_info, print_run_stats, print_success,
        print_warning,
    },
    pdf::assemble_pdf,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::ConfigValidation { .. }
                | Error::ChapterLimit { .. }
                | Error::InvalidFilename(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::PageFetch { .. } | Error::Download(_) | Error::Http(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                Error::EmptyDocument => ExitCode::from(exit_codes::EMPTY_DOCUMENT as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.into_config();

    // Set up logging
    let log_level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Admission checks happen before any network call.
    validate_config(&config)?;
    let output_path = output_pdf_path(&config.output_name)?;
    print_info(&format!("Output: {}", output_path.display()));

    let client = build_client(&config)?;

    let mut stats = RunStats::default();
    let set = download_chapters(&client, &config, &mut stats).await?;

    if stats.images_failed > 0 {
        print_warning(&format!(
            "{} image(s) failed to download and will be missing from the PDF",
            stats.images_failed
        ));
    }

    let spinner = config
        .show_progress
        .then(|| create_spinner("Assembling PDF..."));
    let result = assemble_pdf(&set, &output_path);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    // Intermediate images are removed whether or not a document was
    // produced, unless the user asked to keep them.
    if !config.keep_images {
        cleanup_images(&set);
    }

    match result {
        Ok(pages) => {
            stats.pages_written = pages;
            print_success(&format!("PDF created: {}", output_path.display()));
            print_run_stats(&stats);
            Ok(())
        }
        Err(e) => {
            print_run_stats(&stats);
            Err(e)
        }
    }
}
