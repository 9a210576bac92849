//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Mode, RunConfig, DEFAULT_CHAPTER_LIMIT, DEFAULT_WORK_DIR};

/// Manga chapter scraper and PDF bundler CLI.
#[derive(Parser, Debug)]
#[command(
    name = "manga-gari",
    version,
    about = "Scrape manga chapters and bundle them into a single PDF",
    long_about = "A CLI tool that scrapes the panel images from manga chapter pages,\n\
                  downloads them, and concatenates them into one PDF.\n\n\
                  Works best with sites that serve chapter panels as plain <img> tags."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Turn a single chapter page into a PDF.
    Single {
        /// URL of the chapter page.
        url: String,

        /// Output PDF name (".pdf" is appended when missing).
        #[arg(short, long, default_value = "chapter")]
        output: String,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Turn an inclusive chapter range into one PDF.
    Multi {
        /// Chapter URL template with a single "{}" placeholder for the
        /// chapter number, e.g. "https://example.com/manga/chapter-{}".
        template: String,

        /// First chapter to download.
        #[arg(short, long)]
        start: u32,

        /// Last chapter to download (inclusive).
        #[arg(short, long)]
        end: u32,

        /// Maximum number of chapters allowed per run.
        #[arg(long, default_value_t = DEFAULT_CHAPTER_LIMIT)]
        max_chapters: u32,

        /// Output PDF name (".pdf" is appended when missing).
        #[arg(short, long, default_value = "manga_volume")]
        output: String,

        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Flags shared by both modes.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Directory for intermediate image downloads.
    #[arg(short = 'd', long = "dir", default_value = DEFAULT_WORK_DIR)]
    pub work_dir: PathBuf,

    /// Request timeout in seconds (no timeout when omitted).
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Keep the downloaded images instead of deleting them after
    /// assembly.
    #[arg(long)]
    pub keep_images: bool,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Resolve parsed arguments into a pipeline configuration.
    pub fn into_config(self) -> RunConfig {
        match self.command {
            Command::Single {
                url,
                output,
                common,
            } => build_config(Mode::Single { url }, output, DEFAULT_CHAPTER_LIMIT, common),
            Command::Multi {
                template,
                start,
                end,
                max_chapters,
                output,
                common,
            } => build_config(
                Mode::Multi {
                    template,
                    start,
                    end,
                },
                output,
                max_chapters,
                common,
            ),
        }
    }
}

fn build_config(
    mode: Mode,
    output_name: String,
    chapter_limit: u32,
    common: CommonArgs,
) -> RunConfig {
    RunConfig {
        mode,
        output_name,
        work_dir: common.work_dir,
        chapter_limit,
        timeout_seconds: common.timeout,
        keep_images: common.keep_images,
        show_progress: !common.quiet,
        debug: common.debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode_defaults() {
        let cli = Cli::parse_from(["manga-gari", "single", "https://example.com/ch1"]);
        let config = cli.into_config();

        assert!(matches!(config.mode, Mode::Single { .. }));
        assert_eq!(config.output_name, "chapter");
        assert_eq!(config.work_dir, PathBuf::from(DEFAULT_WORK_DIR));
        assert_eq!(config.chapter_limit, DEFAULT_CHAPTER_LIMIT);
        assert!(config.timeout_seconds.is_none());
        assert!(!config.keep_images);
        assert!(config.show_progress);
    }

    #[test]
    fn test_multi_mode_range() {
        let cli = Cli::parse_from([
            "manga-gari",
            "multi",
            "https://example.com/chapter-{}",
            "--start",
            "3",
            "--end",
            "7",
            "--output",
            "volume1",
        ]);
        let config = cli.into_config();

        match config.mode {
            Mode::Multi {
                ref template,
                start,
                end,
            } => {
                assert_eq!(template, "https://example.com/chapter-{}");
                assert_eq!(start, 3);
                assert_eq!(end, 7);
            }
            ref other => panic!("Expected multi mode, got {:?}", other),
        }
        assert_eq!(config.output_name, "volume1");
    }

    #[test]
    fn test_quiet_disables_progress() {
        let cli = Cli::parse_from(["manga-gari", "single", "https://example.com/ch1", "--quiet"]);
        assert!(!cli.into_config().show_progress);
    }

    #[test]
    fn test_max_chapters_override() {
        let cli = Cli::parse_from([
            "manga-gari",
            "multi",
            "https://example.com/chapter-{}",
            "-s",
            "1",
            "-e",
            "20",
            "--max-chapters",
            "25",
        ]);
        assert_eq!(cli.into_config().chapter_limit, 25);
    }
}
