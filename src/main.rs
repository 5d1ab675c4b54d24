//! Command line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand,
};
use i18n_block_patcher::Patcher;
use i18n_block_patcher::assets::{
    self,
    ImageStatus,
};
use i18n_block_patcher::config::{
    self,
    DEFAULT_CONFIG_FILE,
    PatchSettings,
};

/// Command line arguments
#[derive(Parser)]
#[command(
    name = "i18n-block-patcher",
    version,
    about = "Keeps a block of localized strings in sync across translation modules"
)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

/// Top-level subcommands
#[derive(Subcommand)]
enum Commands {
    /// Collapse duplicate blocks, install the block where missing and write
    /// the localized values.
    Patch {
        /// Report what would change without writing.
        #[arg(long)]
        dry_run: bool,
        /// Only patch these languages (repeatable).
        #[arg(long = "lang", value_name = "CODE")]
        languages: Vec<String>,
    },
    /// Only remove duplicate blocks, in every translation file.
    Dedupe {
        /// Report what would change without writing.
        #[arg(long)]
        dry_run: bool,
    },
    /// Report files that `patch` would change and untranslated block keys.
    Check,
    /// Image asset format checks.
    Images {
        /// Image subcommand to run
        #[command(subcommand)]
        command: ImageCommands,
    },
}

/// `images` subcommands
#[derive(Subcommand)]
enum ImageCommands {
    /// Report the detected format of every configured image.
    Verify,
    /// Re-encode images that are not in the configured format.
    Convert,
}

/// エントリーポイント
fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = match config::load(&cli.config) {
        Ok(settings) => settings,
        Err(error) => {
            tracing::error!(config = %cli.config.display(), "{error}");
            return ExitCode::FAILURE;
        }
    };

    let success = match cli.command {
        Commands::Patch { dry_run, languages } => {
            let report = Patcher::new(settings).dry_run(dry_run).patch_all(&languages);
            report.log_summary();
            !report.has_failures()
        }
        Commands::Dedupe { dry_run } => {
            match Patcher::new(settings).dry_run(dry_run).dedupe_all() {
                Ok(report) => {
                    report.log_summary();
                    !report.has_failures()
                }
                Err(error) => {
                    tracing::error!("{error}");
                    false
                }
            }
        }
        Commands::Check => {
            let report = Patcher::new(settings).check();
            report.log_summary();
            !report.has_failures() && !report.has_changes()
        }
        Commands::Images { command } => run_images(&settings, &command),
    };

    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// 画像コマンドを実行し、失敗がなければ true を返す
fn run_images(settings: &PatchSettings, command: &ImageCommands) -> bool {
    let Some(format) = settings.images.image_format() else {
        tracing::error!(format = %settings.images.format, "Unsupported image format");
        return false;
    };

    match command {
        ImageCommands::Verify => {
            let reports = assets::verify(&settings.images.files, format);
            reports.iter().all(|report| {
                matches!(report.result, Ok(ImageStatus::Canonical | ImageStatus::NotFound))
            })
        }
        ImageCommands::Convert => {
            let reports = assets::convert(&settings.images.files, format);
            !reports.iter().any(assets::AssetReport::is_failure)
        }
    }
}
