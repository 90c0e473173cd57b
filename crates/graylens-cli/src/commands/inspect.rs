//! Inspect command - load an image and explore its histogram.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use graylens_adapters::{FsImageLoader, PngExporter, TerminalDisplay, TerminalEvents};
use graylens_core::{
    ImageExporter, ImageLoader, ImageState, Layout, Session, ViewMode, DEFAULT_EXPORT_PATH,
};
use tracing::{debug, info, warn};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{Report, ReportOutput};

/// Hardcoded default values for display settings.
mod defaults {
    pub const FRAME_DELAY_MS: u64 = 16;
    pub const HISTOGRAM_ROWS: usize = 12;
    pub const PREVIEW_COLUMNS: u32 = 64;
}

/// Parse and validate a histogram height (1-64 rows).
fn parse_rows(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (1..=64).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 1..=64"))
    }
}

/// Arguments for inspecting one image.
#[derive(Args, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct InspectArgs {
    /// Image to inspect
    pub image: PathBuf,

    /// Export destination for the `s` command and --export
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Start with histogram equalization applied
    #[arg(short, long)]
    pub equalize: bool,

    /// Print a JSON statistics report and exit
    #[arg(long)]
    pub report: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,

    /// Export the displayed image and exit
    #[arg(long)]
    pub export: bool,

    /// Font file that must exist for mean/stddev annotations to be drawn;
    /// a missing file disables them with a warning
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Hide mean/stddev annotations
    #[arg(long)]
    pub no_annotations: bool,

    /// Delay after each redraw in milliseconds
    #[arg(long, value_name = "MS")]
    pub frame_delay_ms: Option<u64>,

    /// Histogram height in rows (1-64)
    #[arg(long, value_parser = parse_rows)]
    pub histogram_rows: Option<usize>,

    /// Merged display settings (populated by `with_config`, not from CLI).
    #[arg(skip)]
    preview_columns: Option<u32>,
}

impl InspectArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        if !args.equalize {
            args.equalize = config.general.equalize.unwrap_or(false);
        }
        if args.output.is_none() {
            args.output.clone_from(&config.export.path);
        }
        if args.font.is_none() {
            args.font.clone_from(&config.display.font);
        }
        // CLI --no-annotations always wins
        if !args.no_annotations {
            if let Some(enabled) = config.display.annotations {
                args.no_annotations = !enabled;
            }
        }
        args.frame_delay_ms = args.frame_delay_ms.or(config.display.frame_delay_ms);
        args.histogram_rows = args.histogram_rows.or(config.display.histogram_rows);
        args.preview_columns = config.display.preview_columns;

        args
    }

    /// Export destination with fallback to `output_image.png`.
    fn output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH))
    }

    fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms.unwrap_or(defaults::FRAME_DELAY_MS))
    }

    fn histogram_rows(&self) -> usize {
        self.histogram_rows.unwrap_or(defaults::HISTOGRAM_ROWS)
    }

    fn preview_columns(&self) -> u32 {
        self.preview_columns.unwrap_or(defaults::PREVIEW_COLUMNS)
    }

    /// Whether text annotations can be drawn.
    ///
    /// A configured font asset that does not exist disables them with a
    /// warning; statistics are still computed.
    fn annotations(&self) -> bool {
        if self.no_annotations {
            return false;
        }
        match self.font {
            Some(ref font) if !font.exists() => {
                warn!(
                    "Font asset {} not found; text annotations will not be shown",
                    font.display()
                );
                false
            }
            _ => true,
        }
    }
}

/// Run the inspector.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
///
/// # Errors
///
/// Returns an error if the image cannot be loaded, the report or export
/// cannot be written, or terminal I/O fails.
pub fn run(args: &InspectArgs) -> Result<ExitCode> {
    let state = load_state(&FsImageLoader::new(), &args.image, args.equalize)?;
    let exporter = PngExporter::new();

    if args.report || args.export {
        if args.report {
            let report = Report::from_state(&args.image, &state);
            ReportOutput::stdout().write(&report, args.pretty)?;
        }
        if args.export {
            let output = args.output();
            exporter.export(state.current(), &output)?;
            info!("Saved {}", output.display());
        }
        return Ok(ExitCode::Success);
    }

    let layout = Layout::default();
    let mut session = Session::new(state)
        .with_layout(layout)
        .with_export_path(args.output())
        .with_annotations(args.annotations());

    let stdout = std::io::stdout();
    let interactive = stdout.is_terminal();
    let mut display = TerminalDisplay::new(stdout.lock())
        .with_preview_columns(args.preview_columns())
        .with_histogram_rows(args.histogram_rows())
        .with_clear(interactive);
    let mut events = TerminalEvents::new(std::io::stdin().lock(), layout);

    if interactive {
        eprintln!("commands: toggle (e), save (s), quit (q)");
    }

    session
        .run(&mut events, &mut display, &exporter, args.frame_delay())
        .context("Inspector loop failed")?;

    Ok(ExitCode::Success)
}

/// Decodes `path` and builds the image state, optionally equalized.
fn load_state(loader: &dyn ImageLoader, path: &Path, equalize: bool) -> Result<ImageState> {
    let buffer = loader.load(path)?;
    info!(
        "Loaded {} ({}x{})",
        path.display(),
        buffer.width(),
        buffer.height()
    );

    let mut state = ImageState::new(buffer)?;
    if equalize {
        state.set_mode(ViewMode::Equalized)?;
    }
    let stats = state.statistics();
    debug!(mean = stats.mean, stddev = stats.stddev, "initial statistics");
    Ok(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use graylens_core::Error;
    use graylens_test_support::{MockImageLoader, SyntheticImageBuilder};

    use super::*;
    use crate::commands::Cli;

    fn parse(argv: &[&str]) -> InspectArgs {
        Cli::try_parse_from(argv).unwrap().inspect
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["graylens", "img.png"]);
        assert_eq!(args.output(), PathBuf::from("output_image.png"));
        assert_eq!(args.frame_delay(), Duration::from_millis(16));
        assert_eq!(args.histogram_rows(), 12);
        assert_eq!(args.preview_columns(), 64);
        assert!(args.annotations());
    }

    #[test]
    fn test_image_is_required() {
        assert!(Cli::try_parse_from(["graylens"]).is_err());
    }

    #[test]
    fn test_histogram_rows_validated() {
        assert!(Cli::try_parse_from(["graylens", "a.png", "--histogram-rows", "0"]).is_err());
        assert!(Cli::try_parse_from(["graylens", "a.png", "--histogram-rows", "65"]).is_err());
        assert_eq!(
            parse(&["graylens", "a.png", "--histogram-rows", "8"]).histogram_rows(),
            8
        );
    }

    #[test]
    fn test_cli_overrides_config() {
        let config: AppConfig = toml::from_str(
            r"
[export]
path = 'config.png'

[display]
frame_delay_ms = 40
histogram_rows = 6
",
        )
        .unwrap();
        let args = InspectArgs::with_config(
            parse(&["graylens", "a.png", "-o", "cli.png", "--histogram-rows", "3"]),
            &config,
        );
        assert_eq!(args.output(), PathBuf::from("cli.png"));
        assert_eq!(args.histogram_rows(), 3);
        assert_eq!(args.frame_delay(), Duration::from_millis(40));
    }

    #[test]
    fn test_config_disables_annotations_and_equalizes() {
        let config: AppConfig = toml::from_str(
            r"
[general]
equalize = true

[display]
annotations = false
preview_columns = 20
",
        )
        .unwrap();
        let args = InspectArgs::with_config(parse(&["graylens", "a.png"]), &config);
        assert!(args.equalize);
        assert!(!args.annotations());
        assert_eq!(args.preview_columns(), 20);
    }

    #[test]
    fn test_missing_font_disables_annotations() {
        let args = parse(&["graylens", "a.png", "--font", "/nonexistent/font.ttf"]);
        assert!(!args.annotations());

        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("font.ttf");
        std::fs::write(&font, b"").unwrap();
        let font_arg = font.to_string_lossy().into_owned();
        let args = parse(&["graylens", "a.png", "--font", &font_arg]);
        assert!(args.annotations());
    }

    #[test]
    fn test_load_state_applies_equalization() {
        let buffer = SyntheticImageBuilder::luma(&SyntheticImageBuilder::four_levels());
        let loader = MockImageLoader::new(buffer);

        let state = load_state(&loader, Path::new("x.png"), true).unwrap();
        assert_eq!(state.mode(), ViewMode::Equalized);
        assert_eq!(state.current().as_slice(), &[64, 128, 191, 255]);
        assert_eq!(loader.load_count(), 1);
    }

    #[test]
    fn test_load_state_propagates_decode_error() {
        let err = load_state(&MockImageLoader::failing(), Path::new("x.png"), false).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Decode { .. })));
    }
}
