use clap::Parser;

use log::{error, info};
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::{path::Path, sync::mpsc::channel, time::Duration};

use crate::errors::{Error, Result};
use crate::{convert_file, ConvertConfig, TextExtent};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// File to process ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Name of the generated Modelica model
    #[arg(short, long, default_value = "DummyModel")]
    model_name: String,

    /// Fail on SVG features which cannot be represented, rather than dropping them
    #[arg(short, long)]
    strict: bool,

    /// Center the icon and scale it to the default Modelica extent
    #[arg(short, long)]
    normalize_extent: bool,

    /// How text extents are estimated
    #[arg(short, long, default_value = "normal")]
    text_extent: TextExtent,

    /// Watch file for changes; update output on change. (FILE must be given)
    #[arg(short, long, requires = "file")]
    watch: bool,
}

/// Top-level configuration used by the `svg2modelica` command-line process.
///
/// 'front-end' program settings (input/output filenames, watch mode) are
/// stored directly in this struct. Per-conversion settings are stored in
/// the embedded `ConvertConfig` struct.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// Stay monitoring `input_path` for changes (Requires input_path is not stdin)
    pub watch: bool,
    /// conversion config options
    pub convert: ConvertConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.watch && args.file == "-" {
            // Should already be enforced by clap validation
            return Err(Error::Cli(
                "A non-stdin file must be provided with -w/--watch argument".into(),
            ));
        }
        if args.file != "-" && args.output != "-" {
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists()
                && out_path.canonicalize().map_err(Error::from_err)?
                    == in_path.canonicalize().map_err(Error::from_err)?
            {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            watch: args.watch,
            convert: ConvertConfig {
                model_name: args.model_name,
                strict: args.strict,
                normalize_extent: args.normalize_extent,
                text_extent: args.text_extent,
                ..Default::default()
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Run the `svg2modelica` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    if !config.watch {
        convert_file(&config.input_path, &config.output_path, &config.convert)?;
    } else if config.input_path != "-" {
        let watch = config.input_path;
        let (tx, rx) = channel();
        let mut watcher = new_debouncer(Duration::from_millis(250), tx).map_err(Error::from_err)?;
        let watch_path = Path::new(&watch);
        watcher
            .watcher()
            .watch(watch_path, RecursiveMode::NonRecursive)
            .map_err(Error::from_err)?;
        convert_file(&watch, &config.output_path, &config.convert).unwrap_or_else(|e| {
            error!("conversion failed: {e}");
        });
        info!("Watching {watch} for changes");
        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.path.canonicalize().map_err(Error::Io)?
                            == watch_path.canonicalize().map_err(Error::Io)?
                        {
                            info!("{} changed", event.path.to_string_lossy());
                            convert_file(&watch, &config.output_path, &config.convert)
                                .unwrap_or_else(|e| {
                                    error!("conversion failed: {e}");
                                });
                        }
                    }
                }
                Ok(Err(e)) => error!("Watch error {e:?}"),
                Err(e) => error!("Channel error: {e:?}"),
            }
        }
    }

    Ok(())
}
