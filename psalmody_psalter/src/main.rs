// Psalmody annotate — CLI entry point.
//
// Points every line of a psalm JSON file (a collection with `psalms: []` or
// a single psalm object) and writes `<name>.annotated.json` into the output
// directory. With `--coverdale`, imports the plain-text Coverdale psalter
// into one JSON file per psalm instead.
//
// Usage:
//   cargo run -p psalmody_psalter --bin annotate -- --input <file> [--outDir DIR]
//     [--tone TONE] [--config pointing.json] [--recommend-tones] [--verbose]
//   cargo run -p psalmody_psalter --bin annotate -- --coverdale <file.txt> [--outDir DIR]
//
// Unknown flags are ignored.

use log::LevelFilter;
use psalmody_pointing::{PointingConfig, PointingEngine};
use psalmody_psalter::coverdale::import_coverdale;
use psalmody_psalter::{AnnotateOptions, PsalterError, annotate_file};
use std::path::PathBuf;

const DEFAULT_OUT_DIR: &str = "public/assets/psalms/annotated";
const DEFAULT_COVERDALE_OUT_DIR: &str = "public/assets/psalms/coverdale";

const HELP: &str = "\
Usage: annotate --input <file> [--outDir <dir>] [--tone <tone>]
       annotate --coverdale <file.txt> [--outDir <dir>]

  --input, -i        Psalm collection JSON (with psalms: []) or a single psalm JSON
  --outDir, -o       Output directory (default: public/assets/psalms/annotated,
                     or public/assets/psalms/coverdale with --coverdale)
  --tone, -t         Tone id to point for and store with the annotations
  --config, -c       Pointing config JSON overriding the built-in rules
  --recommend-tones  Fill missing recommended_tone fields from the tone table
  --coverdale        Import a plain-text Coverdale psalter instead of annotating
  --verbose, -v      Log each psalm as it is processed
  --help, -h         Show this help
";

#[derive(Debug, Default)]
struct CliOptions {
    input: Option<PathBuf>,
    coverdale: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    tone: Option<String>,
    config: Option<PathBuf>,
    recommend_tones: bool,
    verbose: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut opts = CliOptions::default();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => opts.input = args.next().map(PathBuf::from),
            "--outDir" | "-o" => opts.out_dir = args.next().map(PathBuf::from),
            "--tone" | "-t" => opts.tone = args.next().cloned(),
            "--config" | "-c" => opts.config = args.next().map(PathBuf::from),
            "--coverdale" => opts.coverdale = args.next().map(PathBuf::from),
            "--recommend-tones" => opts.recommend_tones = true,
            "--verbose" | "-v" => opts.verbose = true,
            "--help" | "-h" => opts.help = true,
            _ => {}
        }
    }
    opts
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Logs go to stderr. `RUST_LOG` overrides the level picked by `--verbose`.
fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .init();
}

fn run(opts: &CliOptions) -> Result<(), PsalterError> {
    if let Some(source) = &opts.coverdale {
        let out_dir = opts
            .out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COVERDALE_OUT_DIR));
        let written = import_coverdale(source, &out_dir)?;
        for path in &written {
            println!("  Written {}", path.display());
        }
        println!("Parsed {} psalms into {}", written.len(), out_dir.display());
        return Ok(());
    }

    let input = opts.input.as_ref().ok_or(PsalterError::MissingArgument(
        "--input path to a psalm collection or single psalm JSON file",
    ))?;
    let out_dir = opts
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    let config = match &opts.config {
        Some(path) => PointingConfig::load(path)?,
        None => PointingConfig::default(),
    };

    let engine = PointingEngine::new(config);
    let options = AnnotateOptions {
        tone: opts.tone.clone(),
        recommend_tones: opts.recommend_tones,
    };
    let out_path = annotate_file(&engine, input, &out_dir, &options)?;
    println!("Annotated output written to {}", out_path.display());
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args);
    if opts.help {
        print!("{HELP}");
        return;
    }
    init_logging(opts.verbose);

    if let Err(e) = run(&opts) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
