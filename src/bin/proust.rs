//! Command-line interface for proust
//!
//! Usage:
//!   proust export `<path>` [--format `<format>`] [--from N] [--to N | --all] [--output `<file>`]
//!   proust read `<path>`                      - Word-by-word reader in the terminal
//!   proust list-formats                     - List the export formats
//!
//! Global options: `--config <file>` layers a TOML file over the built-in
//! defaults, `-v` raises log verbosity. `PROUST_*` environment variables
//! override single settings (`PROUST_SEGMENTER__TAGGER__ENABLED=true`).

mod reader;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command, ValueHint};
use proust::proust::ast::UnitTree;
use proust::proust::classify::{CommandTagger, DefaultTag};
use proust::proust::formats::FormatRegistry;
use proust::proust::loading::{load_paragraphs, LoadOptions};
use proust::proust::segmenting::{Segmenter, SegmenterOptions};
use proust_config::{DefaultTagSetting, Loader, ProustConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    let source_args = [
        Arg::new("path")
            .help("Plain-text source of the book")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath),
        Arg::new("header-lines")
            .long("header-lines")
            .help("Lines skipped before the first paragraph")
            .value_parser(value_parser!(usize)),
        Arg::new("limit")
            .long("limit")
            .short('n')
            .help("Maximum number of paragraphs loaded (0 = all)")
            .value_parser(value_parser!(usize)),
        Arg::new("tagger")
            .long("tagger")
            .help("Classify with the external tagger configured in [segmenter.tagger]")
            .action(ArgAction::SetTrue),
    ];

    Command::new("proust")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Segment a literary text into units, export the tree or read it word by word")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v debug, -vv trace)")
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("export")
                .about("Serialize paragraphs of the segmented book")
                .args(source_args.clone())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats)"),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("First paragraph exported")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Paragraph index the export stops before")
                        .value_parser(value_parser!(usize))
                        .conflicts_with("all"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Export the whole book as a single tree")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("from"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file instead of stdout")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("read")
                .about("Read the book word by word in the terminal")
                .args(source_args),
        )
        .subcommand(Command::new("list-formats").about("List the available export formats"))
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("proust={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("export", sub)) => handle_export_command(sub),
        Some(("read", sub)) => handle_read_command(sub),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => bail!("unknown command"),
    }
}

/// Defaults, then the `--config` file, then `PROUST_*` variables, then flags.
fn load_config(matches: &ArgMatches) -> Result<ProustConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_env();

    if let Some(&lines) = matches.get_one::<usize>("header-lines") {
        loader = loader.set_override("loader.header_lines", lines as i64)?;
    }
    if let Some(&limit) = matches.get_one::<usize>("limit") {
        loader = loader.set_override("loader.paragraph_limit", limit as i64)?;
    }
    if matches.get_flag("tagger") {
        loader = loader.set_override("segmenter.tagger.enabled", true)?;
    }

    loader.build().context("invalid configuration")
}

fn build_segmenter(config: &ProustConfig) -> Segmenter {
    let options = SegmenterOptions {
        title: config.segmenter.title.clone(),
        default_tag: match config.segmenter.default_tag {
            DefaultTagSetting::Word => DefaultTag::Word,
            DefaultTagSetting::Noun => DefaultTag::Noun,
        },
    };

    let tagger = &config.segmenter.tagger;
    if tagger.enabled {
        let command = CommandTagger::new(tagger.program.clone(), tagger.args.clone());
        Segmenter::with_tagger(options, Box::new(command))
    } else {
        Segmenter::new(options)
    }
}

fn load_tree(path: &Path, config: &ProustConfig) -> Result<UnitTree> {
    let options = LoadOptions {
        header_lines: config.loader.header_lines,
        paragraph_limit: config.loader.paragraph_limit,
    };
    let paragraphs = load_paragraphs(path, &options)?;
    let segmenter = build_segmenter(config);
    debug!(classifier = segmenter.classifier_name(), "segmenting");
    Ok(segmenter.segment(&paragraphs))
}

fn handle_export_command(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let path = PathBuf::from(
        matches
            .get_one::<String>("path")
            .context("missing source path")?,
    );
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.export.format.clone());

    let registry = FormatRegistry::default();
    if !registry.has(&format) {
        bail!(
            "format '{format}' not found; available formats: {}",
            registry.list_formats().join(", ")
        );
    }

    let tree = load_tree(&path, &config)?;
    let units = if matches.get_flag("all") {
        vec![tree.root()]
    } else {
        let from = matches
            .get_one::<usize>("from")
            .copied()
            .unwrap_or(config.export.from);
        let to = matches
            .get_one::<usize>("to")
            .copied()
            .unwrap_or(config.export.to)
            .min(tree.paragraph_count());
        if from > to {
            bail!("empty paragraph range {from}..{to}");
        }
        tree.paragraphs().skip(from).take(to - from).collect()
    };

    let output = registry.serialize(&units, &format)?;
    match matches.get_one::<String>("output") {
        Some(target) => {
            fs::write(target, &output).with_context(|| format!("cannot write {target}"))?;
            eprintln!("Exported {} unit(s) to {target}", units.len());
        }
        None => print!("{output}"),
    }
    Ok(())
}

fn handle_read_command(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let path = PathBuf::from(
        matches
            .get_one::<String>("path")
            .context("missing source path")?,
    );
    let tree = load_tree(&path, &config)?;
    let title = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown")
        .to_string();

    reader::run_reader(&tree, &config.reader, &title)
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available export formats:\n");
    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {name}");
            println!("    {}", formatter.description());
            println!();
        }
    }
}
