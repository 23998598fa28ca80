//! Command-line interface for pyhighlight
//! Tokenizes Python source (or reads a token CSV from another tokenizer), reclassifies the
//! tokens and writes them out as HTML, CSV or JSON.
//!
//! Usage:
//!   pyhighlight highlight `<path>` [--format `<format>`] [--output `<file>`]  - Highlight a file
//!   pyhighlight tokens `<path>`                                           - Dump raw tokens as CSV
//!   pyhighlight list-formats                                            - List output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use pyhighlight::highlight::config::{HighlightConfig, Loader};
use pyhighlight::highlight::error::{HighlightError, Result};
use pyhighlight::highlight::formats::{FormatRegistry, HtmlFormatter};
use pyhighlight::highlight::{io, lexing, Reclassifier, TokenStream};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("pyhighlight")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Semantic syntax highlighting for Python source")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline progress to stderr (repeat for more detail)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("highlight")
                .about("Reclassify a file's tokens and render them")
                .arg(
                    Arg::new("path")
                        .help("Python source file, or token CSV with --from-tokens")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("from-tokens")
                        .long("from-tokens")
                        .help("Treat the input as a token CSV instead of Python source")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats)")
                        .default_value("html"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file instead of stdout"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the default configuration"),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Title of the HTML page"),
                )
                .arg(
                    Arg::new("no-stats")
                        .long("no-stats")
                        .help("Omit the statistics block from HTML output")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("footer")
                        .long("footer")
                        .help("Stamp the HTML page with the generation time")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a Python file and print the raw tokens as CSV")
                .arg(
                    Arg::new("path")
                        .help("Python source file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("highlight", highlight_matches)) => handle_highlight_command(highlight_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| HighlightError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_config(matches: &ArgMatches) -> Result<HighlightConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(title) = matches.get_one::<String>("title") {
        loader = loader.set_override("render.title", title.as_str())?;
    }
    if matches.get_flag("no-stats") {
        loader = loader.set_override("render.show_statistics", false)?;
    }
    if matches.get_flag("footer") {
        loader = loader.set_override("render.generated_footer", true)?;
    }
    Ok(loader.build()?)
}

/// Handle the highlight command
fn handle_highlight_command(matches: &ArgMatches) -> Result<()> {
    let path = matches.get_one::<String>("path").expect("required");
    let path = PathBuf::from(path);
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default");
    let config = load_config(matches)?;

    let source = read_file(&path)?;
    let stream: TokenStream = if matches.get_flag("from-tokens") {
        io::read_tokens(source.as_bytes())?
    } else {
        lexing::tokenize(&source)
    };

    let reclassifier = Reclassifier::new(config.language.to_profile());
    let stream = reclassifier.run(stream);

    let mut html = HtmlFormatter::new(config.render.title, config.render.show_statistics);
    if config.render.generated_footer {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        html = html.with_footer(format!("Generated on {now}"));
    }
    let mut registry = FormatRegistry::with_defaults();
    registry.register(html);
    let output = registry.serialize(&stream, format)?;

    match matches.get_one::<String>("output") {
        Some(out_path) => {
            let out_path = PathBuf::from(out_path);
            std::fs::write(&out_path, output).map_err(|source| HighlightError::Write {
                path: out_path.clone(),
                source,
            })?;
            eprintln!("Wrote {} tokens to {}", stream.len(), out_path.display());
        }
        None => print!("{}", output),
    }
    Ok(())
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) -> Result<()> {
    let path = matches.get_one::<String>("path").expect("required");
    let path = PathBuf::from(path);
    let source = read_file(&path)?;
    let stream = lexing::tokenize(&source);
    print!("{}", io::tokens_to_csv(&stream)?);
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
        }
    }
}
