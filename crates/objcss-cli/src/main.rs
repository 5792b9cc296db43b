use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use objcss::compile_set;
use objcss_cli::{extract_record, print_sheets, read_records, write_sheets};
use objcss_extract::ExtractSettings;

/// Compile style objects into stylesheets
#[derive(Parser, Debug)]
#[command(name = "objcss", version)]
#[command(about = "Compile style objects into stylesheets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a record, or an array of records, into stylesheets
    Compile {
        /// Record file (.json, .yaml or .yml)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory to write stylesheets into; prints to stdout when absent
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Also write {name}.map.json lookup maps next to each stylesheet
        #[arg(long, requires = "out_dir")]
        maps: bool,
    },

    /// Build a record from the doc comments of a style source file
    Extract {
        /// Source file declaring the style objects
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Style module file (.json, .yaml or .yml)
        #[arg(long, value_name = "FILE")]
        module: PathBuf,

        /// Output name stored in the record
        #[arg(long)]
        name: Option<String>,

        /// Selector prefix, unless the file's config block sets one
        #[arg(long)]
        prepend: Option<String>,

        /// Version folded into derived selectors
        #[arg(long)]
        version: Option<String>,

        /// Annotate rules with map comments
        #[arg(long)]
        map: bool,

        /// Pattern locating declarations, with XXXXXX for the object name
        #[arg(long, value_name = "REGEX")]
        pattern: Option<String>,

        /// Rename a tag, e.g. --tag class=@override (repeatable)
        #[arg(long = "tag", value_name = "KIND=TAG", value_parser = parse_tag)]
        tags: Vec<(String, String)>,
    },
}

fn parse_tag(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((kind, tag)) if !kind.is_empty() && !tag.is_empty() => {
            Ok((kind.to_string(), tag.to_string()))
        }
        _ => Err(format!("expected KIND=TAG, got '{}'", value)),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Compile {
            file,
            out_dir,
            maps,
        } => {
            let sheets = compile_set(&read_records(&file)?);
            match out_dir {
                Some(dir) => {
                    for path in write_sheets(sheets, &dir, maps)? {
                        println!("{}", path.display());
                    }
                }
                None => {
                    let stdout = io::stdout();
                    print_sheets(&sheets.into_vec(), &mut stdout.lock())
                        .context("failed to write to stdout")?;
                }
            }
        }
        Command::Extract {
            source,
            module,
            name,
            prepend,
            version,
            map,
            pattern,
            tags,
        } => {
            let mut settings = ExtractSettings {
                name,
                prepend,
                version,
                map,
                style_pattern: pattern,
                ..ExtractSettings::default()
            };
            for (kind, tag) in tags {
                settings.tags.set(&kind, tag)?;
            }

            let record = extract_record(&source, &module, &settings)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }
    Ok(())
}
