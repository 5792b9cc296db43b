//! File handling behind the `objcss` command.
//!
//! Records and modules are read as JSON, or as YAML when the file ends in
//! `.yaml` / `.yml`. Compiled sheets are written as `{name}` (or
//! `style.css`, `style-{i}.css` when unnamed) with an optional
//! `{name}.map.json` holding both lookup maps.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;
use objcss::{CompiledSheet, ConfigRecord, RecordSet, SheetSet, StyleModule};
use objcss_extract::{extract, ExtractSettings};
use serde_json::json;

/// Input file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Loads a record, or an array of records, from `path`.
pub fn read_records(path: &Path) -> Result<RecordSet> {
    let text = read_text(path)?;
    let records = match Format::from_path(path) {
        Format::Json => RecordSet::from_json_str(&text),
        Format::Yaml => RecordSet::from_yaml_str(&text),
    }
    .with_context(|| format!("failed to load records from {}", path.display()))?;

    info!("loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Loads a bare style module (object name to declaration) from `path`.
pub fn read_module(path: &Path) -> Result<StyleModule> {
    let text = read_text(path)?;
    let module = match Format::from_path(path) {
        Format::Json => serde_json::from_str(&text).map_err(anyhow::Error::from),
        Format::Yaml => serde_yaml::from_str(&text).map_err(anyhow::Error::from),
    }
    .with_context(|| format!("failed to load style module from {}", path.display()))?;
    Ok(module)
}

/// Builds a record for the module in `module_path` from the doc comments of
/// the source file at `source_path`.
pub fn extract_record(
    source_path: &Path,
    module_path: &Path,
    settings: &ExtractSettings,
) -> Result<ConfigRecord> {
    let source = read_text(source_path)?;
    let module = read_module(module_path)?;
    extract(&source, module, settings)
        .with_context(|| format!("failed to extract settings from {}", source_path.display()))
}

/// File name a sheet is written under. `index` is the sheet's position when
/// it came from an array of records.
pub fn sheet_file_name(sheet: &CompiledSheet, index: Option<usize>) -> String {
    match (sheet.name.as_deref(), index) {
        (Some(name), _) if !name.is_empty() => name.to_string(),
        (_, Some(index)) => format!("style-{}.css", index),
        (_, None) => "style.css".to_string(),
    }
}

/// Checks that a sheet file name stays inside the output directory: only
/// plain relative components are accepted.
pub fn check_sheet_path(name: &str) -> Result<&Path> {
    let path = Path::new(name);
    let inside = path
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
    if !inside || path.file_name().is_none() {
        bail!(
            "sheet name '{}' must be a relative file path inside the output directory",
            name
        );
    }
    Ok(path)
}

/// The lookup maps of a sheet, as written to `{name}.map.json`.
pub fn map_json(sheet: &CompiledSheet) -> serde_json::Value {
    json!({
        "objectToStyleMap": sheet.object_to_style,
        "styleToObjectMap": sheet.style_to_object,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Writes every sheet (and, with `maps`, its lookup maps) under `out_dir`.
/// Returns the paths written, in order.
///
/// Every file name is checked with [`check_sheet_path`] before anything is
/// written.
pub fn write_sheets(sheets: SheetSet, out_dir: &Path, maps: bool) -> Result<Vec<PathBuf>> {
    let indexed = matches!(sheets, SheetSet::Many(_));
    let sheets = sheets.into_vec();
    let names: Vec<String> = sheets
        .iter()
        .enumerate()
        .map(|(index, sheet)| sheet_file_name(sheet, indexed.then_some(index)))
        .collect();
    for name in &names {
        check_sheet_path(name)?;
    }

    let mut written = Vec::new();
    for (sheet, name) in sheets.iter().zip(&names) {
        let css_path = out_dir.join(name);
        write_file(&css_path, &format!("{}\n", sheet.css))?;
        written.push(css_path);

        if maps {
            let map_path = out_dir.join(format!("{}.map.json", name));
            let contents = serde_json::to_string_pretty(&map_json(sheet))?;
            write_file(&map_path, &contents)?;
            written.push(map_path);
        }
    }

    Ok(written)
}

/// Prints the css of every sheet, separated by a blank line.
pub fn print_sheets<W: Write>(sheets: &[CompiledSheet], out: &mut W) -> io::Result<()> {
    for (index, sheet) in sheets.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", sheet.css)?;
    }
    Ok(())
}
