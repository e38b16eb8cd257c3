//! Settings file reader and shared value parsers
//!
//! The format is INI-like. `[settings]` holds `name=value` lines,
//! `[feature-N]` holds a feature's coordinates plus extra file names on bare
//! lines, and `[images]`, `[images-1]`, `[background-images]` hold one file
//! name per line. Blank lines and `#` comments never end a section; the
//! next line starting with `[` does.

use crate::io::configuration::MAX_FEATURED_IMAGES;
use crate::io::error::{MontageError, Result, WithPath};
use crate::layout::feature::{FeatureArea, FeatureSpec};
use crate::session::options::Rgba;
use tracing::{info, warn};
use std::path::{Path, PathBuf};

/// Everything a settings file may set; `None` means "not set here"
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsFile {
    /// `output_file`
    pub output_file: Option<String>,
    /// `output_dir`
    pub output_dir: Option<String>,
    /// `canvas_width`
    pub canvas_width: Option<u32>,
    /// `canvas_height`
    pub canvas_height: Option<u32>,
    /// `columns`
    pub columns: Option<Vec<u32>>,
    /// `rows`
    pub rows: Option<Vec<u32>>,
    /// `margin`
    pub margin: Option<u32>,
    /// `padding`
    pub padding: Option<u32>,
    /// `border_width`
    pub border_width: Option<u32>,
    /// `border_rgba`, unparsed
    pub border_rgba: Option<String>,
    /// `background_rgba`, unparsed
    pub background_rgba: Option<String>,
    /// `background_blur`
    pub background_blur: Option<u32>,
    /// `label_font`
    pub label_font: Option<String>,
    /// `label_size`
    pub label_size: Option<u32>,
    /// `shuffle_mode`
    pub shuffle_mode: Option<String>,
    /// `shuffle_count`
    pub shuffle_count: Option<usize>,
    /// `stamp_mode`
    pub stamp_mode: Option<u32>,
    /// `write_opts`
    pub write_opts: Option<bool>,
    /// `do_zoom`
    pub do_zoom: Option<bool>,
    /// `img1_start`
    pub img1_start: Option<usize>,
    /// `img1_freq`
    pub img1_freq: Option<Vec<usize>>,
    /// `img1_pos`
    pub img1_pos: Option<Vec<usize>>,
    /// `[feature-1]` .. `[feature-4]` sections that set `num_columns`
    pub features: Vec<FeatureSpec<String>>,
    /// `[images]`
    pub images: Vec<String>,
    /// `[images-1]`
    pub images1: Vec<String>,
    /// `[background-images]`
    pub background_images: Vec<String>,
}

const OBSOLETE_SETTINGS: &[(&str, &str)] = &[
    ("background_rgb", "Replaced by 'background_rgba'"),
    ("bg_alpha", "Replaced by 'background_rgba'"),
    ("bg_blur", "Replaced by 'background_blur'"),
];

impl SettingsFile {
    /// Read and parse a settings file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a numeric setting is not
    /// a number, or an `@` list file cannot be read
    pub fn load(path: &Path) -> Result<Self> {
        let path = expand_home(path);
        let text = std::fs::read_to_string(&path).with_path(&path, "read settings file")?;
        info!(
            "Load settings from '{}' in '{}'.",
            path.file_name().unwrap_or_default().to_string_lossy(),
            path.parent().unwrap_or_else(|| Path::new(".")).display()
        );
        Self::parse(&text, &path)
    }

    /// Parse settings text; `path` is only used in error messages
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric setting is not a number, or an `@`
    /// list file cannot be read
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let settings = section_entries("[settings]", &lines);

        for entry in &settings {
            if let Some((name, _)) = entry.split_once('=') {
                let name = name.trim();
                if let Some((_, hint)) = OBSOLETE_SETTINGS.iter().find(|(old, _)| *old == name) {
                    warn!("Obsolete setting '{name}': {hint}");
                }
            }
        }

        let int = |name: &str| get_int::<u32>(name, &settings, path);
        let list = |name: &str| get_str(name, &settings).map(|s| parse_int_list::<u32>(&s, path)).transpose();
        let count_list = |name: &str| {
            get_str(name, &settings)
                .map(|s| parse_int_list::<usize>(&s, path))
                .transpose()
        };

        let mut features = Vec::new();
        for number in 1..=MAX_FEATURED_IMAGES {
            let section = section_entries(&format!("[feature-{number}]"), &lines);
            if let Some(feature) = parse_feature_section(&section, path)? {
                features.push(feature);
            }
        }

        Ok(Self {
            output_file: get_str("output_file", &settings),
            output_dir: get_str("output_dir", &settings),
            canvas_width: int("canvas_width")?,
            canvas_height: int("canvas_height")?,
            columns: list("columns")?,
            rows: list("rows")?,
            margin: int("margin")?,
            padding: int("padding")?,
            border_width: int("border_width")?,
            border_rgba: get_str("border_rgba", &settings),
            background_rgba: get_str("background_rgba", &settings),
            background_blur: int("background_blur")?,
            label_font: get_str("label_font", &settings),
            label_size: int("label_size")?,
            shuffle_mode: get_str("shuffle_mode", &settings),
            shuffle_count: get_int::<usize>("shuffle_count", &settings, path)?,
            stamp_mode: int("stamp_mode")?,
            write_opts: get_bool("write_opts", &settings),
            do_zoom: get_bool("do_zoom", &settings),
            img1_start: get_int::<usize>("img1_start", &settings, path)?,
            img1_freq: count_list("img1_freq")?,
            img1_pos: count_list("img1_pos")?,
            features,
            images: expand_list(&unquote_all(&section_entries("[images]", &lines)))?,
            images1: expand_list(&unquote_all(&section_entries("[images-1]", &lines)))?,
            background_images: expand_list(&unquote_all(&section_entries(
                "[background-images]",
                &lines,
            )))?,
        })
    }
}

/// Content lines of `section`, trimmed, without blanks and comments
pub fn section_entries<'a>(section: &str, lines: &[&'a str]) -> Vec<&'a str> {
    let mut entries = Vec::new();
    let mut in_section = false;
    for line in lines {
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') {
            continue;
        }
        if in_section {
            if s.starts_with('[') {
                in_section = false;
            } else {
                entries.push(s);
            }
        }
        if s == section {
            in_section = true;
        }
    }
    entries
}

/// Strip one layer of matching surrounding quotes and whitespace
pub fn unquote(text: &str) -> String {
    let s = text.trim();
    if let Some(rest) = s.strip_prefix('"') {
        rest.trim_matches('"').to_string()
    } else if let Some(rest) = s.strip_prefix('\'') {
        rest.trim_matches('\'').to_string()
    } else {
        s.to_string()
    }
}

fn unquote_all(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|e| unquote(e)).collect()
}

/// Value of the first `name=value` entry, unquoted
pub fn get_str(name: &str, entries: &[&str]) -> Option<String> {
    entries.iter().find_map(|entry| {
        let (key, value) = entry.split_once('=')?;
        (key.trim() == name).then(|| unquote(value))
    })
}

fn get_int<T: std::str::FromStr>(name: &str, entries: &[&str], path: &Path) -> Result<Option<T>> {
    let Some(raw) = get_str(name, entries).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    parse_number(&raw, path).map(Some)
}

fn parse_number<T: std::str::FromStr>(raw: &str, path: &Path) -> Result<T> {
    let trimmed = raw.trim();
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid_number(raw, path));
    }
    trimmed.parse::<T>().map_err(|_parse_error| invalid_number(raw, path))
}

fn invalid_number(raw: &str, path: &Path) -> MontageError {
    MontageError::InvalidSettings {
        path: path.to_path_buf(),
        line: raw.to_string(),
        reason: "expected a whole number".to_string(),
    }
}

/// Boolean setting: true when the value starts with `t`, `y`, or `1`
pub fn get_bool(name: &str, entries: &[&str]) -> Option<bool> {
    let raw = get_str(name, entries)?;
    let first = raw.chars().next()?.to_ascii_lowercase();
    Some(matches!(first, 't' | 'y' | '1'))
}

/// Comma separated whole numbers; empty items are ignored
///
/// # Errors
///
/// Returns an error if an item is not a whole number
pub fn parse_int_list<T: std::str::FromStr>(text: &str, path: &Path) -> Result<Vec<T>> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse_number(item, path))
        .collect()
}

/// Parse `r,g,b` or `r,g,b,a`, falling back to `default` with a warning
pub fn parse_rgba(text: &str, default: Rgba) -> Rgba {
    let parts: Vec<&str> = text.trim().split(',').map(str::trim).collect();

    if parts
        .iter()
        .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()))
    {
        warn!(
            "Invalid color setting '{text}'. Expecting numeric values separated by commas. Using default setting."
        );
        return default;
    }

    let Ok(values) = parts
        .iter()
        .map(|p| p.parse::<u8>())
        .collect::<std::result::Result<Vec<u8>, _>>()
    else {
        warn!(
            "Invalid color setting '{text}'. Expecting numeric values between 0 and 255. Using default setting."
        );
        return default;
    };

    match values.as_slice() {
        [r, g, b] => Rgba([*r, *g, *b, 255]),
        [r, g, b, a] => Rgba([*r, *g, *b, *a]),
        _ => {
            warn!(
                "Invalid color setting '{text}'. Expecting 'r,g,b' or 'r,g,b,a'. Using default."
            );
            default
        }
    }
}

fn parse_feature_section(entries: &[&str], path: &Path) -> Result<Option<FeatureSpec<String>>> {
    let col = get_int::<u32>("column", entries, path)?.unwrap_or(0);
    let ncols = get_int::<u32>("num_columns", entries, path)?.unwrap_or(0);
    let row = get_int::<u32>("row", entries, path)?.unwrap_or(0);
    let nrows = get_int::<u32>("num_rows", entries, path)?.unwrap_or(0);

    if ncols == 0 {
        return Ok(None);
    }

    let mut files: Vec<String> = get_str("file", entries)
        .filter(|f| !f.is_empty())
        .into_iter()
        .collect();
    files.extend(
        entries
            .iter()
            .filter(|line| !line.contains('='))
            .map(|line| unquote(line)),
    );

    Ok(Some(FeatureSpec::new(
        FeatureArea::new(col, ncols, row, nrows),
        expand_list(&files)?,
    )))
}

/// Parse a command line feature: `(col,ncols,row,nrows,file)`
///
/// Malformed values log a warning and yield `None`.
///
/// # Errors
///
/// Returns an error if the file name is an `@` list that cannot be read
pub fn parse_feature_arg(text: &str) -> Result<Option<FeatureSpec<String>>> {
    let parts: Vec<&str> = text
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split(',')
        .collect();

    let [col, ncols, row, nrows, file] = parts.as_slice() else {
        warn!("Ignoring invalid feature attributes. Expected five values separated by commas.");
        return Ok(None);
    };

    let numbers: Option<Vec<u32>> = [col, ncols, row, nrows]
        .iter()
        .map(|v| v.trim().parse::<u32>().ok())
        .collect();
    let Some([col, ncols, row, nrows]) = numbers.as_deref().and_then(|n| <[u32; 4]>::try_from(n).ok())
    else {
        warn!("Ignoring invalid feature attributes. Expected the first four values to be numeric.");
        return Ok(None);
    };

    Ok(Some(FeatureSpec::new(
        FeatureArea::new(col, ncols, row, nrows),
        expand_list(&[unquote(file)])?,
    )))
}

/// Replace `@file` entries with the file names listed in that file
///
/// # Errors
///
/// Returns an error if a referenced list file cannot be read
pub fn expand_list(raw: &[String]) -> Result<Vec<String>> {
    let mut expanded = Vec::with_capacity(raw.len());
    for item in raw {
        if let Some(list_file) = item.strip_prefix('@') {
            expanded.extend(read_list_file(Path::new(list_file))?);
        } else {
            expanded.push(item.clone());
        }
    }
    Ok(expanded)
}

fn read_list_file(path: &Path) -> Result<Vec<String>> {
    let path = expand_home(path);
    let text = std::fs::read_to_string(&path).with_path(&path, "read image list")?;
    Ok(text
        .lines()
        .map(unquote)
        .filter(|s| !s.is_empty() && !s.starts_with('#'))
        .collect())
}

/// Expand a leading `~` to the home directory when `HOME` is set
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    std::env::var_os("HOME").map_or_else(|| path.to_path_buf(), |home| PathBuf::from(home).join(rest))
}
