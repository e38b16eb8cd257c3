//! Settings dump written beside each output image
//!
//! The dump records the resolved options together with what one instance
//! actually used, and can be fed back in with `--settings-file`.

use crate::io::configuration::APP_TITLE;
use crate::io::error::{Result, WithPath};
use crate::session::options::{ImageEntry, MontageOptions};
use crate::session::state::RunState;
use tracing::info;
use std::fmt::{self, Write as _};
use std::path::Path;

/// Quote `text` when it contains spaces
pub fn quote_spaces(text: &str) -> String {
    if text.contains(' ') {
        format!("\"{text}\"")
    } else {
        text.to_string()
    }
}

fn int_list<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn write_entries(out: &mut String, header: &str, entries: &[ImageEntry]) -> fmt::Result {
    writeln!(out, "\n{header}")?;
    for entry in entries {
        writeln!(out, "{}", quote_spaces(&entry.to_string()))?;
    }
    Ok(())
}

/// Render the dump for one instance
///
/// # Errors
///
/// Returns an error if a value fails to format
pub fn options_text(
    options: &MontageOptions,
    run: &RunState,
    created: &str,
) -> std::result::Result<String, fmt::Error> {
    let mut s = String::new();
    writeln!(s, "# Created {created} by {APP_TITLE}")?;

    let output_dir = options
        .output_dir
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_default();

    writeln!(s, "\n[settings]")?;
    writeln!(s, "output_file={}", quote_spaces(&options.output_file))?;
    writeln!(s, "output_dir={}", quote_spaces(&output_dir))?;
    writeln!(s, "canvas_width={}", options.canvas.width)?;
    writeln!(s, "canvas_height={}", options.canvas.height)?;
    writeln!(s, "background_rgba={}", options.background)?;
    writeln!(s, "background_blur={}", options.background_blur)?;
    writeln!(s, "columns={}", int_list(&options.columns))?;
    writeln!(s, "rows={}", int_list(&options.rows))?;
    writeln!(s, "margin={}", options.margin)?;
    writeln!(s, "padding={}", options.padding)?;
    writeln!(s, "border_width={}", options.border_width)?;
    writeln!(s, "border_rgba={}", options.border)?;
    writeln!(s, "do_zoom={}", options.zoom)?;
    writeln!(s, "img1_pos={}", int_list(&options.inserted.positions))?;
    writeln!(s, "img1_start={}", options.inserted.start)?;
    writeln!(s, "img1_freq={}", int_list(&options.inserted.frequency))?;
    writeln!(s, "label_font={}", quote_spaces(&options.label.font))?;
    writeln!(s, "label_size={}", options.label.size)?;
    writeln!(s, "shuffle_mode={}", options.shuffle)?;
    writeln!(s, "shuffle_count={}", options.shuffle_count)?;
    writeln!(s, "stamp_mode={}", options.stamp.code())?;
    writeln!(s, "write_opts={}", options.write_options)?;

    if run.features.is_empty() {
        s.push_str("\n# [feature-1]\n# file=\n# column=\n# row=\n# num_columns=\n# num_rows=\n");
    }
    for (number, feature) in run.features.iter().enumerate() {
        let area = feature.area;
        let first = feature
            .files
            .first()
            .map(ToString::to_string)
            .unwrap_or_default();
        writeln!(s, "\n[feature-{}]", number + 1)?;
        writeln!(s, "file={}", quote_spaces(&first))?;
        writeln!(s, "column={}", area.col)?;
        writeln!(s, "row={}", area.row)?;
        writeln!(s, "num_columns={}", area.ncols)?;
        writeln!(s, "num_rows={}", area.nrows)?;
        for file in feature.files.iter().skip(1) {
            writeln!(s, "{}", quote_spaces(&file.to_string()))?;
        }
    }

    write_entries(&mut s, "[background-images]", &options.background_images)?;
    write_entries(&mut s, "[images]", &options.images)?;
    write_entries(&mut s, "[images-1]", &options.inserted.images)?;

    s.push('\n');
    write_entries(&mut s, "[LOG: CURRENT-IMAGES]", &run.images)?;

    if !run.log.is_empty() {
        writeln!(s, "\n\n[LOG: STEPS]")?;
        for line in &run.log {
            writeln!(s, "{line}")?;
        }
    }
    Ok(s)
}

/// Write the dump for one instance to `path`
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn write_options(path: &Path, options: &MontageOptions, run: &RunState) -> Result<()> {
    info!("Writing options to '{}'", path.display());
    let created = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    let text = options_text(options, run, &created)
        .map_err(std::io::Error::other)
        .with_path(path, "format options")?;
    std::fs::write(path, text).with_path(path, "write options")
}
