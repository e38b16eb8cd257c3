//! Pre-flight checks run before any instance is rendered

use crate::io::error::{MontageError, Result};
use crate::io::settings::expand_home;
use crate::layout::grid::GridSpec;
use crate::session::options::{ImageEntry, MontageOptions};
use std::path::Path;

fn missing_files<'a, F: Fn(&Path) -> bool>(
    entries: &'a [ImageEntry],
    prefix: &'a str,
    exists: &'a F,
) -> impl Iterator<Item = String> + 'a {
    entries.iter().filter_map(move |entry| {
        let path = entry.path()?;
        (!exists(path)).then(|| format!("{prefix} file not found: '{}'.", path.display()))
    })
}

/// Collect every problem that would stop the run
///
/// Source files are looked up on disk. An empty result means rendering
/// can start.
pub fn preflight(options: &MontageOptions) -> Vec<String> {
    preflight_with(options, |path| expand_home(path).exists())
}

/// [`preflight`] with a caller-supplied source file lookup
pub fn preflight_with<F: Fn(&Path) -> bool>(options: &MontageOptions, exists: F) -> Vec<String> {
    let mut problems = Vec::new();

    if let Some(dir) = &options.output_dir {
        let dir = expand_home(dir);
        if !dir.exists() {
            problems.push(format!("Output folder not found: '{}'.", dir.display()));
        } else if !dir.is_dir() {
            problems.push(format!("Output folder not a directory: '{}'.", dir.display()));
        }
    }

    problems.extend(missing_files(&options.images, "Image", &exists));
    problems.extend(missing_files(&options.inserted.images, "Image", &exists));
    problems.extend(missing_files(
        &options.background_images,
        "Background image",
        &exists,
    ));

    for (index, feature) in options.features.iter().enumerate() {
        let number = index + 1;
        if feature.is_partially_set() {
            problems.push(format!(
                "Feature-{number}: All column and row settings must be set to not-zero values if any are set."
            ));
        }
        if feature.area.is_active() && feature.files.is_empty() {
            problems.push(format!("Feature-{number}: File name must be set."));
        }
        problems.extend(
            missing_files(&feature.files, "Image", &exists)
                .map(|problem| format!("Feature-{number}: {problem}")),
        );
    }

    if options.canvas.is_empty() {
        problems.push(format!(
            "Canvas size must be positive: {} x {}.",
            options.canvas.width, options.canvas.height
        ));
    }

    for (name, candidates) in [("columns", &options.columns), ("rows", &options.rows)] {
        if candidates.is_empty() {
            problems.push(format!("At least one value is required for '{name}'."));
        } else if candidates.contains(&0) {
            problems.push(format!("Values for '{name}' must be greater than zero."));
        }
    }

    if !options.canvas.is_empty() {
        problems.extend(cell_problems(options));
    }

    problems
}

fn cell_problems(options: &MontageOptions) -> Vec<String> {
    let mut problems = Vec::new();
    for &columns in options.columns.iter().filter(|&&c| c > 0) {
        for &rows in options.rows.iter().filter(|&&r| r > 0) {
            let grid = GridSpec {
                canvas: options.canvas,
                columns,
                rows,
                margin: options.margin,
                padding: options.padding,
            };
            if grid.inner_size().is_empty() {
                problems.push(format!(
                    "No room for images in a {columns} x {rows} grid: reduce 'margin' or 'padding', or enlarge the canvas."
                ));
            }
        }
    }
    problems
}

/// Run [`preflight_with`] and turn any problems into one error
///
/// # Errors
///
/// Returns [`MontageError::Validation`] listing every problem found
pub fn check<F: Fn(&Path) -> bool>(options: &MontageOptions, exists: F) -> Result<()> {
    let problems = preflight_with(options, exists);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(MontageError::Validation { problems })
    }
}
