//! The per-invocation loop: validate, then prepare, render, and save each
//! instance in turn

use crate::io::dump::write_options;
use crate::io::error::Result;
use crate::io::image::{OutputNamer, options_path, save_canvas};
use crate::io::progress::ProgressManager;
use crate::io::validation::check;
use crate::render::{Compositor, ImageLoader};
use crate::selection::RandomSelector;
use crate::session::options::MontageOptions;
use crate::session::state::Session;
use tracing::info;
use std::path::PathBuf;

/// Render every instance described by `options`
///
/// Returns the written image paths in instance order.
///
/// # Errors
///
/// Returns a validation error before anything is written if the options
/// are unusable, otherwise the first load or save failure
pub fn create_montages<L: ImageLoader>(
    options: &MontageOptions,
    loader: &L,
    progress: Option<&ProgressManager>,
) -> Result<Vec<PathBuf>> {
    let random = RandomSelector::from_seed_option(options.seed);
    create_montages_with(options, loader, random, &OutputNamer::new(options), progress)
}

/// [`create_montages`] with an explicit random source and output namer
///
/// # Errors
///
/// Same as [`create_montages`]
pub fn create_montages_with<L: ImageLoader>(
    options: &MontageOptions,
    loader: &L,
    random: RandomSelector,
    namer: &OutputNamer,
    progress: Option<&ProgressManager>,
) -> Result<Vec<PathBuf>> {
    check(options, |path| loader.exists(path))?;

    let mut session = Session::with_random(options, random);
    let compositor = Compositor::new(options, loader);
    let count = options.montage_count();
    let mut written = Vec::with_capacity(count);

    for instance in 1..=count {
        let path = namer.path_for(instance);
        if let Some(pm) = progress {
            pm.start_instance(&path.display().to_string());
        }

        let mut run = session.prepare(instance);
        let canvas = compositor.compose(&mut run)?;

        run.say(format!("Saving '{}'", path.display()));
        save_canvas(&canvas, &path)?;

        if options.write_options {
            write_options(&options_path(&path), options, &run)?;
        }

        if let Some(pm) = progress {
            pm.complete_instance();
        }
        written.push(path);
    }

    info!("Created {} montage(s).", written.len());
    Ok(written)
}
