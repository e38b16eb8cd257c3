//! Cross-instance session state and the per-instance run state
//!
//! A [`Session`] lives for one invocation and carries every cursor that
//! must persist between instances: the pool, feature cycles, the inserted
//! schedule, grid choosers, and the background chooser. Each call to
//! [`Session::prepare`] produces a fresh [`RunState`] for one instance.

use crate::layout::feature::{FeatureArea, FeatureCursor};
use crate::layout::grid::{GridSpec, Placement, plan_placements};
use crate::selection::choice::{AxisChoice, BackgroundChoice};
use crate::selection::inserted::InsertedSchedule;
use crate::selection::{ImagePool, RandomSelector, SelectionFlags, select_images};
use crate::session::options::{ImageEntry, MontageOptions};
use tracing::{debug, info};

/// A feature as resolved for one instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedFeature {
    /// Area after clamping to this instance's grid
    pub area: FeatureArea,
    /// File list in this instance's order
    pub files: Vec<ImageEntry>,
    /// Entry placed this instance
    pub chosen: Option<ImageEntry>,
}

/// Everything needed to render one montage instance
#[derive(Clone, Debug)]
pub struct RunState {
    /// 1-based instance number
    pub instance: usize,
    /// Grid chosen for this instance
    pub grid: GridSpec,
    /// Features resolved against the grid
    pub features: Vec<ResolvedFeature>,
    /// Placements in emission order: features, then free cells
    pub placements: Vec<Placement<ImageEntry>>,
    /// Images for the unpinned placements, in order
    pub images: Vec<ImageEntry>,
    /// Background image for this instance
    pub background: Option<ImageEntry>,
    /// Steps recorded while preparing and rendering
    pub log: Vec<String>,
}

impl RunState {
    /// Record a user-facing step
    pub fn say(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{message}");
        self.log.push(message);
    }

    /// Record a detail step
    pub fn note(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("{message}");
        self.log.push(message);
    }
}

struct FeatureSlot {
    area: FeatureArea,
    files: Vec<ImageEntry>,
    cursor: FeatureCursor,
}

/// Per-invocation state shared by all instances
pub struct Session<'a> {
    options: &'a MontageOptions,
    random: RandomSelector,
    columns: AxisChoice,
    rows: AxisChoice,
    features: Vec<FeatureSlot>,
    pool: ImagePool<ImageEntry>,
    inserted: InsertedSchedule<ImageEntry>,
    backgrounds: BackgroundChoice<ImageEntry>,
}

impl<'a> Session<'a> {
    /// Create a session, seeding randomness from the options
    pub fn new(options: &'a MontageOptions) -> Self {
        Self::with_random(options, RandomSelector::from_seed_option(options.seed))
    }

    /// Create a session with an explicit random source
    pub fn with_random(options: &'a MontageOptions, mut random: RandomSelector) -> Self {
        let shuffle = options.shuffle;
        let pool = ImagePool::new(options.images.clone(), shuffle.images, &mut random);
        let features = options
            .features
            .iter()
            .map(|spec| FeatureSlot {
                area: spec.area,
                files: spec.files.clone(),
                cursor: FeatureCursor::new(),
            })
            .collect();

        Self {
            options,
            columns: AxisChoice::new(&options.columns, shuffle.columns),
            rows: AxisChoice::new(&options.rows, shuffle.rows),
            features,
            pool,
            inserted: InsertedSchedule::new(
                options.inserted.images.clone(),
                options.inserted.start,
                options.inserted.frequency.clone(),
                options.inserted.positions.clone(),
            ),
            backgrounds: BackgroundChoice::new(
                options.background_images.clone(),
                shuffle.background,
            ),
            random,
        }
    }

    /// Resolve grid, features, images, and background for `instance`
    pub fn prepare(&mut self, instance: usize) -> RunState {
        let options = self.options;
        let grid = GridSpec {
            canvas: options.canvas,
            columns: self.columns.next(&mut self.random),
            rows: self.rows.next(&mut self.random),
            margin: options.margin,
            padding: options.padding,
        };

        let mut features = Vec::with_capacity(self.features.len());
        for slot in &mut self.features {
            let area = slot.area.clamp_to_grid(grid.columns, grid.rows);
            let mut files = slot.files.clone();
            if options.shuffle.feature_files {
                self.random.shuffle(&mut files);
            }
            let chosen = if area.is_active() {
                slot.cursor
                    .advance(files.len())
                    .and_then(|index| files.get(index).cloned())
            } else {
                None
            };
            features.push(ResolvedFeature {
                area,
                files,
                chosen,
            });
        }

        let feature_cells: u32 = features
            .iter()
            .filter(|f| f.area.is_active())
            .map(|f| f.area.cell_count())
            .sum();
        let cells = grid.cell_count().saturating_sub(feature_cells) as usize;

        let images = select_images(
            instance,
            cells,
            &mut self.pool,
            &mut self.inserted,
            SelectionFlags {
                shuffle_images: options.shuffle.images,
                no_wrap: options.shuffle.no_wrap,
            },
            &mut self.random,
        );

        let pinned: Vec<(FeatureArea, Option<ImageEntry>)> = features
            .iter()
            .map(|f| (f.area, f.chosen.clone()))
            .collect();
        let placements = plan_placements(&grid, &pinned);
        let background = self.backgrounds.next(&mut self.random);

        let mut run = RunState {
            instance,
            grid,
            features,
            placements,
            images,
            background,
            log: Vec::new(),
        };
        run.note(format!("ncols={}", grid.columns));
        run.note(format!("nrows={}", grid.rows));
        let cell = grid.cell_size();
        run.note(format!("cell_size=({}, {})", cell.width, cell.height));
        run
    }
}
