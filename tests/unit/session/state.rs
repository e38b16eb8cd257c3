//! Tests for per-instance preparation across a session

#[cfg(test)]
mod tests {
    use montage::layout::feature::{FeatureArea, FeatureSpec};
    use montage::selection::RandomSelector;
    use montage::session::options::{ImageEntry, MontageOptions, ShuffleMode};
    use montage::session::state::{RunState, Session};

    fn entries(names: &[&str]) -> Vec<ImageEntry> {
        names.iter().map(|n| ImageEntry::parse(n)).collect()
    }

    fn labels(run: &RunState) -> Vec<String> {
        run.images.iter().map(ImageEntry::label).collect()
    }

    // Tests the pool cursor continues from one instance to the next
    // Verified by resetting the pool for each instance
    #[test]
    fn test_pool_continues_across_instances() {
        let options = MontageOptions {
            images: entries(&["a", "b", "c", "d", "e"]),
            ..MontageOptions::default()
        };
        let mut session = Session::with_random(&options, RandomSelector::new(1));

        assert_eq!(labels(&session.prepare(1)), vec!["a", "b", "c", "d"]);
        assert_eq!(labels(&session.prepare(2)), vec!["e", "a", "b", "c"]);
    }

    // Tests no-wrap leaves the instance after an exact fill empty
    // Verified by restarting the pool silently at the start of an instance
    #[test]
    fn test_no_wrap_after_exact_fill() {
        let options = MontageOptions {
            images: entries(&["a", "b", "c", "d"]),
            shuffle: ShuffleMode::parse("n"),
            ..MontageOptions::default()
        };
        let mut session = Session::with_random(&options, RandomSelector::new(1));

        assert_eq!(labels(&session.prepare(1)), vec!["a", "b", "c", "d"]);
        assert!(session.prepare(2).images.is_empty());
        assert_eq!(labels(&session.prepare(3)), vec!["a", "b", "c", "d"]);
    }

    // Tests a shuffled run uses every image before repeating any
    // Verified by drawing images independently per cell
    #[test]
    fn test_shuffled_run_covers_pool() {
        let names: Vec<String> = (0..8).map(|i| format!("img{i}.jpg")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let options = MontageOptions {
            images: entries(&refs),
            shuffle: ShuffleMode::parse("i"),
            ..MontageOptions::default()
        };
        let mut session = Session::with_random(&options, RandomSelector::new(11));

        let mut seen = labels(&session.prepare(1));
        seen.extend(labels(&session.prepare(2)));
        seen.sort();
        assert_eq!(seen, names);
    }

    // Tests features cycle their files and reserve their cells
    // Verified by not advancing the feature cursor
    #[test]
    fn test_feature_cycles_and_reserves() {
        let options = MontageOptions {
            images: entries(&["a", "b", "c"]),
            features: vec![FeatureSpec::new(
                FeatureArea::new(1, 2, 1, 1),
                entries(&["f1", "f2"]),
            )],
            ..MontageOptions::default()
        };
        let mut session = Session::with_random(&options, RandomSelector::new(1));

        let first = session.prepare(1);
        assert_eq!(first.placements.len(), 3);
        assert_eq!(
            first.placements.first().and_then(|p| p.pinned.clone()),
            Some(ImageEntry::parse("f1"))
        );
        assert_eq!(labels(&first), vec!["a", "b"]);

        let second = session.prepare(2);
        assert_eq!(
            second.features.first().and_then(|f| f.chosen.clone()),
            Some(ImageEntry::parse("f2"))
        );
        assert_eq!(labels(&second), vec!["c", "a"]);
    }

    // Tests features are clamped to each instance's grid
    // Verified by resolving features against the requested grid only
    #[test]
    fn test_feature_clamped_per_instance() {
        let options = MontageOptions {
            columns: vec![3, 1],
            rows: vec![1],
            images: entries(&["a"]),
            features: vec![FeatureSpec::new(
                FeatureArea::new(3, 1, 1, 1),
                entries(&["f"]),
            )],
            ..MontageOptions::default()
        };
        let mut session = Session::with_random(&options, RandomSelector::new(1));

        let wide = session.prepare(1);
        assert_eq!(wide.grid.columns, 3);
        assert_eq!(wide.features.first().map(|f| f.area), Some(FeatureArea::new(3, 1, 1, 1)));

        let narrow = session.prepare(2);
        assert_eq!(narrow.grid.columns, 1);
        assert_eq!(narrow.features.first().map(|f| f.area), Some(FeatureArea::new(1, 1, 1, 1)));
        assert_eq!(narrow.placements.len(), 1);
        assert!(narrow.images.is_empty());
    }

    // Tests backgrounds cycle and geometry notes are recorded
    // Verified by dropping notes from the run log
    #[test]
    fn test_background_and_notes() {
        let options = MontageOptions {
            background_images: entries(&["bg1", "bg2"]),
            ..MontageOptions::default()
        };
        let mut session = Session::with_random(&options, RandomSelector::new(1));

        let first = session.prepare(1);
        assert_eq!(first.background, Some(ImageEntry::parse("bg1")));
        assert!(first.log.iter().any(|line| line == "ncols=2"));
        assert!(first.log.iter().any(|line| line == "cell_size=(310, 230)"));

        assert_eq!(session.prepare(2).background, Some(ImageEntry::parse("bg2")));
        assert_eq!(session.prepare(3).background, Some(ImageEntry::parse("bg1")));
    }

    // Tests the same seed prepares identical shuffled instances
    // Verified by seeding each session from entropy
    #[test]
    fn test_seeded_sessions_match() {
        let options = MontageOptions {
            images: entries(&["a", "b", "c", "d", "e", "f"]),
            columns: vec![3],
            rows: vec![3],
            shuffle: ShuffleMode::parse("icr"),
            ..MontageOptions::default()
        };
        let mut first = Session::with_random(&options, RandomSelector::new(99));
        let mut second = Session::with_random(&options, RandomSelector::new(99));

        for instance in 1..=4 {
            let a = first.prepare(instance);
            let b = second.prepare(instance);
            assert_eq!(a.grid, b.grid);
            assert_eq!(a.images, b.images);
        }
    }
}
