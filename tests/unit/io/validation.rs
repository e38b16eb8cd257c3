//! Tests for pre-flight checks

#[cfg(test)]
mod tests {
    use montage::MontageError;
    use montage::io::validation::{check, preflight, preflight_with};
    use montage::layout::feature::{FeatureArea, FeatureSpec};
    use montage::layout::geometry::Size;
    use montage::session::options::{ImageEntry, InsertedOptions, MontageOptions};
    use std::path::Path;

    fn only(names: &'static [&'static str]) -> impl Fn(&Path) -> bool {
        move |path| names.iter().any(|name| Path::new(name) == path)
    }

    // Tests the defaults pass with no images at all
    // Verified by requiring at least one image
    #[test]
    fn test_defaults_pass() {
        assert!(preflight(&MontageOptions::default()).is_empty());
    }

    // Tests every missing source is reported, and skips are ignored
    // Verified by stopping at the first missing file
    #[test]
    fn test_missing_files() {
        let options = MontageOptions {
            images: vec![
                ImageEntry::parse("a.jpg"),
                ImageEntry::parse("gone.jpg"),
                ImageEntry::Skip,
            ],
            inserted: InsertedOptions {
                images: vec![ImageEntry::parse("gone-1.jpg")],
                ..InsertedOptions::default()
            },
            background_images: vec![ImageEntry::parse("bg.jpg")],
            ..MontageOptions::default()
        };

        let problems = preflight_with(&options, only(&["a.jpg"]));
        assert_eq!(
            problems,
            vec![
                "Image file not found: 'gone.jpg'.",
                "Image file not found: 'gone-1.jpg'.",
                "Background image file not found: 'bg.jpg'.",
            ]
        );
    }

    // Tests feature problems are numbered by feature
    // Verified by reporting partial features as inactive
    #[test]
    fn test_feature_problems() {
        let options = MontageOptions {
            features: vec![
                FeatureSpec::new(FeatureArea::new(1, 1, 0, 1), vec![ImageEntry::parse("f.jpg")]),
                FeatureSpec::new(FeatureArea::new(1, 1, 1, 1), Vec::new()),
                FeatureSpec::new(FeatureArea::new(2, 1, 2, 1), vec![ImageEntry::parse("x.jpg")]),
            ],
            ..MontageOptions::default()
        };

        let problems = preflight_with(&options, only(&["f.jpg"]));
        assert_eq!(problems.len(), 3);
        assert!(problems[0].starts_with("Feature-1: All column and row settings"));
        assert_eq!(problems[1], "Feature-2: File name must be set.");
        assert_eq!(problems[2], "Feature-3: Image file not found: 'x.jpg'.");
    }

    // Tests the output directory must exist and be a directory
    // Verified by creating the directory on demand
    #[test]
    fn test_output_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").expect("write");

        let ok = MontageOptions {
            output_dir: Some(dir.path().to_path_buf()),
            ..MontageOptions::default()
        };
        assert!(preflight(&ok).is_empty());

        let missing = MontageOptions {
            output_dir: Some(dir.path().join("missing")),
            ..MontageOptions::default()
        };
        assert!(preflight(&missing)[0].starts_with("Output folder not found"));

        let not_dir = MontageOptions {
            output_dir: Some(file),
            ..MontageOptions::default()
        };
        assert!(preflight(&not_dir)[0].starts_with("Output folder not a directory"));
    }

    // Tests canvas and grid values that leave nothing to draw
    // Verified by allowing zero-sized cells
    #[test]
    fn test_grid_problems() {
        let empty_canvas = MontageOptions {
            canvas: Size::new(0, 100),
            ..MontageOptions::default()
        };
        assert_eq!(preflight(&empty_canvas), vec!["Canvas size must be positive: 0 x 100."]);

        let zero_columns = MontageOptions {
            columns: vec![2, 0],
            rows: Vec::new(),
            ..MontageOptions::default()
        };
        assert_eq!(
            preflight(&zero_columns),
            vec![
                "Values for 'columns' must be greater than zero.",
                "At least one value is required for 'rows'.",
            ]
        );

        let crowded = MontageOptions {
            canvas: Size::new(60, 60),
            margin: 10,
            padding: 10,
            columns: vec![1, 2],
            rows: vec![1],
            ..MontageOptions::default()
        };
        let problems = preflight(&crowded);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("No room for images in a 2 x 1 grid"));
    }

    // Tests problems are bundled into a single validation error
    // Verified by returning only the first problem
    #[test]
    fn test_check() {
        let options = MontageOptions {
            images: vec![ImageEntry::parse("a.jpg"), ImageEntry::parse("b.jpg")],
            ..MontageOptions::default()
        };
        assert!(check(&options, |_| true).is_ok());
        match check(&options, |_| false) {
            Err(MontageError::Validation { problems }) => assert_eq!(problems.len(), 2),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
