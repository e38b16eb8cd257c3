//! Tests for option value types and defaults

#[cfg(test)]
mod tests {
    use montage::io::configuration::{DEFAULT_CANVAS_WIDTH, DEFAULT_OUTPUT_FILE};
    use montage::session::options::{
        ImageEntry, LabelOptions, MontageOptions, Rgba, ShuffleMode, StampMode,
    };
    use std::path::Path;

    // Tests the skip marker is recognized and labels use the base name
    // Verified by comparing the marker without trimming
    #[test]
    fn test_image_entry() {
        assert_eq!(ImageEntry::parse(" (skip) "), ImageEntry::Skip);
        assert!(ImageEntry::Skip.path().is_none());

        let entry = ImageEntry::parse("photos/summer/beach.jpg");
        assert_eq!(entry.path(), Some(Path::new("photos/summer/beach.jpg")));
        assert_eq!(entry.label(), "beach.jpg");
        assert_eq!(entry.to_string(), "photos/summer/beach.jpg");
        assert_eq!(ImageEntry::Skip.to_string(), "(skip)");
    }

    // Tests shuffle letters parse case-insensitively and print back
    // Verified by matching letters case-sensitively
    #[test]
    fn test_shuffle_mode() {
        let mode = ShuffleMode::parse("IbXn");
        assert!(mode.images);
        assert!(mode.background);
        assert!(mode.no_wrap);
        assert!(!mode.columns);
        assert!(!mode.rows);
        assert!(!mode.feature_files);
        assert_eq!(mode.to_string(), "ibn");

        assert_eq!(ShuffleMode::parse(""), ShuffleMode::default());
    }

    // Tests stamp codes map both ways and reject unknown values
    // Verified by mapping unknown codes to None variant
    #[test]
    fn test_stamp_mode_codes() {
        for code in 0..=4 {
            let mode = StampMode::from_code(code);
            assert_eq!(mode.map(|m| m.code()), Some(code));
        }
        assert_eq!(StampMode::from_code(5), None);
    }

    // Tests colors print as comma separated channels
    // Verified by omitting alpha from Display
    #[test]
    fn test_rgba() {
        let color = Rgba([1, 2, 3, 4]);
        assert_eq!(color.rgb(), [1, 2, 3]);
        assert_eq!(color.alpha(), 4);
        assert_eq!(color.to_string(), "1,2,3,4");
    }

    // Tests labels need both a font and a size
    // Verified by enabling labels with only a font
    #[test]
    fn test_label_enabled() {
        let mut label = LabelOptions {
            font: "DejaVuSans.ttf".to_string(),
            size: 0,
        };
        assert!(!label.is_enabled());
        label.size = 12;
        assert!(label.is_enabled());
        label.font.clear();
        assert!(!label.is_enabled());
    }

    // Tests defaults and the instance count limits
    // Verified by removing the clamp from montage_count
    #[test]
    fn test_defaults_and_count() {
        let options = MontageOptions::default();
        assert_eq!(options.output_file, DEFAULT_OUTPUT_FILE);
        assert_eq!(options.canvas.width, DEFAULT_CANVAS_WIDTH);
        assert_eq!(options.inserted.frequency, vec![1]);
        assert_eq!(options.montage_count(), 1);

        let none = MontageOptions {
            shuffle_count: 0,
            ..MontageOptions::default()
        };
        assert_eq!(none.montage_count(), 1);

        let many = MontageOptions {
            shuffle_count: 5000,
            ..MontageOptions::default()
        };
        assert_eq!(many.montage_count(), 999);
    }
}
