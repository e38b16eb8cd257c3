//! Tests for the per-instance settings dump

#[cfg(test)]
mod tests {
    use montage::io::cli::Cli;
    use montage::io::dump::{options_text, quote_spaces, write_options};
    use montage::io::settings::SettingsFile;
    use montage::layout::feature::{FeatureArea, FeatureSpec};
    use montage::selection::RandomSelector;
    use montage::session::options::{ImageEntry, MontageOptions, ShuffleMode, StampMode};
    use montage::session::Session;
    use std::path::Path;

    fn featured_options() -> MontageOptions {
        MontageOptions {
            images: vec![
                ImageEntry::parse("a.jpg"),
                ImageEntry::parse("my photo.jpg"),
                ImageEntry::Skip,
            ],
            features: vec![FeatureSpec::new(
                FeatureArea::new(1, 1, 1, 1),
                vec![ImageEntry::parse("big one.jpg"), ImageEntry::parse("b.jpg")],
            )],
            background_images: vec![ImageEntry::parse("bg.jpg")],
            columns: vec![2, 3],
            margin: 4,
            zoom: true,
            shuffle: ShuffleMode::parse("i"),
            stamp: StampMode::LeftMicros,
            ..MontageOptions::default()
        }
    }

    // Tests names with spaces are quoted and others left alone
    // Verified by quoting every value
    #[test]
    fn test_quote_spaces() {
        assert_eq!(quote_spaces("a b.jpg"), "\"a b.jpg\"");
        assert_eq!(quote_spaces("ab.jpg"), "ab.jpg");
        assert_eq!(quote_spaces(""), "");
    }

    // Tests the dump lists settings, features, lists, and the run log
    // Verified by omitting the current image log
    #[test]
    fn test_sections() {
        let options = featured_options();
        let run = Session::with_random(&options, RandomSelector::new(3)).prepare(1);
        let text = options_text(&options, &run, "2024-01-02 03:04").expect("format options");

        assert!(text.starts_with("# Created 2024-01-02 03:04 by make-montage"));
        assert!(text.contains("\n[settings]\n"));
        assert!(text.contains("columns=2,3\n"));
        assert!(text.contains("stamp_mode=3\n"));
        assert!(text.contains("shuffle_mode=i\n"));
        assert!(text.contains("[feature-1]\nfile=\"big one.jpg\"\n"));
        assert!(text.contains("\"my photo.jpg\"\n"));
        assert!(text.contains("(skip)\n"));
        assert!(text.contains("[LOG: CURRENT-IMAGES]"));
        assert!(text.contains("[LOG: STEPS]\nncols="));
    }

    // Tests a commented template stands in for missing features
    // Verified by writing an empty active feature section
    #[test]
    fn test_feature_template() {
        let options = MontageOptions::default();
        let run = Session::with_random(&options, RandomSelector::new(3)).prepare(1);
        let text = options_text(&options, &run, "now").expect("format options");

        assert!(text.contains("# [feature-1]\n# file=\n"));
        assert!(!text.contains("\n[feature-1]"));
    }

    // Tests a dump read back as a settings file reproduces the options
    // Verified by dumping the shuffle mode letters in a different order
    #[test]
    fn test_dump_reads_back() {
        let options = MontageOptions {
            shuffle: ShuffleMode::default(),
            stamp: StampMode::None,
            ..featured_options()
        };
        let run = Session::with_random(&options, RandomSelector::new(3)).prepare(1);
        let text = options_text(&options, &run, "now").expect("format options");

        let settings =
            SettingsFile::parse(&text, Path::new("dump.txt")).expect("parse");
        let reloaded = Cli::default()
            .resolve_options(settings)
            .expect("resolve");

        assert_eq!(reloaded, options);
    }

    // Tests the dump is written to the requested path
    // Verified by writing to the image path instead
    #[test]
    fn test_write_options() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out_options.txt");
        let options = MontageOptions::default();
        let run = Session::with_random(&options, RandomSelector::new(3)).prepare(1);

        write_options(&path, &options, &run).expect("write");
        let text = std::fs::read_to_string(&path).expect("read");
        assert!(text.contains("[settings]"));

        assert!(write_options(&dir.path().join("missing/x.txt"), &options, &run).is_err());
    }
}
