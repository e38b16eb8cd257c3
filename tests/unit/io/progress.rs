//! Tests for the instance progress bar

#[cfg(test)]
mod tests {
    use montage::io::progress::ProgressManager;

    // Tests completed instances are counted
    // Verified by advancing on start instead of completion
    #[test]
    fn test_counts_completed_instances() {
        let progress = ProgressManager::new(3);
        assert_eq!(progress.completed(), 0);

        progress.start_instance("out-001.jpg");
        assert_eq!(progress.completed(), 0);
        progress.complete_instance();
        progress.start_instance("out-002.jpg");
        progress.complete_instance();

        assert_eq!(progress.completed(), 2);
        progress.finish();
    }
}
