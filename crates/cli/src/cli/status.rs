use ck_koans::Catalog;
use ck_progress::Tracker;

use crate::prompt::Prompter;
use crate::ui;

pub fn status(catalog: &Catalog, tracker: &Tracker) {
    let stats = tracker.stats(catalog.total_koans());
    ui::progress(&stats);
    if tracker.exists() {
        println!("  File:       {}", tracker.path().display());
    } else {
        println!("  File:       (not yet written)");
    }
}

pub fn list(catalog: &Catalog, tracker: &Tracker) {
    ui::lesson_list(catalog.lessons(), tracker);
}

/// Reset all progress, asking first unless `yes` is set. Returns whether
/// anything was reset.
pub fn reset(tracker: &Tracker, yes: bool, prompter: &mut impl Prompter) -> anyhow::Result<bool> {
    if !tracker.exists() {
        ui::info("No progress to reset.");
        return Ok(false);
    }
    if !yes && !prompter.confirm("Reset all progress?") {
        ui::info("Reset cancelled.");
        return Ok(false);
    }
    tracker.reset()?;
    ui::success("Progress reset.");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Answer(bool);

    impl Prompter for Answer {
        fn answer(&mut self) -> Option<String> {
            None
        }
        fn confirm(&mut self, _question: &str) -> bool {
            self.0
        }
        fn pause(&mut self) {}
    }

    fn tracker_with_progress() -> (tempfile::TempDir, Tracker) {
        let tmp = tempfile::tempdir().unwrap();
        let tracker = Tracker::open(&tmp.path().join("progress.json")).unwrap();
        tracker.mark_completed("a", 1, 0).unwrap();
        (tmp, tracker)
    }

    #[test]
    fn reset_without_file_is_a_no_op() {
        let tmp = tempfile::tempdir().unwrap();
        let tracker = Tracker::open(&tmp.path().join("progress.json")).unwrap();
        assert!(!reset(&tracker, true, &mut Answer(true)).unwrap());
        assert!(!tracker.exists());
    }

    #[test]
    fn declined_confirmation_keeps_progress() {
        let (_tmp, tracker) = tracker_with_progress();
        assert!(!reset(&tracker, false, &mut Answer(false)).unwrap());
        assert!(tracker.is_completed("a"));
    }

    #[test]
    fn yes_flag_skips_confirmation() {
        let (_tmp, tracker) = tracker_with_progress();
        assert!(reset(&tracker, true, &mut Answer(false)).unwrap());
        assert_eq!(tracker.completed_count(), 0);
    }
}
