//! The interactive koan loop.
//!
//! Koans are visited in catalog order, starting after the last one the
//! learner completed and wrapping around so nothing incomplete is missed.
//! Every attempt, hint and completion is persisted as it happens.

use ck_domain::config::SessionConfig;
use ck_domain::error::Result;
use ck_domain::trace::TraceEvent;
use ck_koans::{Catalog, Koan};
use ck_progress::Tracker;

use crate::prompt::Prompter;
use crate::ui;

/// How a single koan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Skipped,
    Quit,
}

/// How the whole session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every koan in the catalog is complete.
    Finished,
    /// The pass ended with some koans still incomplete (skipped).
    Paused,
    Quit,
}

/// A koan together with the title of the lesson it belongs to.
struct Entry<'a> {
    lesson: &'a str,
    koan: &'a Koan,
}

pub struct Session<'a, P: Prompter> {
    catalog: &'a Catalog,
    tracker: &'a Tracker,
    config: &'a SessionConfig,
    prompter: P,
}

impl<'a, P: Prompter> Session<'a, P> {
    pub fn new(
        catalog: &'a Catalog,
        tracker: &'a Tracker,
        config: &'a SessionConfig,
        prompter: P,
    ) -> Self {
        Self {
            catalog,
            tracker,
            config,
            prompter,
        }
    }

    pub fn run(&mut self) -> Result<SessionEnd> {
        let entries: Vec<Entry<'a>> = self
            .catalog
            .lessons()
            .iter()
            .flat_map(|lesson| {
                lesson.koans.iter().map(move |koan| Entry {
                    lesson: lesson.title.as_str(),
                    koan,
                })
            })
            .collect();
        let total = entries.len();

        ui::welcome();

        let Some(start) = resume_index(&entries, self.tracker) else {
            ui::completion(&self.tracker.stats(total));
            return Ok(SessionEnd::Finished);
        };

        for i in (start..total).chain(0..start) {
            let entry = &entries[i];
            if self.tracker.is_completed(&entry.koan.id) {
                continue;
            }
            ui::koan(entry.koan, entry.lesson, i + 1, total);
            if self.run_koan(entry.koan)? == Outcome::Quit {
                ui::info("Progress saved. See you next time.");
                return Ok(SessionEnd::Quit);
            }
        }

        let stats = self.tracker.stats(total);
        if stats.is_complete() {
            ui::completion(&stats);
            Ok(SessionEnd::Finished)
        } else {
            ui::progress(&stats);
            Ok(SessionEnd::Paused)
        }
    }

    fn run_koan(&mut self, koan: &Koan) -> Result<Outcome> {
        let mut attempts = 0u32;
        let mut hints_used = 0u32;
        let mut hint_level = 0usize;

        loop {
            let Some(line) = self.prompter.answer() else {
                return Ok(Outcome::Quit);
            };
            let answer = line.trim();

            match answer.to_lowercase().as_str() {
                "" => continue,
                "quit" | "exit" => return Ok(Outcome::Quit),
                "skip" => {
                    ui::warning("Skipping this koan.");
                    return Ok(Outcome::Skipped);
                }
                "hint" | "h" => {
                    if self.reveal_hint(koan, &mut hint_level)? {
                        hints_used += 1;
                    } else {
                        ui::info("No more hints for this koan.");
                    }
                    continue;
                }
                _ => {}
            }

            attempts += 1;
            self.tracker.record_attempt(&koan.id)?;
            let correct = koan.check_answer(answer);
            TraceEvent::KoanAttempted {
                koan_id: koan.id.clone(),
                correct,
                attempts,
            }
            .emit();

            if correct {
                let expression = koan.complete_expression();
                if let Err(e) = ck_cron::validate(&expression) {
                    tracing::warn!(koan_id = %koan.id, error = %e, "completed expression is invalid");
                }
                self.tracker.mark_completed(&koan.id, attempts, hints_used)?;
                ui::correct(koan, &expression, &ck_cron::describe(&expression));
                self.prompter.pause();
                return Ok(Outcome::Completed);
            }

            ui::incorrect();
            if attempts >= self.config.hint_after_attempts
                && koan.hint(hint_level).is_some()
                && self.prompter.confirm("Would you like a hint?")
                && self.reveal_hint(koan, &mut hint_level)?
            {
                hints_used += 1;
            }
        }
    }

    /// Show the hint at `level` and advance it. `false` when none is left.
    fn reveal_hint(&mut self, koan: &Koan, level: &mut usize) -> Result<bool> {
        let Some(text) = koan.hint(*level) else {
            return Ok(false);
        };
        ui::hint(text, *level, koan.hints.len());
        if !koan.has_more_hints(*level) {
            ui::info("That was the last hint.");
        }
        self.tracker.record_hint(&koan.id)?;
        TraceEvent::HintRevealed {
            koan_id: koan.id.clone(),
            level: *level,
        }
        .emit();
        *level += 1;
        Ok(true)
    }
}

/// First incomplete koan at or after the one following the last completed
/// koan, wrapping to the start. `None` when everything is complete.
fn resume_index(entries: &[Entry<'_>], tracker: &Tracker) -> Option<usize> {
    let after_last = tracker
        .last_koan_id()
        .and_then(|id| entries.iter().position(|e| e.koan.id == id))
        .map_or(0, |i| i + 1);
    (after_last..entries.len())
        .chain(0..after_last)
        .find(|&i| !tracker.is_completed(&entries[i].koan.id))
}
