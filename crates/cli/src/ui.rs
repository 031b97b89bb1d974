//! Terminal rendering. Everything the learner reads goes to stdout; logs
//! stay on stderr.

use ck_koans::{Koan, KoanCheck, Lesson};
use ck_progress::{Stats, Tracker};

const RESET: &str = "\x1B[0m";
const BOLD: &str = "\x1B[1m";
const DIM: &str = "\x1B[2m";
const RED: &str = "\x1B[31m";
const GREEN: &str = "\x1B[32m";
const YELLOW: &str = "\x1B[33m";
const BLUE: &str = "\x1B[34m";
const CYAN: &str = "\x1B[36m";

const RULE: &str = "────────────────────────────────────────────────────────────";

pub fn success(message: &str) {
    println!("{GREEN}✓ {message}{RESET}");
}

pub fn error(message: &str) {
    println!("{RED}✗ {message}{RESET}");
}

pub fn warning(message: &str) {
    println!("{YELLOW}! {message}{RESET}");
}

pub fn info(message: &str) {
    println!("{BLUE}{message}{RESET}");
}

pub fn welcome() {
    println!("{BOLD}{CYAN}Cron Koans{RESET}");
    println!("{DIM}Learn crontab syntax one blank at a time.{RESET}");
    println!();
    println!("Fill in the {BOLD}__{RESET} in each expression.");
    println!("Commands: {BOLD}hint{RESET} (h), {BOLD}skip{RESET}, {BOLD}quit{RESET} (exit)");
    println!();
}

/// Header plus question for the koan at `number` of `total` (1-based).
pub fn koan(koan: &Koan, lesson: &str, number: usize, total: usize) {
    println!("{DIM}{RULE}{RESET}");
    println!("{CYAN}{lesson}{RESET}  {DIM}koan {number}/{total} · {}{RESET}", koan.id);
    println!();
    println!("{BOLD}{}{RESET}", koan.description);
    println!("{}", koan.question);
    println!();
    println!("    {YELLOW}{}{RESET}", koan.incomplete);
    println!();
}

/// `level` is 0-based.
pub fn hint(text: &str, level: usize, available: usize) {
    println!("{YELLOW}Hint {}/{available}: {text}{RESET}", level + 1);
}

pub fn incorrect() {
    println!("{RED}Not quite. Try again.{RESET}");
}

pub fn correct(koan: &Koan, expression: &str, description: &str) {
    println!();
    success("Correct!");
    println!("    {GREEN}{expression}{RESET}");
    println!("    {DIM}{description}{RESET}");
    if !koan.explanation.is_empty() {
        println!();
        println!("{}", koan.explanation.trim_end());
    }
    println!();
}

pub fn progress(stats: &Stats) {
    println!("{BOLD}Progress{RESET}");
    println!(
        "  Completed:  {}/{} ({:.1}%)",
        stats.completed_koans, stats.total_koans, stats.percent_complete
    );
    println!("  Remaining:  {}", stats.remaining_koans);
    println!("  Attempts:   {}", stats.total_attempts);
    println!("  Hints used: {}", stats.total_hints_used);
    println!("  Started:    {}", stats.started_at.format("%Y-%m-%d %H:%M"));
    println!("  Updated:    {}", stats.updated_at.format("%Y-%m-%d %H:%M"));
}

pub fn completion(stats: &Stats) {
    println!();
    println!("{BOLD}{GREEN}All {} koans complete.{RESET}", stats.total_koans);
    println!(
        "  {} attempts, {} hints. The crontab holds no more secrets.",
        stats.total_attempts, stats.total_hints_used
    );
}

pub fn lesson_list(lessons: &[Lesson], tracker: &Tracker) {
    for (i, lesson) in lessons.iter().enumerate() {
        let done = lesson
            .koans
            .iter()
            .filter(|k| tracker.is_completed(&k.id))
            .count();
        let mark = if done == lesson.koans.len() {
            format!("{GREEN}✓{RESET}")
        } else {
            " ".to_string()
        };
        println!(
            "{mark} {}. {BOLD}{}{RESET} {DIM}({done}/{}){RESET}",
            i + 1,
            lesson.title,
            lesson.koans.len()
        );
        if !lesson.description.is_empty() {
            println!("     {DIM}{}{RESET}", lesson.description.trim());
        }
    }
}

pub fn validation_results(checks: &[KoanCheck]) {
    let mut passed = 0;
    for check in checks {
        match &check.error {
            None => {
                passed += 1;
                println!("{GREEN}✓{RESET} {:<24} {DIM}{}{RESET}", check.koan_id, check.expression);
            }
            Some(e) => println!("{RED}✗{RESET} {:<24} {}: {e}", check.koan_id, check.expression),
        }
    }
    println!();
    println!("{passed}/{} koans valid", checks.len());
}
