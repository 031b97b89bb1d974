use std::path::{Path, PathBuf};

use ck_cron::ValidationError;
use ck_domain::error::Result;

use crate::loader;
use crate::types::{Koan, Lesson};

/// Outcome of re-validating one koan's completed expression.
#[derive(Debug, Clone)]
pub struct KoanCheck {
    pub koan_id: String,
    pub expression: String,
    pub error: Option<ValidationError>,
}

impl KoanCheck {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// All loaded lessons, in file order.
pub struct Catalog {
    lessons: Vec<Lesson>,
    dir: PathBuf,
}

impl Catalog {
    pub fn load(dir: &Path, exclude: &[String]) -> Result<Self> {
        let lessons = loader::load_all_lessons(dir, exclude)?;
        let catalog = Self {
            lessons,
            dir: dir.to_path_buf(),
        };
        tracing::info!(
            lessons = catalog.lessons.len(),
            koans = catalog.total_koans(),
            "lesson catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_lessons(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons,
            dir: PathBuf::new(),
        }
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every koan, flattened across lessons.
    pub fn all_koans(&self) -> Vec<&Koan> {
        self.lessons.iter().flat_map(|l| l.koans.iter()).collect()
    }

    pub fn find(&self, id: &str) -> Option<&Koan> {
        self.lessons
            .iter()
            .flat_map(|l| l.koans.iter())
            .find(|k| k.id == id)
    }

    pub fn total_koans(&self) -> usize {
        self.lessons.iter().map(|l| l.koans.len()).sum()
    }

    /// Validate every koan's completed expression.
    pub fn check_all(&self) -> Vec<KoanCheck> {
        self.all_koans()
            .into_iter()
            .map(|k| {
                let expression = k.complete_expression();
                let error = ck_cron::validate(&expression).err();
                KoanCheck {
                    koan_id: k.id.clone(),
                    expression,
                    error,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn koan(id: &str, incomplete: &str, answer: &str) -> Koan {
        Koan {
            id: id.into(),
            incomplete: incomplete.into(),
            answer: answer.into(),
            ..Koan::default()
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_lessons(vec![
            Lesson {
                title: "One".into(),
                koans: vec![koan("a", "__ * * * *", "0"), koan("b", "0 __ * * *", "12")],
                ..Lesson::default()
            },
            Lesson {
                title: "Two".into(),
                koans: vec![koan("c", "* * * * __", "9")],
                ..Lesson::default()
            },
        ])
    }

    #[test]
    fn flattens_in_lesson_order() {
        let c = catalog();
        let ids: Vec<&str> = c.all_koans().iter().map(|k| k.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(c.total_koans(), 3);
    }

    #[test]
    fn find_by_id() {
        let c = catalog();
        assert_eq!(c.find("c").map(|k| k.answer.as_str()), Some("9"));
        assert!(c.find("zzz").is_none());
    }

    #[test]
    fn check_all_reports_each_koan() {
        let checks = catalog().check_all();
        assert_eq!(checks.len(), 3);
        assert!(checks[0].passed());
        assert!(checks[1].passed());
        assert!(!checks[2].passed());
        assert_eq!(checks[2].expression, "* * * * 9");
        assert_eq!(checks[2].error.as_ref().and_then(|e| e.field_name()), Some("weekday"));
    }
}
