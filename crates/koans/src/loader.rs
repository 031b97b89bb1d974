use std::path::{Path, PathBuf};

use ck_domain::error::{Error, Result};
use ck_domain::trace::TraceEvent;

use crate::types::Lesson;
use crate::validate::validate_lesson;

/// Load and validate a single lesson file.
pub fn load_lesson(path: &Path) -> Result<Lesson> {
    let content = std::fs::read_to_string(path)?;
    let mut lesson: Lesson = serde_yaml::from_str(&content)?;
    lesson.filename = path.display().to_string();

    validate_lesson(&lesson).map_err(|issue| Error::InvalidLesson {
        path: lesson.filename.clone(),
        reason: issue.to_string(),
    })?;
    Ok(lesson)
}

/// List `*.yaml` files in `dir`, skipping names in `exclude`, sorted by name.
///
/// Lesson order follows file names, so `01-basics.yaml` comes before
/// `02-ranges.yaml`.
pub fn lesson_files(dir: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("yaml") {
            continue;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if exclude.iter().any(|x| *x == name) {
            TraceEvent::LessonSkipped {
                filename: name,
                reason: "excluded".into(),
            }
            .emit();
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Load every lesson in `dir`. The first invalid file aborts the load.
pub fn load_all_lessons(dir: &Path, exclude: &[String]) -> Result<Vec<Lesson>> {
    let files = lesson_files(dir, exclude)?;
    if files.is_empty() {
        return Err(Error::NoLessons(dir.display().to_string()));
    }

    let lessons = files
        .iter()
        .map(|path| {
            tracing::debug!(path = %path.display(), "loading lesson");
            load_lesson(path)
        })
        .collect::<Result<Vec<_>>>()?;

    TraceEvent::LessonsLoaded {
        dir: dir.display().to_string(),
        lessons: lessons.len(),
        koans: lessons.iter().map(|l| l.koans.len()).sum(),
    }
    .emit();
    Ok(lessons)
}
