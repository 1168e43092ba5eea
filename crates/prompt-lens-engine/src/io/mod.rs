use crate::models::{Category, PromptFile};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid prompts directory: {0}")]
    InvalidPromptsDir(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
}

/// List the prompt files of a category, sorted by name.
///
/// Only regular files directly inside the category folder are returned. A
/// category whose folder does not exist simply has no files.
pub fn list_files(prompts_root: &Path, category: &Category) -> Result<Vec<PromptFile>, IoError> {
    let folder = prompts_root.join(&category.folder);
    if !folder.is_dir() {
        log::debug!(
            "category '{}' has no folder at {}",
            category.slug,
            folder.display()
        );
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(&folder)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => log::warn!("skipping non UTF-8 file name {raw:?} in {}", folder.display()),
        }
    }
    names.sort();

    log::debug!("found {} files for category '{}'", names.len(), category.slug);
    Ok(names
        .into_iter()
        .map(|name| PromptFile::new(&category.folder, name))
        .collect())
}

/// Read a prompt file of a category by name and return its content
pub fn read_file(prompts_root: &Path, category: &Category, name: &str) -> Result<String, IoError> {
    validate_file_name(name)?;
    let absolute_path = prompts_root.join(&category.folder).join(name);
    if !absolute_path.is_file() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

pub fn validate_prompts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidPromptsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// File names are looked up inside a single folder and may not leave it.
fn validate_file_name(name: &str) -> Result<(), IoError> {
    let escapes = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');
    if escapes {
        return Err(IoError::InvalidFileName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_prompts_dir, test_category};

    #[test]
    fn test_list_files_sorted() {
        // Given a category folder with prompt files
        let prompts_dir = create_test_prompts_dir();
        let category = test_category();
        create_test_file(&prompts_dir, &category, "b prompt.txt", "B");
        create_test_file(&prompts_dir, &category, "a tools.json", "{}");

        // When listing the category
        let files = list_files(prompts_dir.path(), &category).unwrap();

        // Then they come back sorted by name
        let names: Vec<&str> = files.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["a tools.json", "b prompt.txt"]);
    }

    #[test]
    fn test_list_files_skips_directories() {
        let prompts_dir = create_test_prompts_dir();
        let category = test_category();
        create_test_file(&prompts_dir, &category, "Prompt.txt", "x");
        std::fs::create_dir(prompts_dir.path().join(&category.folder).join("nested")).unwrap();

        let files = list_files(prompts_dir.path(), &category).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name(), "Prompt.txt");
    }

    #[test]
    fn test_list_files_missing_folder_is_empty() {
        let prompts_dir = create_test_prompts_dir();
        let files = list_files(prompts_dir.path(), &test_category()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_read_file_success() {
        let prompts_dir = create_test_prompts_dir();
        let category = test_category();
        create_test_file(&prompts_dir, &category, "Prompt.txt", "<system>hi</system>");

        let content = read_file(prompts_dir.path(), &category, "Prompt.txt").unwrap();
        assert_eq!(content, "<system>hi</system>");
    }

    #[test]
    fn test_read_file_not_found() {
        let prompts_dir = create_test_prompts_dir();
        let result = read_file(prompts_dir.path(), &test_category(), "missing.txt");
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_file_rejects_path_escapes() {
        let prompts_dir = create_test_prompts_dir();
        let category = test_category();
        for name in ["../secret", "a/b", "..", "", "a\\b"] {
            let result = read_file(prompts_dir.path(), &category, name);
            assert!(
                matches!(result, Err(IoError::InvalidFileName(_))),
                "expected {name:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_validate_prompts_dir_exists() {
        let prompts_dir = create_test_prompts_dir();
        assert!(validate_prompts_dir(prompts_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_prompts_dir_not_exists() {
        let result = validate_prompts_dir(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(IoError::InvalidPromptsDir(_))));
    }
}
