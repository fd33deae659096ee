use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a temporary project directory
pub struct TempProject {
    pub dir: TempDir,
}

impl TempProject {
    /// Create a new temporary project
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        Self { dir }
    }

    /// Get the path to the project directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file in the project with the given content
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let file_path = self.dir.path().join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Get the absolute path to a file in the project
    pub fn file_path(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A Dependencies.kt with a shared version placeholder and literal constants
pub fn sample_dependencies_kt() -> &'static str {
    r#"object Dependencies {
    const val desugar = "com.android.tools:desugar_jdk_libs:1.1.5"

    object ComposeMaterialDialogs {
        const val version = "0.5.1"

        const val core = "io.github.vanpra.compose-material-dialogs:core:$version"
        const val datetime = "io.github.vanpra.compose-material-dialogs:datetime:$version"
    }

    object Kotlin {
        private const val version = "1.5.30"
        const val stdlib = "org.jetbrains.kotlin:kotlin-stdlib-jdk8:$version"
    }
}
"#
}

/// A Dependencies.kt with no dependency constants at all
pub fn sample_constant_free_kt() -> &'static str {
    r#"object Dependencies {
    object Empty {
        const val version = "1.4.0"
    }
    // nothing declared yet
}
"#
}

/// Create a TempProject holding the sample dependency file
pub fn create_temp_project_with_dependencies() -> TempProject {
    let project = TempProject::new();
    project.create_file("Dependencies.kt", sample_dependencies_kt());
    project
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_project_creation() {
        let project = TempProject::new();
        assert!(project.path().exists());
        assert!(project.path().is_dir());
    }

    #[test]
    fn test_create_file() {
        let project = TempProject::new();
        project.create_file("test.txt", "hello world");

        let file_path = project.file_path("test.txt");
        assert!(file_path.exists());

        let content = fs::read_to_string(file_path).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_sample_fixtures_are_valid() {
        assert!(sample_dependencies_kt().contains("$version"));
        assert!(!sample_constant_free_kt().contains("const val core"));
    }
}
