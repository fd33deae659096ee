use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Version token meaning "use the shared `version` declaration".
pub const VERSION_PLACEHOLDER: &str = "$version";

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"version = "(.*)""#).expect("hardcoded regex must compile"));

static CONST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"const val ([^=]*) = "(.*)""#).expect("hardcoded regex must compile")
});

/// Classification of one line of the dependency file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `version = "<value>"` — the shared version declaration
    Version { value: String },
    /// `const val <NAME> = "<group>:<artifact>:<version>"`
    Constant {
        name: String,
        group: String,
        artifact: String,
        version: String,
    },
    /// Anything else, emitted verbatim
    Passthrough,
}

/// One line of the dependency file with its original position
#[derive(Debug, Clone)]
pub struct DependencyLine {
    /// 0-based position in the file, stable until rewrite
    pub index: usize,
    /// Original line text (for rewriting)
    pub raw: String,
    pub kind: LineKind,
}

impl DependencyLine {
    /// True for constants whose version token is the shared placeholder
    pub fn uses_placeholder(&self) -> bool {
        matches!(&self.kind, LineKind::Constant { version, .. } if version == VERSION_PLACEHOLDER)
    }
}

/// Classify every line of the file. Pure; each input line maps 1:1 to a
/// `DependencyLine` in original order — nothing is filtered out.
pub fn parse(text: &str) -> Vec<DependencyLine> {
    text.lines()
        .enumerate()
        .map(|(index, line)| DependencyLine {
            index,
            raw: line.to_string(),
            kind: classify(line),
        })
        .collect()
}

fn classify(line: &str) -> LineKind {
    // Checked first: `const val version = "..."` is a version declaration,
    // not a dependency constant.
    if let Some(caps) = VERSION_PATTERN.captures(line) {
        return LineKind::Version {
            value: caps[1].to_string(),
        };
    }

    if let Some(caps) = CONST_PATTERN.captures(line) {
        let segments: Vec<&str> = caps[2].split(':').collect();
        // Anything that is not exactly group:artifact:version is left alone
        // rather than risking corruption of unrelated content.
        if let [group, artifact, version] = segments[..] {
            return LineKind::Constant {
                name: caps[1].to_string(),
                group: group.to_string(),
                artifact: artifact.to_string(),
                version: version.to_string(),
            };
        }
    }

    LineKind::Passthrough
}

/// Substitute a new value into the `version = "..."` portion of a raw line,
/// leaving surrounding text (indentation, `const val` prefix) intact.
pub fn replace_version_value(raw: &str, value: &str) -> String {
    let replacement = format!("version = \"{value}\"");
    VERSION_PATTERN
        .replace(raw, NoExpand(&replacement))
        .into_owned()
}

/// The dependency file: classified lines plus enough of the original
/// formatting to write it back faithfully.
#[derive(Debug)]
pub struct DepFile {
    path: PathBuf,
    pub lines: Vec<DependencyLine>,
    trailing_newline: bool,
}

impl DepFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dependency file: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            lines: parse(&text),
            trailing_newline: text.ends_with('\n'),
        })
    }

    /// Join rewritten lines back into file text, restoring the original
    /// trailing-newline convention.
    pub fn render(&self, rewritten: &[String]) -> String {
        let mut text = rewritten.join("\n");
        if self.trailing_newline {
            text.push('\n');
        }
        text
    }

    /// Overwrite the file in full. Callers only reach this once the entire
    /// rewritten sequence has been computed, so a failure here leaves the
    /// original contents untouched.
    pub fn store(&self, rewritten: &[String]) -> Result<()> {
        fs::write(&self.path, self.render(rewritten))
            .with_context(|| format!("Failed to write dependency file: {}", self.path.display()))
    }
}
