use anyhow::Context;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::NewsletterDocumentData;

/// A template's unique name, safe to use as a file stem.
#[derive(Debug, Clone)]
pub struct TemplateName(String);

impl TemplateName {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("Invalid template name: cannot be empty.".to_string());
        }

        let grapheme_count = trimmed.graphemes(true).count();
        if grapheme_count > 100 {
            return Err("Invalid template name: cannot be longer than 100 characters.".to_string());
        }

        // Names become file stems; reject anything that could escape the
        // store directory or confuse the filesystem.
        let forbidden = ['/', '\\', '\0'];
        if trimmed.chars().any(|c| forbidden.contains(&c) || c.is_control()) {
            return Err("Invalid template name: contains forbidden characters.".to_string());
        }
        if trimmed.starts_with('.') {
            return Err("Invalid template name: cannot start with a dot.".to_string());
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for TemplateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for TemplateName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// File-backed template store: one JSON document per template, upsert by
/// unique name. Small files, so I/O happens directly in the handlers.
#[derive(Debug)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, anyhow::Error> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create template directory {}", root.display()))?;
        Ok(Self { root })
    }

    #[tracing::instrument(skip(self, document))]
    pub fn save(
        &self,
        name: &TemplateName,
        document: &NewsletterDocumentData,
    ) -> Result<(), anyhow::Error> {
        let serialized = serde_json::to_vec_pretty(document)
            .context("Failed to serialize the template record")?;
        fs::write(self.path_for(name), serialized)
            .with_context(|| format!("Failed to write template '{name}'"))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn list_names(&self) -> Result<Vec<String>, anyhow::Error> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read template directory {}", self.root.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read template directory entry")?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    #[tracing::instrument(skip(self))]
    pub fn load(
        &self,
        name: &TemplateName,
    ) -> Result<Option<NewsletterDocumentData>, anyhow::Error> {
        let path = self.path_for(name);
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read template '{name}'"));
            }
        };

        let document = serde_json::from_slice(&contents)
            .with_context(|| format!("Failed to deserialize template '{name}'"))?;
        Ok(Some(document))
    }

    #[tracing::instrument(skip(self))]
    pub fn delete(&self, name: &TemplateName) -> Result<bool, anyhow::Error> {
        match fs::remove_file(self.path_for(name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Failed to delete template '{name}'")),
        }
    }

    fn path_for(&self, name: &TemplateName) -> PathBuf {
        Path::new(&self.root).join(format!("{name}.json"))
    }
}
