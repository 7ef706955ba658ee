use crate::catalog::{Category, FileEntry, Platform};
use crate::style::CategoryStyle;

pub struct CategoryBuilder {
    category: Category,
}

impl CategoryBuilder {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            category: Category {
                id: id.to_string(),
                label: String::new(),
                style: CategoryStyle::default(),
                files: Vec::new(),
            },
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.category.label = label.to_string();
        self
    }

    pub fn style(mut self, style: CategoryStyle) -> Self {
        self.category.style = style;
        self
    }

    pub fn file(mut self, file: FileEntry) -> Self {
        self.category.files.push(file);
        self
    }

    pub fn build(self) -> Category {
        self.category
    }
}

pub struct FileBuilder {
    file: FileEntry,
}

impl FileBuilder {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            file: FileEntry {
                id: id.to_string(),
                name: String::new(),
                extension: String::new(),
                platform: Platform::Acc,
                summary: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.file.name = name.to_string();
        self
    }

    pub fn extension(mut self, extension: &str) -> Self {
        self.file.extension = extension.to_string();
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.file.platform = platform;
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.file.summary = Some(summary.to_string());
        self
    }

    pub fn build(self) -> FileEntry {
        self.file
    }
}
