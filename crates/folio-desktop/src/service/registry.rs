//! Ordered service registry

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, Result};
use crate::math::Size;
use super::{FolderEntry, IconGlyph, MixerLevels, WindowContent};

/// Resize floor for services that don't specify one
pub const DEFAULT_MIN_SIZE: Size = Size::new(200.0, 150.0);

/// A launchable service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    /// Stable id, also used as the desktop icon id
    pub id: String,
    /// Icon label and window title
    pub title: String,
    pub icon: IconGlyph,
    pub content: WindowContent,
    /// Size a freshly opened window asks for
    pub default_size: Size,
    /// Smallest size a resize may produce
    pub min_size: Size,
}

impl ServiceDescriptor {
    /// Create a descriptor sized from its content kind
    pub fn new(id: &str, title: &str, icon: IconGlyph, content: WindowContent) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            icon,
            default_size: content.default_size(),
            min_size: DEFAULT_MIN_SIZE,
            content,
        }
    }

    /// Override the resize floor
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    /// Override the initial size
    pub fn with_default_size(mut self, default_size: Size) -> Self {
        self.default_size = default_size;
        self
    }

    /// Descriptor for a PDF opened from a folder entry
    ///
    /// The id is derived from the entry so reopening the same file reuses
    /// its window.
    pub fn for_pdf_entry(entry: &FolderEntry, path: &str) -> Self {
        Self::new(
            &format!("pdf-{}", entry.id),
            &entry.name,
            IconGlyph::Emoji(entry.glyph.clone()),
            WindowContent::Pdf { path: path.to_string() },
        )
    }
}

/// Ordered, id-indexed list of services
#[derive(Clone, Debug, Default)]
pub struct ServiceRegistry {
    services: Vec<ServiceDescriptor>,
    index: HashMap<String, usize>,
}

impl ServiceRegistry {
    /// Build a registry, rejecting duplicate ids
    pub fn new(services: Vec<ServiceDescriptor>) -> Result<Self> {
        let mut index = HashMap::with_capacity(services.len());
        for (position, service) in services.iter().enumerate() {
            if index.insert(service.id.clone(), position).is_some() {
                return Err(DesktopError::DuplicateService(service.id.clone()));
            }
        }
        Ok(Self { services, index })
    }

    /// Look up a service by id
    pub fn get(&self, id: &str) -> Option<&ServiceDescriptor> {
        self.index.get(id).map(|&position| &self.services[position])
    }

    /// Services in registry order
    pub fn iter(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.services.iter()
    }

    /// Number of services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry has no services
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// The services shipped with the portfolio desktop
    pub fn portfolio() -> Self {
        let cv = FolderEntry {
            id: "cv".to_string(),
            name: "CV.pdf".to_string(),
            glyph: "📄".to_string(),
            pdf_path: Some("assets/CV.pdf".to_string()),
        };

        let services = vec![
            ServiceDescriptor::new(
                "personal-documents",
                "Personal Documents",
                IconGlyph::Image("assets/FolderIcon.png".to_string()),
                WindowContent::Folder { files: vec![cv] },
            ),
            ServiceDescriptor::new(
                "browser",
                "Internet Explorer",
                IconGlyph::Image("assets/BrowserIcon.webp".to_string()),
                WindowContent::Browser { url: None },
            )
            .with_min_size(Size::new(320.0, 240.0)),
            ServiceDescriptor::new(
                "music-maker",
                "Music Maker",
                IconGlyph::Emoji("🎶".to_string()),
                WindowContent::MusicMaker { levels: MixerLevels::default() },
            )
            .with_min_size(Size::new(400.0, 300.0)),
            ServiceDescriptor::new(
                "contact",
                "Contact Me",
                IconGlyph::Emoji("✉️".to_string()),
                WindowContent::ContactForm,
            ),
            ServiceDescriptor::new(
                "record-collection",
                "Record Collection",
                IconGlyph::Emoji("💿".to_string()),
                WindowContent::RecordCollection,
            ),
            ServiceDescriptor::new(
                "seo-checker",
                "SEO & GEO Checker",
                IconGlyph::Emoji("🔍".to_string()),
                WindowContent::SeoChecker,
            ),
            ServiceDescriptor::new(
                "display-properties",
                "Display Properties",
                IconGlyph::Emoji("🖥️".to_string()),
                WindowContent::DisplayProperties,
            ),
        ];

        // Ids above are distinct, so indexing cannot collide.
        let index = services
            .iter()
            .enumerate()
            .map(|(position, service)| (service.id.clone(), position))
            .collect();
        Self { services, index }
    }
}
