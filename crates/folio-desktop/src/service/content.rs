//! Tagged window payloads

use serde::{Deserialize, Serialize};
use crate::math::Size;

/// Glyph shown for an icon, either an image asset or an emoji
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum IconGlyph {
    Image(String),
    Emoji(String),
}

/// Volume levels shared between a music maker and its mixer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixerLevels {
    pub drums: f32,
    pub synth: f32,
}

impl Default for MixerLevels {
    fn default() -> Self {
        Self { drums: 0.7, synth: 0.7 }
    }
}

impl MixerLevels {
    /// Create levels, clamping each channel into `0.0..=1.0`
    pub fn new(drums: f32, synth: f32) -> Self {
        Self {
            drums: clamp_level(drums),
            synth: clamp_level(synth),
        }
    }
}

fn clamp_level(level: f32) -> f32 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}

/// A file shown inside a folder window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderEntry {
    pub id: String,
    pub name: String,
    pub glyph: String,
    /// Location of the document when the entry opens in the PDF viewer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_path: Option<String>,
}

/// What a window displays
///
/// The window manager carries this payload and never interprets it beyond
/// picking a default size and wiring up mixer sub-windows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WindowContent {
    /// File listing
    Folder { files: Vec<FolderEntry> },
    /// Embedded PDF document
    Pdf { path: String },
    /// Retro web browser frame
    Browser {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    /// Step sequencer that can spawn a mixer
    MusicMaker { levels: MixerLevels },
    /// Mixer panel owned by a music maker
    Mixer { levels: MixerLevels },
    /// Contact mail form
    ContactForm,
    /// Record collection backed by the collection proxy
    RecordCollection,
    /// SEO analyzer front-end
    SeoChecker,
    /// Wallpaper and colour settings
    DisplayProperties,
    /// Static text page
    Page {
        description: String,
        #[serde(default)]
        features: Vec<String>,
    },
}

impl WindowContent {
    /// Renderer tag for the host
    pub fn kind(&self) -> &'static str {
        match self {
            WindowContent::Folder { .. } => "folder",
            WindowContent::Pdf { .. } => "pdf",
            WindowContent::Browser { .. } => "browser",
            WindowContent::MusicMaker { .. } => "music-maker",
            WindowContent::Mixer { .. } => "mixer",
            WindowContent::ContactForm => "contact-form",
            WindowContent::RecordCollection => "record-collection",
            WindowContent::SeoChecker => "seo-checker",
            WindowContent::DisplayProperties => "display-properties",
            WindowContent::Page { .. } => "page",
        }
    }

    /// Initial window size for this kind of content
    pub fn default_size(&self) -> Size {
        match self {
            WindowContent::Pdf { .. } => Size::new(800.0, 600.0),
            WindowContent::Browser { .. } => Size::new(900.0, 700.0),
            WindowContent::Folder { .. } => Size::new(600.0, 500.0),
            WindowContent::MusicMaker { .. } => Size::new(800.0, 600.0),
            WindowContent::Mixer { .. } => Size::new(300.0, 350.0),
            _ => Size::new(500.0, 400.0),
        }
    }

    /// Mixer levels carried by a music maker or mixer
    pub fn mixer_levels(&self) -> Option<MixerLevels> {
        match self {
            WindowContent::MusicMaker { levels } | WindowContent::Mixer { levels } => Some(*levels),
            _ => None,
        }
    }

    /// Replace the mixer levels, if this content has any
    pub fn set_mixer_levels(&mut self, new_levels: MixerLevels) -> bool {
        match self {
            WindowContent::MusicMaker { levels } | WindowContent::Mixer { levels } => {
                *levels = new_levels;
                true
            }
            _ => false,
        }
    }
}
