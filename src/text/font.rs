use std::sync::Arc;

use crate::foundation::error::{ProcError, ProcResult};

/// Handle to a font loaded with `Proc::load_font`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontId(pub(crate) usize);

/// Font bytes plus the family name they registered under.
#[derive(Debug)]
pub(crate) struct LoadedFont {
    pub(crate) id: FontId,
    pub(crate) family: String,
    pub(crate) bytes: Arc<Vec<u8>>,
}

/// Fonts known to one `Proc`.
///
/// Each font is parsed once on load so bad bytes fail at the call that supplied them.
pub(crate) struct FontBook {
    font_ctx: Option<parley::FontContext>,
    fonts: Vec<Arc<LoadedFont>>,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("fonts", &self.len())
            .finish()
    }
}

impl FontBook {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: None,
            fonts: Vec::new(),
        }
    }

    pub(crate) fn load(&mut self, bytes: Vec<u8>) -> ProcResult<FontId> {
        let bytes = Arc::new(bytes);
        let font_ctx = self.font_ctx.get_or_insert_with(parley::FontContext::default);
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.as_ref().clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ProcError::config("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ProcError::config("registered font family has no name"))?
            .to_string();

        let id = FontId(self.fonts.len());
        tracing::debug!(font = id.0, %family, "loaded font");
        self.fonts.push(Arc::new(LoadedFont { id, family, bytes }));
        Ok(id)
    }

    /// The requested font, or the first loaded one.
    pub(crate) fn resolve(&self, id: Option<FontId>) -> Option<Arc<LoadedFont>> {
        match id {
            Some(id) => self.fonts.get(id.0).cloned(),
            None => self.fonts.first().cloned(),
        }
    }

    pub(crate) fn contains(&self, id: FontId) -> bool {
        id.0 < self.fonts.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.fonts.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
