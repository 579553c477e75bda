use crate::catalog::category::Category;
use crate::catalog::model::CatalogEntry;
use crate::foundation::error::LoopreelResult;
use crate::library::Library;
use crate::playback::PlaybackContext;
use crate::playback::clock::PlayState;
use crate::viewer::viewer::Viewer;

/// Key selected when a gallery opens without an explicit choice.
pub const DEFAULT_KEY: &str = "indexing";

/// Browsing state over a [`Library`]: one selected key, one optional category filter and the
/// single [`Viewer`] showing the selection.
///
/// The filter only narrows what is listed. It never moves the selection, so the selected entry
/// keeps playing even while it is filtered out of view.
pub struct Gallery<'a> {
    library: &'a Library,
    ctx: PlaybackContext,
    filter: Option<Category>,
    viewer: Viewer,
}

impl<'a> Gallery<'a> {
    pub fn new(library: &'a Library, ctx: PlaybackContext) -> LoopreelResult<Self> {
        Self::with_selection(library, ctx, DEFAULT_KEY)
    }

    pub fn with_selection(
        library: &'a Library,
        ctx: PlaybackContext,
        key: &str,
    ) -> LoopreelResult<Self> {
        let viewer = Viewer::mount(library, key, &ctx)?;
        Ok(Self {
            library,
            ctx,
            filter: None,
            viewer,
        })
    }

    pub fn library(&self) -> &'a Library {
        self.library
    }

    pub fn context(&self) -> &PlaybackContext {
        &self.ctx
    }

    pub fn selected_key(&self) -> &str {
        self.viewer.key()
    }

    pub fn filter(&self) -> Option<Category> {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Option<Category>) {
        if self.filter != filter {
            tracing::debug!(filter = ?filter, "filter changed");
            self.filter = filter;
        }
    }

    /// Filter on `category`, or clear the filter when it is already active.
    pub fn toggle_category(&mut self, category: Category) {
        if self.filter == Some(category) {
            self.set_filter(None);
        } else {
            self.set_filter(Some(category));
        }
    }

    /// Step the filter through `all` and every category in declaration order.
    pub fn cycle_filter(&mut self, forward: bool) {
        let next = if forward {
            Category::next_filter(self.filter)
        } else {
            Category::prev_filter(self.filter)
        };
        self.set_filter(next);
    }

    /// Entries passing the current filter, in catalog order.
    pub fn visible_entries(&self) -> Vec<&'a CatalogEntry> {
        self.library.catalog().list_filtered(self.filter)
    }

    /// Position of the selection within [`Gallery::visible_entries`], if it is listed.
    pub fn visible_position(&self) -> Option<usize> {
        let key = self.selected_key();
        self.visible_entries().iter().position(|e| e.key == key)
    }

    /// Select `key` and show it from a fresh cycle.
    ///
    /// Unknown keys fail with [`crate::LoopreelError::UnknownCatalogKey`] and leave the current
    /// viewer untouched. Selecting the key already shown is a no-op.
    pub fn select(&mut self, key: &str) -> LoopreelResult<()> {
        if key == self.selected_key() {
            return Ok(());
        }
        let viewer = Viewer::mount(self.library, key, &self.ctx)?;
        tracing::info!(from = self.selected_key(), to = key, "selection changed");
        self.viewer = viewer;
        Ok(())
    }

    /// Move the selection `delta` places through the visible list, wrapping at both ends.
    /// A selection that is filtered out jumps to the first (or last) visible entry.
    pub fn select_relative(&mut self, delta: isize) -> LoopreelResult<()> {
        let visible = self.visible_entries();
        if visible.is_empty() {
            return Ok(());
        }
        let len = visible.len() as isize;
        let target = match self.visible_position() {
            Some(pos) => (pos as isize + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        };
        let key = visible[target as usize].key.clone();
        self.select(&key)
    }

    pub fn select_next(&mut self) -> LoopreelResult<()> {
        self.select_relative(1)
    }

    pub fn select_prev(&mut self) -> LoopreelResult<()> {
        self.select_relative(-1)
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut Viewer {
        &mut self.viewer
    }

    pub fn toggle_play_pause(&mut self) -> PlayState {
        self.viewer.toggle_play_pause()
    }

    pub fn restart(&mut self) {
        self.viewer.restart();
    }

    /// Fire every tick due now and let the viewer re-render. Returns whether it did.
    pub fn pump(&mut self) -> bool {
        let fired = self.ctx.scheduler().poll(self.ctx.now());
        self.viewer.on_ticks(&fired)
    }
}

impl std::fmt::Debug for Gallery<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("filter", &self.filter)
            .field("viewer", &self.viewer)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/shell.rs"]
mod tests;
