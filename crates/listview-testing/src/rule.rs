use listview_core::{
    ListView, ListViewConfig, Rect, RowDequeue, RowIndex, SectionDimensions, WidgetId,
};

use crate::assertions::assert_host_matches_list;
use crate::host::{HostError, TestHost};
use crate::rows::TestRow;

/// Headless harness pairing a [`ListView`] with a [`TestHost`].
///
/// Every [`layout`](Self::layout) drains the list's placement commands into
/// the host, so tests observe the tree a real host would end up with.
pub struct ListViewTestRule {
    list: ListView<TestRow>,
    host: TestHost,
}

impl ListViewTestRule {
    /// Create a rule whose viewport is `width` by `height` at the origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(ListViewConfig {
            bounds: Rect::new(0.0, 0.0, width, height),
            ..Default::default()
        })
    }

    /// # Panics
    /// If `config` is rejected by [`ListView::new`].
    pub fn with_config(config: ListViewConfig) -> Self {
        let list = match ListView::new(config) {
            Ok(list) => list,
            Err(err) => panic!("invalid list config: {err}"),
        };
        Self {
            list,
            host: TestHost::new(),
        }
    }

    /// Reload content and run a layout pass.
    pub fn set_content<F>(
        &mut self,
        sections: impl Into<SectionDimensions>,
        factory: F,
    ) -> Result<(), HostError>
    where
        F: FnMut(RowIndex, &mut RowDequeue<'_, TestRow>) -> WidgetId + 'static,
    {
        self.list.reload(sections, factory);
        self.layout()
    }

    /// Run a pending layout pass and apply its commands to the host.
    pub fn layout(&mut self) -> Result<(), HostError> {
        self.list.layout_if_needed();
        self.host.apply_all(self.list.drain_commands())
    }

    pub fn scroll_to(&mut self, offset: f32) -> Result<(), HostError> {
        self.list.set_content_offset(offset);
        self.layout()
    }

    pub fn scroll_by(&mut self, delta: f32) -> Result<(), HostError> {
        self.list.scroll_by(delta);
        self.layout()
    }

    /// Texts of the rows the host currently shows, top to bottom.
    pub fn visible_texts(&self) -> Vec<String> {
        self.host
            .visible_nodes()
            .into_iter()
            .filter_map(|(id, _)| self.list.widget(id).map(|row| row.text.clone()))
            .collect()
    }

    /// Check list invariants and host consistency.
    pub fn assert_consistent(&self) {
        self.list.check_invariants();
        assert_host_matches_list(&self.host, &self.list);
    }

    pub fn list(&self) -> &ListView<TestRow> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView<TestRow> {
        &mut self.list
    }

    pub fn host(&self) -> &TestHost {
        &self.host
    }
}
