//! The virtualized list engine.
//!
//! [`ListView`] keeps three maps consistent across layout passes:
//! - the [`GeometryTable`] (row → vertical span), rebuilt on every reload,
//! - the displayed set (row → widget) for rows intersecting the viewport,
//! - the [`RecyclingPool`] of hidden widgets waiting for reuse.
//!
//! Each [`layout`](ListView::layout) pass diffs the rows visible in the
//! current bounds against the displayed set, parks widgets of rows that left
//! the viewport, asks the row factory for widgets of rows that entered it and
//! records the resulting placement changes for the host.

use std::collections::BTreeMap;
use std::fmt;

use smallvec::SmallVec;

use crate::collections::HashMap;
use crate::config::ListViewConfig;
use crate::geometry_table::{GeometryTable, RowHeight, SectionDimensions};
use crate::placement::{PlacementCommand, PlacementLog};
use crate::pool::{RecyclingPool, RowKind, WidgetArena, WidgetId};
use crate::row_index::RowIndex;
use listview_geometry::{GeometryError, Interval, Point, Rect, Size};

/// Builds the widget for a row that just became visible.
///
/// The factory must obtain the widget through [`RowDequeue::dequeue`] and
/// return its id. It only sees the dequeue handle, never the list, so it
/// cannot trigger another layout pass while one is running.
pub type RowFactory<W> = Box<dyn FnMut(RowIndex, &mut RowDequeue<'_, W>) -> WidgetId>;

/// Inline capacity for per-pass row buffers. Typical viewports show a few
/// dozen fixed-height rows.
type RowBuffer<T> = SmallVec<[T; 32]>;

/// Where a row should land in the viewport after [`ListView::scroll_to_row`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollAlignment {
    #[default]
    Start,
    Center,
    End,
}

/// Counters describing the list's widget lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListViewStats {
    /// Rows currently displayed.
    pub rows_displayed: usize,
    /// Widgets parked in the recycling pool.
    pub widgets_pooled: usize,
    /// Widgets constructed since the list was created.
    pub widgets_created: usize,
    /// Dequeues served from the pool instead of constructing.
    pub reuse_count: usize,
    pub layout_passes: usize,
    pub reloads: usize,
}

/// Handle given to the row factory for obtaining widgets.
pub struct RowDequeue<'a, W> {
    pool: &'a mut RecyclingPool,
    arena: &'a mut WidgetArena<W>,
    log: &'a mut PlacementLog,
    dequeued: SmallVec<[WidgetId; 2]>,
}

impl<'a, W> RowDequeue<'a, W> {
    fn new(
        pool: &'a mut RecyclingPool,
        arena: &'a mut WidgetArena<W>,
        log: &'a mut PlacementLog,
    ) -> Self {
        Self {
            pool,
            arena,
            log,
            dequeued: SmallVec::new(),
        }
    }

    /// Returns a widget of exactly `kind`, recycled when one is pooled and
    /// freshly constructed otherwise.
    ///
    /// The widget still shows whatever content it had when it was pooled;
    /// the factory is responsible for configuring it for `index`.
    pub fn dequeue(&mut self, kind: &RowKind<W>, index: RowIndex) -> WidgetId {
        let acquired = self.pool.acquire(kind, self.arena);
        if acquired.created {
            self.log.push(PlacementCommand::Attach {
                widget: acquired.id,
                kind: kind.name(),
            });
        }
        log::trace!(
            "dequeued widget {} ('{}') for row {index}, created: {}",
            acquired.id,
            kind.name(),
            acquired.created
        );
        self.dequeued.push(acquired.id);
        acquired.id
    }

    /// Dequeues a widget and hands it to `configure` before returning its id.
    pub fn dequeue_with(
        &mut self,
        kind: &RowKind<W>,
        index: RowIndex,
        configure: impl FnOnce(&mut W),
    ) -> WidgetId {
        let id = self.dequeue(kind, index);
        configure(&mut self.arena.entry_mut(id).widget);
        id
    }

    /// Mutable access to a widget dequeued through this handle.
    ///
    /// Returns `None` for any other id, so a factory cannot reach widgets that
    /// are displayed for other rows.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut W> {
        if !self.dequeued.contains(&id) {
            return None;
        }
        self.arena.get_mut(id).map(|entry| &mut entry.widget)
    }

    /// Verifies the factory's result and returns unused dequeues to the pool.
    fn finish(self, index: RowIndex, returned: WidgetId) {
        assert!(
            self.dequeued.contains(&returned),
            "row factory for {index} returned widget {returned} which it did not dequeue"
        );
        for id in self.dequeued.iter().copied().filter(|id| *id != returned) {
            log::warn!(
                "row factory for {index} dequeued widget {id} without returning it; pooling it again"
            );
            let kind = self.arena.entry_mut(id).kind;
            self.pool.release(id, kind);
        }
    }
}

/// Virtualized, sectioned list of fixed-height rows.
pub struct ListView<W> {
    config: ListViewConfig,
    row_height: RowHeight,
    bounds: Rect,
    content_height: f32,
    sections: SectionDimensions,
    geometry: GeometryTable,
    displayed: BTreeMap<RowIndex, WidgetId>,
    rows_by_widget: HashMap<WidgetId, RowIndex>,
    pool: RecyclingPool,
    arena: WidgetArena<W>,
    factory: Option<RowFactory<W>>,
    log: PlacementLog,
    layout_passes: usize,
    reloads: usize,
    needs_layout: bool,
}

impl<W> fmt::Debug for ListView<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("bounds", &self.bounds)
            .field("content_height", &self.content_height)
            .field("sections", &self.sections)
            .field("row_count", &self.geometry.len())
            .field("displayed", &self.displayed)
            .field("pooled", &self.pool.total_pooled())
            .field("widget_count", &self.arena.len())
            .field("has_factory", &self.factory.is_some())
            .field("needs_layout", &self.needs_layout)
            .finish()
    }
}

impl<W> ListView<W> {
    /// Creates an empty list. Fails when the configured row height is invalid.
    pub fn new(config: ListViewConfig) -> Result<Self, GeometryError> {
        let row_height = config.validate()?;
        let bounds = if config.bounds.is_finite() {
            config.bounds
        } else {
            log::warn!(
                "ignoring non-finite initial bounds {:?}, starting from zero",
                config.bounds
            );
            Rect::ZERO
        };
        Ok(Self {
            config,
            row_height,
            bounds,
            content_height: 0.0,
            sections: SectionDimensions::default(),
            geometry: GeometryTable::empty(row_height),
            displayed: BTreeMap::new(),
            rows_by_widget: HashMap::default(),
            pool: RecyclingPool::new(),
            arena: WidgetArena::default(),
            factory: None,
            log: PlacementLog::new(),
            layout_passes: 0,
            reloads: 0,
            needs_layout: false,
        })
    }

    /// Replaces all content.
    ///
    /// Every displayed widget is hidden and pooled, geometry is rebuilt from
    /// `sections`, the scroll offset returns to the origin and a layout pass
    /// is scheduled. Pooled widgets survive the reload; row geometry does not.
    pub fn reload<F>(&mut self, sections: impl Into<SectionDimensions>, factory: F)
    where
        F: FnMut(RowIndex, &mut RowDequeue<'_, W>) -> WidgetId + 'static,
    {
        let displayed: RowBuffer<RowIndex> = self.displayed.keys().copied().collect();
        for index in displayed {
            self.release_row(index);
        }
        assert!(
            self.displayed.is_empty(),
            "displayed rows remain after releasing all of them"
        );

        self.sections = sections.into();
        self.geometry = GeometryTable::build(&self.sections, self.row_height);
        self.bounds.y = 0.0;
        self.content_height = self.geometry.total_height();
        self.factory = Some(Box::new(factory));
        self.reloads += 1;
        self.needs_layout = true;

        log::debug!(
            "reloaded list: {} sections, {} rows, content height {}",
            self.sections.section_count(),
            self.geometry.len(),
            self.content_height
        );
    }

    /// Brings the displayed set in line with the rows visible in the current bounds.
    ///
    /// # Panics
    /// When a row becomes visible before any reload supplied a factory, when
    /// the factory returns a widget it did not dequeue, or when the displayed
    /// set disagrees with the visible rows after the pass.
    pub fn layout(&mut self) {
        self.needs_layout = false;
        self.layout_passes += 1;

        if !self.geometry.is_empty() && self.bounds.height <= 0.0 {
            log::warn!(
                "laying out list with empty viewport {:?}; only rows touching y = {} are shown",
                self.bounds,
                self.bounds.y
            );
        }

        let viewport = self.bounds.vertical();
        let visible: RowBuffer<(RowIndex, Interval)> =
            SmallVec::from_slice(self.geometry.visible(&viewport));
        let is_visible =
            |index: &RowIndex| visible.binary_search_by_key(index, |(row, _)| *row).is_ok();

        let leaving: RowBuffer<RowIndex> = self
            .displayed
            .keys()
            .copied()
            .filter(|index| !is_visible(index))
            .collect();
        let released = leaving.len();
        for index in leaving {
            self.release_row(index);
        }
        assert!(
            self.displayed.keys().all(is_visible),
            "rows outside the viewport are still displayed"
        );

        let mut acquired = 0;
        for &(index, interval) in &visible {
            let id = match self.displayed.get(&index) {
                Some(&id) => id,
                None => {
                    acquired += 1;
                    self.display_row(index)
                }
            };
            let frame = self.frame_for(interval);
            self.place(id, frame);
        }

        assert!(
            visible
                .iter()
                .all(|(index, _)| self.displayed.contains_key(index)),
            "not every visible row is displayed"
        );
        assert!(
            self.displayed
                .values()
                .all(|id| matches!(self.arena.get(*id), Some(entry) if !entry.hidden)),
            "a displayed row has a hidden widget"
        );
        assert_eq!(
            self.displayed.len(),
            visible.len(),
            "displayed rows differ from visible rows"
        );

        #[cfg(debug_assertions)]
        self.check_invariants();

        log::debug!(
            "layout pass {}: {} visible, {} released, {} acquired, {} pooled",
            self.layout_passes,
            visible.len(),
            released,
            acquired,
            self.pool.total_pooled()
        );
    }

    /// Runs [`layout`](Self::layout) if bounds or content changed since the last pass.
    pub fn layout_if_needed(&mut self) -> bool {
        if self.needs_layout {
            self.layout();
            true
        } else {
            false
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    // ── Viewport ─────────────────────────────────────────────────────────

    /// Updates the viewport, in content coordinates. `y` is the scroll offset.
    ///
    /// Non-finite bounds are ignored.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if !bounds.is_finite() {
            log::warn!("ignoring non-finite list bounds {bounds:?}");
            return;
        }
        if bounds != self.bounds {
            self.bounds = bounds;
            self.needs_layout = true;
        }
    }

    /// Resizes the viewport, keeping the scroll offset.
    pub fn set_frame_size(&mut self, size: Size) {
        self.set_bounds(Rect::from_origin_size(self.bounds.origin(), size));
    }

    /// Moves the viewport to `offset`, clamped when [`ListViewConfig::clamp_scroll`] is set.
    pub fn set_content_offset(&mut self, offset: f32) {
        let offset = if self.config.clamp_scroll {
            self.clamp_offset(offset)
        } else {
            offset
        };
        self.set_bounds(Rect {
            y: offset,
            ..self.bounds
        });
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.set_content_offset(self.bounds.y + delta);
    }

    /// Scrolls so `index` sits at the requested edge of the viewport.
    ///
    /// The target offset is always clamped to the content. Returns `false`
    /// when the row does not exist.
    pub fn scroll_to_row(&mut self, index: RowIndex, alignment: ScrollAlignment) -> bool {
        let Some(interval) = self.geometry.get(index) else {
            return false;
        };
        let viewport_height = self.bounds.height;
        let target = match alignment {
            ScrollAlignment::Start => interval.start(),
            ScrollAlignment::Center => {
                interval.start() + (interval.length() - viewport_height) / 2.0
            }
            ScrollAlignment::End => interval.end() - viewport_height,
        };
        self.set_bounds(Rect {
            y: self.clamp_offset(target),
            ..self.bounds
        });
        true
    }

    /// Largest offset that still keeps the viewport within the content.
    pub fn max_content_offset(&self) -> f32 {
        (self.content_height - self.bounds.height).max(0.0)
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_content_offset())
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn content_offset(&self) -> f32 {
        self.bounds.y
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Scrollable content extent: viewport width by total row height.
    pub fn content_size(&self) -> Size {
        Size::new(self.bounds.width, self.content_height)
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn config(&self) -> &ListViewConfig {
        &self.config
    }

    pub fn sections(&self) -> &SectionDimensions {
        &self.sections
    }

    pub fn geometry(&self) -> &GeometryTable {
        &self.geometry
    }

    pub fn pool(&self) -> &RecyclingPool {
        &self.pool
    }

    /// Rows intersecting the current bounds, whether or not laid out yet.
    pub fn visible_rows(&self) -> Vec<RowIndex> {
        self.geometry
            .visible(&self.bounds.vertical())
            .iter()
            .map(|(index, _)| *index)
            .collect()
    }

    pub fn first_visible_row(&self) -> Option<RowIndex> {
        self.geometry
            .visible(&self.bounds.vertical())
            .first()
            .map(|(index, _)| *index)
    }

    pub fn last_visible_row(&self) -> Option<RowIndex> {
        self.geometry
            .visible(&self.bounds.vertical())
            .last()
            .map(|(index, _)| *index)
    }

    /// Displayed rows and their widgets, in index order.
    pub fn displayed_rows(&self) -> impl Iterator<Item = (RowIndex, WidgetId)> + '_ {
        self.displayed.iter().map(|(index, id)| (*index, *id))
    }

    pub fn widget_for_row(&self, index: RowIndex) -> Option<WidgetId> {
        self.displayed.get(&index).copied()
    }

    pub fn row_for_widget(&self, id: WidgetId) -> Option<RowIndex> {
        self.rows_by_widget.get(&id).copied()
    }

    /// Row under `point`, given in content coordinates.
    pub fn row_at_point(&self, point: Point) -> Option<RowIndex> {
        if point.x < self.bounds.x || point.x > self.bounds.x + self.bounds.width {
            return None;
        }
        self.geometry.row_at(point.y)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&W> {
        self.arena.get(id).map(|entry| &entry.widget)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut W> {
        self.arena.get_mut(id).map(|entry| &mut entry.widget)
    }

    /// Last frame written for `id`; `None` for unknown or never placed widgets.
    pub fn frame_of(&self, id: WidgetId) -> Option<Rect> {
        self.arena.get(id).and_then(|entry| entry.frame)
    }

    pub fn is_hidden(&self, id: WidgetId) -> Option<bool> {
        self.arena.get(id).map(|entry| entry.hidden)
    }

    pub fn kind_of(&self, id: WidgetId) -> Option<&'static str> {
        self.arena.get(id).map(|entry| entry.kind)
    }

    /// Number of widgets ever created, displayed or pooled.
    pub fn widget_count(&self) -> usize {
        self.arena.len()
    }

    pub fn stats(&self) -> ListViewStats {
        ListViewStats {
            rows_displayed: self.displayed.len(),
            widgets_pooled: self.pool.total_pooled(),
            widgets_created: self.pool.created_total(),
            reuse_count: self.pool.reused_total(),
            layout_passes: self.layout_passes,
            reloads: self.reloads,
        }
    }

    // ── Placement output ─────────────────────────────────────────────────

    pub fn pending_commands(&self) -> &[PlacementCommand] {
        self.log.as_slice()
    }

    /// Takes the placement commands recorded since the last drain.
    pub fn drain_commands(&mut self) -> Vec<PlacementCommand> {
        self.log.drain()
    }

    // ── Invariants ───────────────────────────────────────────────────────

    /// Asserts the consistency of geometry, displayed rows and the pool.
    ///
    /// Every widget is either displayed for exactly one row or pooled under
    /// its own kind; displayed widgets are shown, pooled ones hidden. When no
    /// layout is pending the displayed rows equal the visible rows.
    pub fn check_invariants(&self) {
        for (index, id) in &self.displayed {
            let Some(entry) = self.arena.get(*id) else {
                panic!("row {index} displays unknown widget {id}");
            };
            assert!(!entry.hidden, "row {index} displays hidden widget {id}");
            assert!(
                !self.pool.contains(*id),
                "widget {id} of row {index} is displayed and pooled"
            );
            assert_eq!(
                self.rows_by_widget.get(id),
                Some(index),
                "reverse lookup for widget {id} disagrees with row {index}"
            );
            assert!(
                self.geometry.contains(*index),
                "displayed row {index} has no geometry"
            );
        }
        assert_eq!(
            self.rows_by_widget.len(),
            self.displayed.len(),
            "reverse lookup tracks widgets that are not displayed"
        );

        let mut pooled = 0;
        for (kind, bucket) in self.pool.buckets() {
            for id in bucket {
                let Some(entry) = self.arena.get(*id) else {
                    panic!("pool holds unknown widget {id}");
                };
                assert!(entry.hidden, "pooled widget {id} is not hidden");
                assert_eq!(entry.kind, kind, "widget {id} pooled under the wrong kind");
                pooled += 1;
            }
        }
        assert_eq!(
            pooled + self.displayed.len(),
            self.arena.len(),
            "widgets are neither displayed nor pooled"
        );

        if !self.needs_layout {
            let visible = self.geometry.visible(&self.bounds.vertical());
            assert!(
                visible.len() == self.displayed.len()
                    && visible
                        .iter()
                        .zip(self.displayed.keys())
                        .all(|((row, _), displayed)| row == displayed),
                "displayed rows differ from visible rows"
            );
        }
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn display_row(&mut self, index: RowIndex) -> WidgetId {
        let Some(factory) = self.factory.as_mut() else {
            panic!("row {index} became visible before a reload supplied a row factory");
        };
        let mut dequeue = RowDequeue::new(&mut self.pool, &mut self.arena, &mut self.log);
        let id = factory(index, &mut dequeue);
        dequeue.finish(index, id);

        self.arena.entry_mut(id).hidden = false;
        self.log.push(PlacementCommand::Show { widget: id });
        let previous = self.displayed.insert(index, id);
        assert!(previous.is_none(), "row {index} was already displayed");
        self.rows_by_widget.insert(id, index);
        id
    }

    fn release_row(&mut self, index: RowIndex) {
        let Some(id) = self.displayed.remove(&index) else {
            panic!("row {index} released but it has no displayed widget");
        };
        self.rows_by_widget.remove(&id);
        let entry = self.arena.entry_mut(id);
        entry.hidden = true;
        let kind = entry.kind;
        self.log.push(PlacementCommand::Hide { widget: id });
        self.pool.release(id, kind);
    }

    fn place(&mut self, id: WidgetId, frame: Rect) {
        let entry = self.arena.entry_mut(id);
        if entry.frame != Some(frame) {
            entry.frame = Some(frame);
            self.log.push(PlacementCommand::Move { widget: id, frame });
        }
    }

    fn frame_for(&self, interval: Interval) -> Rect {
        Rect::new(
            self.bounds.x,
            interval.start(),
            self.bounds.width,
            interval.length(),
        )
    }
}

#[cfg(test)]
#[path = "tests/list_view_tests.rs"]
mod tests;
