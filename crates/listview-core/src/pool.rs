//! Row widget ownership and per-kind recycling.
//!
//! Every widget the list ever creates lives in a [`WidgetArena`] for the
//! lifetime of the list and is addressed by [`WidgetId`]. A widget is either
//! displayed for exactly one row or parked in the [`RecyclingPool`] bucket of
//! its [`RowKind`]; never both.

use std::fmt;

use crate::collections::HashMap;
use listview_geometry::Rect;

/// Handle to a widget owned by the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(usize);

impl WidgetId {
    #[inline]
    pub fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Descriptor for one shape of row widget.
///
/// Widgets are only ever recycled into rows that ask for the same kind, so
/// kinds with incompatible layouts never share instances. The `name` is the
/// pool key and must be unique per shape.
pub struct RowKind<W> {
    name: &'static str,
    construct: fn() -> W,
}

impl<W> RowKind<W> {
    pub const fn new(name: &'static str, construct: fn() -> W) -> Self {
        Self { name, construct }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn construct(&self) -> W {
        (self.construct)()
    }
}

impl<W> Clone for RowKind<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for RowKind<W> {}

impl<W> fmt::Debug for RowKind<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowKind").field("name", &self.name).finish()
    }
}

#[derive(Debug)]
pub(crate) struct WidgetEntry<W> {
    pub(crate) widget: W,
    pub(crate) kind: &'static str,
    /// Last frame written to the host, `None` until first placement.
    pub(crate) frame: Option<Rect>,
    pub(crate) hidden: bool,
}

/// Storage for every widget the list has created.
#[derive(Debug)]
pub(crate) struct WidgetArena<W> {
    entries: Vec<WidgetEntry<W>>,
}

impl<W> Default for WidgetArena<W> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<W> WidgetArena<W> {
    fn insert(&mut self, kind: &'static str, widget: W) -> WidgetId {
        let id = WidgetId(self.entries.len());
        self.entries.push(WidgetEntry {
            widget,
            kind,
            frame: None,
            hidden: true,
        });
        id
    }

    pub(crate) fn get(&self, id: WidgetId) -> Option<&WidgetEntry<W>> {
        self.entries.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetEntry<W>> {
        self.entries.get_mut(id.0)
    }

    /// Entry for an id the arena handed out. Ids are never invalidated.
    pub(crate) fn entry_mut(&mut self, id: WidgetId) -> &mut WidgetEntry<W> {
        match self.entries.get_mut(id.0) {
            Some(entry) => entry,
            None => panic!("widget {id} was never created by this list"),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Outcome of [`RecyclingPool::acquire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acquired {
    pub id: WidgetId,
    /// True when the widget was constructed instead of taken from the pool.
    pub created: bool,
}

/// Per-kind stacks of hidden, currently unused widgets.
#[derive(Debug, Default)]
pub struct RecyclingPool {
    buckets: HashMap<&'static str, Vec<WidgetId>>,
    created_by_kind: HashMap<&'static str, usize>,
    created_total: usize,
    reused_total: usize,
}

impl RecyclingPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pops a pooled widget of `kind`, or constructs one when the bucket is empty.
    ///
    /// The bucket is created on first acquire and kept for the pool's
    /// lifetime. Acquired widgets stay hidden; showing them is up to the caller.
    pub(crate) fn acquire<W>(&mut self, kind: &RowKind<W>, arena: &mut WidgetArena<W>) -> Acquired {
        let bucket = self.buckets.entry(kind.name()).or_default();
        if let Some(id) = bucket.pop() {
            self.reused_total += 1;
            log::trace!("reusing widget {id} of kind '{}'", kind.name());
            return Acquired { id, created: false };
        }

        let id = arena.insert(kind.name(), kind.construct());
        *self.created_by_kind.entry(kind.name()).or_default() += 1;
        self.created_total += 1;
        log::trace!("created widget {id} of kind '{}'", kind.name());
        Acquired { id, created: true }
    }

    /// Parks a widget in the bucket for its kind.
    ///
    /// # Panics
    /// If no widget of `kind` was ever acquired, or if `id` is already pooled.
    pub(crate) fn release(&mut self, id: WidgetId, kind: &'static str) {
        let Some(bucket) = self.buckets.get_mut(kind) else {
            panic!("released widget {id} of kind '{kind}' but no widget of that kind was ever acquired");
        };
        assert!(
            !bucket.contains(&id),
            "widget {id} of kind '{kind}' released twice"
        );
        bucket.push(id);
        log::trace!("pooled widget {id} of kind '{kind}'");
    }

    /// Number of pooled widgets of `kind`.
    pub fn pooled(&self, kind: &str) -> usize {
        self.buckets.get(kind).map_or(0, Vec::len)
    }

    /// Number of pooled widgets across all kinds.
    pub fn total_pooled(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.buckets.values().any(|bucket| bucket.contains(&id))
    }

    /// Number of widgets of `kind` ever constructed.
    pub fn created(&self, kind: &str) -> usize {
        self.created_by_kind.get(kind).copied().unwrap_or(0)
    }

    pub fn created_total(&self) -> usize {
        self.created_total
    }

    pub fn reused_total(&self) -> usize {
        self.reused_total
    }

    /// Pooled widget ids grouped by kind name.
    pub fn buckets(&self) -> impl Iterator<Item = (&'static str, &[WidgetId])> {
        self.buckets
            .iter()
            .map(|(kind, bucket)| (*kind, bucket.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Label(String);

    #[derive(Debug, Default)]
    struct Header;

    const LABEL: RowKind<Label> = RowKind::new("label", Label::default);

    #[test]
    fn acquire_constructs_when_bucket_empty() {
        let mut pool = RecyclingPool::new();
        let mut arena = WidgetArena::default();

        let first = pool.acquire(&LABEL, &mut arena);
        let second = pool.acquire(&LABEL, &mut arena);

        assert!(first.created);
        assert!(second.created);
        assert_ne!(first.id, second.id);
        assert_eq!(pool.created("label"), 2);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn acquired_widgets_start_hidden_and_unplaced() {
        let mut pool = RecyclingPool::new();
        let mut arena = WidgetArena::default();

        let acquired = pool.acquire(&LABEL, &mut arena);
        let entry = arena.get(acquired.id).expect("entry");
        assert!(entry.hidden);
        assert_eq!(entry.frame, None);
        assert_eq!(entry.kind, "label");
    }

    #[test]
    fn release_then_acquire_reuses_last_released() {
        let mut pool = RecyclingPool::new();
        let mut arena = WidgetArena::default();

        let a = pool.acquire(&LABEL, &mut arena).id;
        let b = pool.acquire(&LABEL, &mut arena).id;
        pool.release(a, "label");
        pool.release(b, "label");
        assert_eq!(pool.pooled("label"), 2);

        let reused = pool.acquire(&LABEL, &mut arena);
        assert_eq!(reused, Acquired { id: b, created: false });
        assert_eq!(pool.pooled("label"), 1);
        assert_eq!(pool.reused_total(), 1);
        assert_eq!(pool.created_total(), 2);
    }

    #[test]
    fn kinds_do_not_share_buckets() {
        let mut pool = RecyclingPool::new();
        let mut labels = WidgetArena::default();
        let mut headers = WidgetArena::default();
        let header_kind: RowKind<Header> = RowKind::new("header", Header::default);

        let label = pool.acquire(&LABEL, &mut labels).id;
        pool.release(label, "label");

        let header = pool.acquire(&header_kind, &mut headers);
        assert!(header.created);
        assert_eq!(pool.pooled("label"), 1);
        assert_eq!(pool.pooled("header"), 0);
        assert_eq!(pool.total_pooled(), 1);
        assert!(pool.contains(label));
    }

    #[test]
    fn bucket_survives_becoming_empty() {
        let mut pool = RecyclingPool::new();
        let mut arena = WidgetArena::default();

        let id = pool.acquire(&LABEL, &mut arena).id;
        pool.release(id, "label");
        let again = pool.acquire(&LABEL, &mut arena).id;
        assert_eq!(pool.pooled("label"), 0);

        pool.release(again, "label");
        assert_eq!(pool.pooled("label"), 1);
    }

    #[test]
    #[should_panic(expected = "no widget of that kind was ever acquired")]
    fn release_without_bucket_panics() {
        let mut pool = RecyclingPool::new();
        let mut arena = WidgetArena::default();
        let id = pool.acquire(&LABEL, &mut arena).id;
        pool.release(id, "header");
    }

    #[test]
    #[should_panic(expected = "released twice")]
    fn double_release_panics() {
        let mut pool = RecyclingPool::new();
        let mut arena = WidgetArena::default();
        let id = pool.acquire(&LABEL, &mut arena).id;
        pool.release(id, "label");
        pool.release(id, "label");
    }

    #[test]
    fn widget_ids_follow_creation_order() {
        let mut pool = RecyclingPool::new();
        let mut arena = WidgetArena::default();

        let first = pool.acquire(&LABEL, &mut arena).id;
        let second = pool.acquire(&LABEL, &mut arena).id;
        assert_eq!(first.raw(), 0);
        assert_eq!(second.raw(), 1);
        assert_eq!(second.to_string(), "#1");
    }
}
