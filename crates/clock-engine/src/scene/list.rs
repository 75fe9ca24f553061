use super::{DrawCmd, DrawKind, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// A maximal span of consecutive same-kind items in paint order.
///
/// `start..start + len` indexes paint order, not insertion order. Renderers
/// prepare every item of their kind up front and then draw one run at a time,
/// so interleaved polygons and text keep painter's-algorithm occlusion.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawRun {
    pub kind: DrawKind,
    pub start: usize,
    pub len: usize,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        self.ensure_sorted();
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    /// Splits the paint order into runs of consecutive same-kind commands.
    pub fn runs(&mut self) -> Vec<DrawRun> {
        self.ensure_sorted();

        let mut runs: Vec<DrawRun> = Vec::new();
        for (pos, &i) in self.sorted_indices.iter().enumerate() {
            let kind = self.items[i].cmd.kind();
            match runs.last_mut() {
                Some(run) if run.kind == kind => run.len += 1,
                _ => runs.push(DrawRun { kind, start: pos, len: 1 }),
            }
        }
        runs
    }

    fn ensure_sorted(&mut self) {
        if !self.sorted_dirty && self.sorted_indices.len() == self.items.len() {
            return;
        }

        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}
