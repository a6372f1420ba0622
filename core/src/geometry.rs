//! Vertical layout of rendered items and the drop-position rule.

/// Vertical extent of one rendered item, in host units (terminal rows).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBox {
    pub top: f64,
    pub height: f64,
}

impl ItemBox {
    /// Signed distance from the item's vertical midpoint to `pointer_y`.
    ///
    /// Negative while the pointer is above the midpoint.
    #[must_use]
    pub fn offset(&self, pointer_y: f64) -> f64 {
        pointer_y - self.top - self.height / 2.0
    }
}

/// Where a list's items sit on screen. Reported by the host after each draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListGeometry {
    /// Top edge of the first item slot.
    pub top: f64,
    pub item_height: f64,
}

impl Default for ListGeometry {
    fn default() -> Self {
        Self {
            top: 0.0,
            item_height: 1.0,
        }
    }
}

impl ListGeometry {
    #[must_use]
    pub fn new(top: f64, item_height: f64) -> Self {
        Self { top, item_height }
    }

    /// Box of the item occupying live slot `slot`.
    #[must_use]
    pub fn slot(&self, slot: usize) -> ItemBox {
        ItemBox {
            top: self.top + slot as f64 * self.item_height,
            height: self.item_height,
        }
    }

    /// Live slot under `pointer_y`, if it falls inside the first `len` slots.
    #[must_use]
    pub fn slot_at(&self, pointer_y: f64, len: usize) -> Option<usize> {
        if self.item_height <= 0.0 || pointer_y < self.top {
            return None;
        }
        let slot = ((pointer_y - self.top) / self.item_height).floor() as usize;
        (slot < len).then_some(slot)
    }
}

/// Pick the item the dragged one should be placed before.
///
/// Among candidates whose midpoint lies below the pointer (negative offset),
/// the one with the offset closest to zero wins. `None` means "end of list".
/// Candidates are `(key, box)` pairs. Ties keep the first candidate.
pub fn after_element<K, I>(candidates: I, pointer_y: f64) -> Option<K>
where
    I: IntoIterator<Item = (K, ItemBox)>,
{
    let mut closest: Option<(K, f64)> = None;
    for (key, item) in candidates {
        let offset = item.offset(pointer_y);
        if offset < 0.0 && closest.as_ref().is_none_or(|(_, best)| offset > *best) {
            closest = Some((key, offset));
        }
    }
    closest.map(|(key, _)| key)
}
