//! Visibility window and buffered render plan

use std::ops::Deref;

use crate::circular;

/// Ordered indices currently on screen, starting at the current index
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibilityWindow {
    indices: Vec<usize>,
}

impl VisibilityWindow {
    /// Window of `min(max_visible, total)` indices starting at `current`
    ///
    /// Empty when `total == 0`. When `max_visible >= total` this is a full
    /// rotation of the collection starting at `current`.
    pub fn compute(current: usize, total: usize, max_visible: usize) -> Self {
        let len = max_visible.min(total);
        let mut indices = Vec::with_capacity(len);
        let mut index = current;
        while indices.len() < len {
            indices.push(index);
            // total > 0 whenever len > 0
            match circular::advance(index, total) {
                Ok(next) => index = next,
                Err(_) => break,
            }
        }
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// First visible index, which is the current index
    pub fn head(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    /// Last visible index
    pub fn tail(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }
}

impl Deref for VisibilityWindow {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.indices
    }
}

/// One item the renderer should lay out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSlot {
    /// Logical index of the item
    pub index: usize,
    /// Whether the item is inside the window; hidden slots are buffer neighbors
    pub visible: bool,
}

impl RenderSlot {
    fn visible(index: usize) -> Self {
        Self { index, visible: true }
    }

    fn hidden(index: usize) -> Self {
        Self { index, visible: false }
    }
}

/// Slots to lay out for `window`
///
/// With `buffered` set and items left over, the window is framed by a hidden
/// leading neighbor and a hidden trailing neighbor so a drag can reveal them.
/// The trailing neighbor is dropped when it is the same item as the leading one.
pub fn render_plan(window: &VisibilityWindow, total: usize, buffered: bool) -> Vec<RenderSlot> {
    let mut slots: Vec<RenderSlot> = window.iter().copied().map(RenderSlot::visible).collect();
    if !buffered || window.len() >= total {
        return slots;
    }

    let (Some(head), Some(tail)) = (window.head(), window.tail()) else {
        return slots;
    };
    let (Ok(leading), Ok(trailing)) = (circular::retreat(head, total), circular::advance(tail, total)) else {
        return slots;
    };

    slots.insert(0, RenderSlot::hidden(leading));
    if trailing != leading {
        slots.push(RenderSlot::hidden(trailing));
    }
    slots
}
