//! One-sided surface collision against axis-aligned rectangles
//!
//! Only downward crossings of a blocking item's top edge are resolved. There
//! is no side or ceiling collision and no swept test: a body either crosses
//! a surface during this frame's displacement or it doesn't.

use glam::Vec2;

use super::state::EnvItem;
use crate::Rect;

/// A surface the body would cross this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Index of the blocking item
    pub item: usize,
    /// Y the body snaps to
    pub y: f32,
}

/// True if a body at `pos` moving by `dy` crosses `surface_y` within `rect`'s span
#[inline]
pub fn crosses_surface(rect: &Rect, surface_y: f32, pos: Vec2, dy: f32) -> bool {
    rect.spans_x(pos.x) && surface_y >= pos.y && surface_y <= pos.y + dy
}

/// First blocking item (array order) whose top edge a body would cross.
///
/// `lift` raises the landing height, so a body whose reference point is its
/// top edge rests `lift` pixels above the surface. Array order is the tie
/// break, not distance.
pub fn find_landing(items: &[EnvItem], pos: Vec2, dy: f32, lift: f32) -> Option<Landing> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.blocking)
        .find_map(|(idx, item)| {
            let surface_y = item.rect.y - lift;
            crosses_surface(&item.rect, surface_y, pos, dy).then_some(Landing {
                item: idx,
                y: surface_y,
            })
        })
}

/// Tight bounds around every item rect, `None` for an empty level
pub fn world_bounds(items: &[EnvItem]) -> Option<Rect> {
    if items.is_empty() {
        return None;
    }
    let (min, max) = items.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), item| {
            (
                min.min(Vec2::new(item.rect.x, item.rect.y)),
                max.max(Vec2::new(item.rect.right(), item.rect.bottom())),
            )
        },
    );
    Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
}
