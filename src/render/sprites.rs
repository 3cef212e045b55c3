//! Sprite source/destination rectangles for tiles and the player

use super::{DrawCmd, Sheet};
use crate::consts::*;
use crate::sim::{EnvItem, Facing, Player};
use crate::{Color, Rect};

/// Atlas cell of the open-door sprite
pub const OPEN_DOOR_CELL: (u32, u32) = (23, 11);

/// Source rect of a flat atlas index
pub fn atlas_src(index: u32) -> Rect {
    let row = index / ATLAS_SPRITES_PER_ROW;
    let col = index % ATLAS_SPRITES_PER_ROW;
    cell_src(col, row)
}

/// Source rect of an atlas cell
pub fn cell_src(col: u32, row: u32) -> Rect {
    Rect::new(
        col as f32 * ATLAS_SPRITE_SIZE,
        row as f32 * ATLAS_SPRITE_SIZE,
        ATLAS_SPRITE_SIZE,
        ATLAS_SPRITE_SIZE,
    )
}

/// Tile sprites for an item drawn from the atlas.
///
/// Tall single-column items (doors) stack `footprint.tall` tiles upward from
/// the bottom tile. Everything else repeats the tile along x, one row
/// at the item's top edge.
pub fn item_tiles(item: &EnvItem, index: u32, out: &mut Vec<DrawCmd>) {
    let mut src = atlas_src(index);

    if item.footprint.tall > 1 && item.footprint.wide == 1 {
        if item.door_open {
            src = cell_src(OPEN_DOOR_CELL.0, OPEN_DOOR_CELL.1);
        }
        for m in 0..item.footprint.tall {
            let dest = Rect::new(
                item.rect.x,
                item.rect.y + TILE_SIZE * (item.footprint.tall - 1 - m) as f32,
                TILE_SIZE,
                TILE_SIZE,
            );
            let src = Rect {
                y: src.y - m as f32 * ATLAS_SPRITE_SIZE,
                ..src
            };
            out.push(DrawCmd::Sprite {
                sheet: Sheet::Tiles,
                src,
                dest,
                tint: Color::WHITE,
            });
        }
    } else {
        let tiles_wide = (item.rect.width / TILE_SIZE) as u32;
        for tw in 0..tiles_wide {
            let dest = Rect::new(item.rect.x + tw as f32 * TILE_SIZE, item.rect.y, TILE_SIZE, TILE_SIZE);
            out.push(DrawCmd::Sprite {
                sheet: Sheet::Tiles,
                src,
                dest,
                tint: Color::WHITE,
            });
        }
    }
}

/// Player sprite: 40x40 box standing on `position`, row by facing,
/// column by walk frame
pub fn player_sprite(player: &Player) -> DrawCmd {
    let dest = Rect::new(player.position.x - 20.0, player.position.y - 40.0, 40.0, 40.0);
    let row = match player.facing {
        Facing::Right => 0.0,
        Facing::Left => PLAYER_SPRITE_SIZE,
    };
    let src = Rect::new(
        player.anim_frame as f32 * PLAYER_SPRITE_SIZE,
        row,
        PLAYER_SPRITE_SIZE,
        PLAYER_SPRITE_SIZE,
    );
    DrawCmd::Sprite {
        sheet: Sheet::Player,
        src,
        dest,
        tint: Color::WHITE,
    }
}
