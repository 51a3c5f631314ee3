//! Draw list construction
//!
//! Walls go first, then the dynamic entities (player, coins, enemies) in
//! creation order, then the HUD.

use glam::Vec2;

use super::{Color, Frame, Sprite, TextOverlay, Visual};
use crate::consts::*;
use crate::sim::{EntityClass, EntityId, EntityKind, GameState};

fn visual_for(kind: &EntityKind) -> Visual {
    match kind {
        EntityKind::Wall => Visual::Solid {
            color: Color::WHITE,
        },
        EntityKind::Coin => Visual::Disc {
            fill: Color::YELLOW,
            backdrop: Color::PURPLE,
        },
        EntityKind::Enemy { .. } => Visual::Solid {
            color: Color::BLACK,
        },
    }
}

fn text(text: String, (x, y): (f32, f32)) -> TextOverlay {
    TextOverlay {
        text,
        pos: Vec2::new(x, y),
        size: HUD_FONT_SIZE,
        color: Color::WHITE,
    }
}

/// Snapshot the state as a frame
pub fn build_frame(state: &GameState) -> Frame {
    let walls = state.world.walls().map(|&rect| Sprite {
        rect,
        visual: Visual::Solid {
            color: Color::WHITE,
        },
    });

    let mut dynamic: Vec<(EntityId, Sprite)> = state
        .world
        .iter()
        .filter(|e| e.class() != EntityClass::Wall)
        .map(|e| {
            let sprite = Sprite {
                rect: e.rect,
                visual: visual_for(&e.kind),
            };
            (e.id, sprite)
        })
        .collect();
    dynamic.push((
        state.player.id,
        Sprite {
            rect: state.player.rect,
            visual: Visual::Solid {
                color: Color::WHITE,
            },
        },
    ));
    dynamic.sort_by_key(|(id, _)| *id);

    let mut texts = vec![
        text(format!("score: {}", state.score), HUD_SCORE_POS),
        text(format!("best: {}", state.best), HUD_BEST_POS),
    ];
    if !state.started {
        texts.push(text(HUD_CAPTION.to_string(), HUD_CAPTION_POS));
    }

    Frame {
        background: Color::PURPLE,
        sprites: walls.chain(dynamic.into_iter().map(|(_, s)| s)).collect(),
        texts,
    }
}
