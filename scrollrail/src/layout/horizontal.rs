//! Placement for horizontal scrollbars along the top or bottom edge.

use crate::settings::{ScrollbarSettings, Side};

use super::{Placement, Rect};

pub(super) fn place(
    settings: &ScrollbarSettings,
    track: Rect,
    thumb_size: f32,
    offset: f32,
    displacement: f32,
    indicator_size: Option<(f32, f32)>,
) -> Placement {
    let padding = settings.scrollbar_padding;
    let thickness = settings.thumb_thickness;

    let shift = match settings.side {
        Side::Start => -displacement,
        Side::End => displacement,
    };

    let thumb_width = track.width * thumb_size;
    let thumb_x = track.x + track.width * offset;
    let thumb_y = match settings.side {
        Side::Start => track.y + padding,
        Side::End => track.y + track.height - padding - thickness,
    };
    let thumb = Rect::new(thumb_x, thumb_y + shift, thumb_width, thickness);

    let hit_height = padding * 2.0 + thickness;
    let hit_y = match settings.side {
        Side::Start => track.y,
        Side::End => track.y + track.height - hit_height,
    };
    let hit_region = Rect::new(track.x, hit_y + shift, track.width, hit_height);

    let indicator = indicator_size.map(|(width, height)| {
        let box_height = thickness + padding;
        let y = match settings.side {
            Side::Start => track.y + box_height,
            Side::End => track.y + track.height - box_height - height,
        };
        let x = thumb_x + thumb_width / 2.0 - width / 2.0;
        Rect::new(x, y + shift, width, height)
    });

    Placement {
        thumb,
        hit_region,
        indicator,
    }
}
