//! Placement for vertical scrollbars along the start or end edge.

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

    // Hiding slides the bar off its own edge, so the shift is negative on
    // the start side and positive on the end side.
    let shift = match settings.side {
        Side::Start => -displacement,
        Side::End => displacement,
    };

    let thumb_height = track.height * thumb_size;
    let thumb_y = track.y + track.height * offset;
    let thumb_x = match settings.side {
        Side::Start => track.x + padding,
        Side::End => track.x + track.width - padding - thickness,
    };
    let thumb = Rect::new(thumb_x + shift, thumb_y, thickness, thumb_height);

    let hit_width = padding * 2.0 + thickness;
    let hit_x = match settings.side {
        Side::Start => track.x,
        Side::End => track.x + track.width - hit_width,
    };
    let hit_region = Rect::new(hit_x + shift, track.y, hit_width, track.height);

    let indicator = indicator_size.map(|(width, height)| {
        // The indicator sits flush against the thumb box (thickness plus the
        // edge-side padding), centered on the thumb midpoint.
        let box_width = thickness + padding;
        let x = match settings.side {
            Side::Start => track.x + box_width,
            Side::End => track.x + track.width - box_width - width,
        };
        let y = thumb_y + thumb_height / 2.0 - height / 2.0;
        Rect::new(x + shift, y, width, height)
    });

    Placement {
        thumb,
        hit_region,
        indicator,
    }
}
