use palette::{IntoColor, Oklch, Srgb};

/// Solid RGB color used for the thumb and indicator surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Interpolate toward `to` in OKLCH space with shortest-path hue.
    ///
    /// `t` is clamped to [0, 1]; the endpoints return the exact input
    /// colors without a conversion round-trip.
    pub fn lerp(self, to: Color, t: f32) -> Color {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return to;
        }

        let (from_l, from_c, from_h) = rgb_to_oklch(self);
        let (to_l, to_c, to_h) = rgb_to_oklch(to);

        let l = from_l + (to_l - from_l) * t;
        let c = from_c + (to_c - from_c) * t;

        // Hue takes the shortest path around the circle
        let mut dh = to_h - from_h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        let h = (from_h + dh * t).rem_euclid(360.0);

        oklch_to_rgb(l, c, h)
    }
}

fn rgb_to_oklch(color: Color) -> (f32, f32, f32) {
    let srgb = Srgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
    );
    let oklch: Oklch = srgb.into_color();
    (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Color {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Color::rgb(r, g, b)
}
