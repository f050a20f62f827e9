#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Same size, re-centered at (cx, cy).
    pub fn centered_at(&self, cx: f32, cy: f32) -> Rect {
        Rect {
            x: cx - self.w / 2.0,
            y: cy - self.h / 2.0,
            ..*self
        }
    }
}

/// Content insets of a scrollable viewport (navigation bars, safe areas).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub fn vertical(top: f32, bottom: f32) -> Self {
        Self {
            top,
            bottom,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            scale_x: sx,
            scale_y: sy,
            ..Self::identity()
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Scale about the rect's own center, then translate.
    pub fn apply_to_rect(&self, r: Rect) -> Rect {
        let w = r.w * self.scale_x;
        let h = r.h * self.scale_y;
        Rect {
            x: r.x + (r.w - w) / 2.0 + self.translate_x,
            y: r.y + (r.h - h) / 2.0 + self.translate_y,
            w,
            h,
        }
    }
}
