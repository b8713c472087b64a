use crate::types::Rgb;

/// Role-based palette the grid paints with. The owner picks a preset (or
/// builds one) and passes it to the renderer explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub surface: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub on_accent: Rgb,
    pub info: Rgb,
    pub danger: Rgb,
}

impl Theme {
    /// Dark preset, the default.
    pub fn dark() -> Self {
        Self {
            background: Rgb::hex(0x1e1e2e),
            surface: Rgb::hex(0x2d2d3d),
            border: Rgb::hex(0x45475a),
            text: Rgb::hex(0xcdd6f4),
            muted: Rgb::hex(0x7f849c),
            accent: Rgb::hex(0xa277ff),
            on_accent: Rgb::hex(0x1e1e2e),
            info: Rgb::hex(0x74a8fc),
            danger: Rgb::hex(0xf38ba8),
        }
    }

    /// Light preset.
    pub fn light() -> Self {
        Self {
            background: Rgb::hex(0xffffff),
            surface: Rgb::hex(0xeff1f5),
            border: Rgb::hex(0xbcc0cc),
            text: Rgb::hex(0x333333),
            muted: Rgb::hex(0x8c8fa1),
            accent: Rgb::hex(0x0455a2),
            on_accent: Rgb::hex(0xffffff),
            info: Rgb::hex(0x2196f3),
            danger: Rgb::hex(0xd20f39),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
