#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Visual styling for an element. The surrounding presentation layer owns
/// defaults; unset fields inherit from the parent at paint time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    pub bold: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Inline presentation overrides layered on top of an element's `Style`.
///
/// Unset fields mean "no override": the element keeps whatever the
/// presentation layer gives it by default. Panels are default-hidden, so a
/// panel with cleared overrides does not appear at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overrides {
    pub opacity: Option<f32>,
    pub visibility: Option<Visibility>,
    /// Vertical offset in cells from the rest position.
    pub translate_y: Option<i16>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fully-visible override set: opaque, visible, at rest position.
    pub fn visible() -> Self {
        Self {
            opacity: Some(1.0),
            visibility: Some(Visibility::Visible),
            translate_y: Some(0),
        }
    }

    /// Remove every override so default styling applies again.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Some(Visibility::Visible)
    }
}

/// Blend `over` into `under` by `alpha` in linear RGB.
/// `alpha == 1.0` yields `over`, `alpha == 0.0` yields `under`.
pub fn mix(under: Rgb, over: Rgb, alpha: f32) -> Rgb {
    use palette::{Mix, Srgb};

    let under = Srgb::new(under.r, under.g, under.b)
        .into_format::<f32>()
        .into_linear();
    let over = Srgb::new(over.r, over.g, over.b)
        .into_format::<f32>()
        .into_linear();

    let blended = under.mix(over, alpha.clamp(0.0, 1.0));
    let srgb: Srgb<f32> = Srgb::from_linear(blended);
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

/// Raise perceptual lightness in OKLCH space.
pub fn lighten(color: Rgb, amount: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let srgb = Srgb::new(color.r, color.g, color.b).into_format::<f32>();
    let mut oklch: Oklch = srgb.into_color();
    oklch.l = (oklch.l + amount).clamp(0.0, 1.0);

    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
