use std::fmt;

/// RGB color representation.
///
/// Themes and slide backgrounds store colours as CSS hex strings; this type is
/// what the render plan resolves them into.
///
/// # Examples
///
/// ```rust
/// use slidedeck::common::RGBColor;
///
/// let blue = RGBColor::from_hex("#3b82f6").unwrap();
/// assert_eq!(blue.to_hex(), "3B82F6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Default background of dark-mode slides (`#1a1a1a`).
    pub const DARK_BACKGROUND: RGBColor = RGBColor::new(0x1a, 0x1a, 0x1a);
    /// Default background of light-mode slides (`#ffffff`).
    pub const LIGHT_BACKGROUND: RGBColor = RGBColor::new(0xff, 0xff, 0xff);
    /// Text colour used on light backgrounds.
    pub const DARK_TEXT: RGBColor = RGBColor::new(0x11, 0x18, 0x27);
    /// Text colour used on dark backgrounds.
    pub const LIGHT_TEXT: RGBColor = RGBColor::new(0xff, 0xff, 0xff);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts `RRGGBB` and the CSS shorthand `RGB`, with or without a leading `#`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slidedeck::common::RGBColor;
    ///
    /// let red = RGBColor::from_hex("FF0000").unwrap();
    /// let white = RGBColor::from_hex("#fff").unwrap();
    /// assert_eq!(white, RGBColor::new(255, 255, 255));
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            },
            3 => {
                let expand = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::new(expand(0)?, expand(1)?, expand(2)?))
            },
            _ => None,
        }
    }

    /// Convert to hex string (without # prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to a lowercase CSS colour (`#rrggbb`).
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Relative luminance per WCAG 2.x, in `0.0..=1.0`.
    pub fn luminance(&self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// Whether light text reads better than dark text on this colour.
    pub fn is_dark(&self) -> bool {
        self.luminance() < 0.179
    }

    /// Text colour that contrasts with this colour used as a background.
    pub fn contrasting_text(&self) -> RGBColor {
        if self.is_dark() {
            Self::LIGHT_TEXT
        } else {
            Self::DARK_TEXT
        }
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
