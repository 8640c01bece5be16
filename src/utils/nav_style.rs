//! Navbar presentation as pure functions of (active route, viewport class).

/// Widths at or below this are laid out as mobile
pub const MOBILE_BREAKPOINT: f64 = 992.0;

/// Height of the fixed navbar, the mobile overlay starts below it
pub const NAVBAR_HEIGHT: u32 = 63;

pub const ACCENT: &str = "#ffb300";
pub const BACKGROUND: &str = "#000000";
pub const FONT_FAMILY: &str = "'Chewy', cursive";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn from_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Viewport::Mobile)
    }
}

/// Style descriptor for a navigation link
#[derive(Clone, Debug, PartialEq)]
pub struct LinkStyle {
    pub color: &'static str,
    pub background: &'static str,
    pub padding: &'static str,
    pub font_size: &'static str,
}

impl LinkStyle {
    /// Render as an inline `style` attribute
    pub fn to_css(&self) -> String {
        format!(
            "color: {}; background-color: {}; padding: {}; font-size: {}; \
             text-decoration: none; font-family: {}; border-radius: 4px; \
             display: block; width: 100%; text-align: center; margin: 5px 0;",
            self.color, self.background, self.padding, self.font_size, FONT_FAMILY
        )
    }
}

pub fn nav_link_style(active: bool, viewport: Viewport) -> LinkStyle {
    let (color, background) = if active {
        (BACKGROUND, ACCENT)
    } else {
        (ACCENT, "transparent")
    };
    let (padding, font_size) = match viewport {
        Viewport::Mobile => ("15px 20px", "1.32rem"),
        Viewport::Desktop => ("8px 12px", "0.9rem"),
    };

    LinkStyle {
        color,
        background,
        padding,
        font_size,
    }
}

/// Inline style for one of the three hamburger bars (0 = top)
pub fn hamburger_bar_style(index: usize, menu_open: bool) -> String {
    let effect = match (index, menu_open) {
        (0, true) => "transform: translateY(10px) rotate(45deg);",
        (1, true) => "opacity: 0;",
        (2, true) => "transform: translateY(-10px) rotate(-45deg);",
        (1, false) => "opacity: 1;",
        _ => "transform: none;",
    };
    format!(
        "display: block; width: 100%; height: 3px; background-color: {}; border-radius: 3px; \
         transition: transform 0.3s ease, opacity 0.3s ease; {}",
        ACCENT, effect
    )
}

/// Inline style for the wrapper around the connect button and hamburger
pub fn right_section_style(viewport: Viewport) -> &'static str {
    match viewport {
        Viewport::Mobile => {
            "display: flex; align-items: center; gap: 15px; flex: 1; justify-content: center; position: relative;"
        }
        Viewport::Desktop => "display: flex; align-items: center; gap: 15px;",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_breakpoint() {
        assert_eq!(Viewport::from_width(375.0), Viewport::Mobile);
        assert_eq!(Viewport::from_width(992.0), Viewport::Mobile);
        assert_eq!(Viewport::from_width(993.0), Viewport::Desktop);
    }

    #[test]
    fn test_active_link_inverts_colors() {
        let active = nav_link_style(true, Viewport::Desktop);
        assert_eq!(active.color, BACKGROUND);
        assert_eq!(active.background, ACCENT);

        let inactive = nav_link_style(false, Viewport::Desktop);
        assert_eq!(inactive.color, ACCENT);
        assert_eq!(inactive.background, "transparent");
    }

    #[test]
    fn test_mobile_links_are_larger() {
        let mobile = nav_link_style(false, Viewport::Mobile);
        assert_eq!(mobile.font_size, "1.32rem");
        assert_eq!(mobile.padding, "15px 20px");
        assert_eq!(nav_link_style(false, Viewport::Desktop).font_size, "0.9rem");
    }

    #[test]
    fn test_css_contains_descriptor() {
        let css = nav_link_style(true, Viewport::Mobile).to_css();
        assert!(css.contains("background-color: #ffb300"));
        assert!(css.contains("font-size: 1.32rem"));
    }

    #[test]
    fn test_hamburger_bars() {
        assert!(hamburger_bar_style(0, true).contains("rotate(45deg)"));
        assert!(hamburger_bar_style(1, true).contains("opacity: 0;"));
        assert!(hamburger_bar_style(2, false).contains("transform: none;"));
    }
}
