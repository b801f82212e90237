// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the search bar and the toast stack.
//!
//! ```
//! use libris::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let hover = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::GRAY_400
//! };
//! let gap = spacing::MD;
//! # let _ = (hover, gap);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    /// Row hover wash
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
}

/// 4px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Severity glyph box in a toast.
    pub const ICON_MD: f32 = 24.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Width of the search field plus its button.
    pub const SEARCH_WIDTH: f32 = 480.0;
    /// Dropdown rows beyond this height scroll.
    pub const DROPDOWN_MAX_HEIGHT: f32 = 320.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    /// Search field and result titles
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Result detail line
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Dropdown outline
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    /// Dropdown panel
    pub const SM: Shadow = Shadow {
        color: palette::SHADOW,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Toasts
    pub const MD: Shadow = Shadow {
        color: palette::SHADOW,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
