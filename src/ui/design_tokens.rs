// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the catalog screens.

## Organization

- **Palette**: Base and semantic colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use catalog_lens::ui::design_tokens::{palette, spacing};

let accent = palette::PRIMARY_500;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (catalog purple scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.93, 0.91, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.55, 0.47, 0.96);
    pub const PRIMARY_500: Color = Color::from_rgb(0.44, 0.34, 0.93);
    pub const PRIMARY_600: Color = Color::from_rgb(0.35, 0.26, 0.82);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_XL: f32 = 48.0;

    /// Diameter of the page loading indicator.
    pub const LOADER: f32 = ICON_XL;

    /// Width of a single page-number link.
    pub const PAGE_LINK_WIDTH: f32 = 36.0;

    /// Upper bound for the empty-state panel.
    pub const EMPTY_STATE_MAX_WIDTH: f32 = 520.0;

    /// Upper bound for asset cards on wide windows.
    pub const CARD_MAX_WIDTH: f32 = 960.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Semantic font sizes: titles for headings, body for content, caption
    //! for badges and supporting metadata.

    /// Page heading
    pub const TITLE_LG: f32 = 26.0;

    /// Card title, empty-state heading
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Secondary labels (FQN, metadata row)
    pub const BODY_SM: f32 = 13.0;

    /// Badges, tags
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..Color::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(sizing::CARD_MAX_WIDTH > sizing::EMPTY_STATE_MAX_WIDTH);
};
