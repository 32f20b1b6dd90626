// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and radius the carousel uses lives here so the
card, indicator and screen layout stay visually consistent.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Card, icon and indicator sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Card elevation

## Examples

```
use iced_slider::ui::design_tokens::{palette, sizing, spacing};

let stride = sizing::CARD_WIDTH + spacing::LG;
assert_eq!(stride, 324.0);
let _accent = palette::FAVORITE_500;
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.17);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_50: Color = Color::from_rgb(0.96, 0.96, 0.97);

    // Favorite heart
    pub const FAVORITE_500: Color = Color::from_rgb(0.898, 0.224, 0.208);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Shadow strength under a fully opaque card.
    pub const CARD_SHADOW: f32 = 0.25;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Heart icon at full scale.
    pub const ICON_MD: f32 = 24.0;

    /// Card width at full scale.
    pub const CARD_WIDTH: f32 = 300.0;

    /// Image area height at full scale.
    pub const CARD_IMAGE_HEIGHT: f32 = 250.0;

    /// Diameter of an indicator dot.
    pub const INDICATOR_DOT: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Card title ("Image N") at full scale.
    pub const CARD_TITLE: f32 = 24.0;

    /// Standard body - card description
    pub const BODY: f32 = 14.0;

    /// Caption - placeholder messages
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const CARD: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Card elevation.
    pub const CARD: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 5.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::CARD_SHADOW > 0.0 && opacity::CARD_SHADOW < 1.0);

    assert!(sizing::CARD_WIDTH > sizing::ICON_MD + 2.0 * spacing::XS);
    assert!(radius::CARD * 2.0 < sizing::CARD_IMAGE_HEIGHT);

    assert!(typography::CARD_TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
