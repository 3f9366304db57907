//! # Branding Resolver
//!
//! Turns a size/variant request for the identity mark into concrete visual
//! tokens. Pure lookup tables, no state.

use serde::{Deserialize, Serialize};

use crate::color::Color;

const GRAY_900: Color = Color::rgb(0x11, 0x18, 0x27);
const GRAY_500: Color = Color::rgb(0x6B, 0x72, 0x80);
const GRAY_300: Color = Color::rgb(0xD1, 0xD5, 0xDB);
const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
const ORANGE_600: Color = Color::rgb(0xEA, 0x58, 0x0C);
const ORANGE_400: Color = Color::rgb(0xFB, 0x92, 0x3C);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl SizeClass {
    pub const ALL: [SizeClass; 4] = [
        SizeClass::Small,
        SizeClass::Medium,
        SizeClass::Large,
        SizeClass::ExtraLarge,
    ];

    /// Icon edge length in CSS pixels and name text size in rem.
    fn metrics(self) -> (u16, f32) {
        match self {
            SizeClass::Small => (32, 1.125),
            SizeClass::Medium => (40, 1.25),
            SizeClass::Large => (48, 1.5),
            SizeClass::ExtraLarge => (64, 1.875),
        }
    }
}

/// Visual treatment of the mark. `Inverted` is for dark backgrounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Default,
    Inverted,
    Dark,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Default, Variant::Inverted, Variant::Dark];

    fn palette(self) -> (Color, Color) {
        match self {
            Variant::Default | Variant::Dark => (GRAY_900, ORANGE_600),
            Variant::Inverted => (WHITE, ORANGE_400),
        }
    }
}

/// Requested rendering of the identity mark. Defaults to a medium mark with text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingConfig {
    pub size_class: SizeClass,
    pub variant: Variant,
    pub show_text: bool,
}

impl BrandingConfig {
    pub fn new(size_class: SizeClass, variant: Variant, show_text: bool) -> Self {
        Self {
            size_class,
            variant,
            show_text,
        }
    }

    pub fn resolve(&self) -> BrandingDescriptor {
        resolve(self.size_class, self.variant, self.show_text)
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self::new(SizeClass::default(), Variant::default(), true)
    }
}

/// Concrete tokens for one rendering of the mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrandingDescriptor {
    pub icon_dimension: u16,
    pub text_scale: f32,
    pub primary_color: Color,
    pub accent_color: Color,
    pub secondary_label_color: Color,
    /// The tagline under the name; only the two largest sizes have room for it.
    pub secondary_label_visible: bool,
    pub show_text: bool,
}

/// Resolve the mark's tokens. Total over every size/variant pair.
pub fn resolve(size_class: SizeClass, variant: Variant, show_text: bool) -> BrandingDescriptor {
    let (icon_dimension, text_scale) = size_class.metrics();
    let (primary_color, accent_color) = variant.palette();
    let secondary_label_color = match variant {
        Variant::Inverted => GRAY_300,
        Variant::Default | Variant::Dark => GRAY_500,
    };

    BrandingDescriptor {
        icon_dimension,
        text_scale,
        primary_color,
        accent_color,
        secondary_label_color,
        secondary_label_visible: matches!(size_class, SizeClass::Large | SizeClass::ExtraLarge),
        show_text,
    }
}
