use catalog::{Color, VisualStyle};

/// Circle marker as drawn on the 2D map.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapMarkerStyle {
    /// Pixels.
    pub radius: f64,
    pub fill_color: Color,
    pub fill_opacity: f32,
    pub stroke_color: Color,
    pub stroke_weight: f32,
    pub stroke_opacity: f32,
    pub class: &'static str,
}

impl MapMarkerStyle {
    pub const STROKE_WEIGHT: f32 = 2.0;
    pub const STROKE_OPACITY: f32 = 0.8;
    pub const FILL_OPACITY: f32 = 0.6;

    pub fn from_style(style: &VisualStyle) -> Self {
        Self {
            radius: style.radius,
            fill_color: style.color,
            fill_opacity: Self::FILL_OPACITY,
            stroke_color: Color::WHITE,
            stroke_weight: Self::STROKE_WEIGHT,
            stroke_opacity: Self::STROKE_OPACITY,
            class: style.style_class,
        }
    }
}

/// Sphere marker as drawn on the globe.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobeMarkerStyle {
    /// Sphere radius in globe units (the body has radius 5).
    pub size: f64,
    pub color: Color,
    pub emissive: [f32; 3],
}

impl GlobeMarkerStyle {
    pub const BASE_SIZE: f64 = 0.05;
    pub const SIZE_PER_PIXEL: f64 = 0.005;
    pub const EMISSIVE_FACTOR: f32 = 0.2;

    pub fn from_style(style: &VisualStyle) -> Self {
        Self {
            size: Self::BASE_SIZE + style.radius * Self::SIZE_PER_PIXEL,
            color: style.color,
            emissive: style.color.scaled(Self::EMISSIVE_FACTOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GlobeMarkerStyle, MapMarkerStyle};
    use catalog::{Color, VisualStyle};

    #[test]
    fn map_marker_has_white_outline() {
        let s = MapMarkerStyle::from_style(&VisualStyle::new(0xff4757, 8.0, "high-risk"));
        assert_eq!(s.radius, 8.0);
        assert_eq!(s.fill_color, Color(0xff4757));
        assert_eq!(s.stroke_color, Color::WHITE);
        assert_eq!(s.stroke_weight, 2.0);
        assert_eq!(s.class, "high-risk");
    }

    #[test]
    fn globe_marker_grows_with_style_radius() {
        let small = GlobeMarkerStyle::from_style(&VisualStyle::new(0x9e9e9e, 5.0, "default-sgi"));
        let large = GlobeMarkerStyle::from_style(&VisualStyle::new(0xf44336, 10.0, "high-solar"));
        assert!((small.size - 0.075).abs() < 1e-12);
        assert!((large.size - 0.1).abs() < 1e-12);
        assert_eq!(large.emissive, Color(0xf44336).scaled(0.2));
    }
}
