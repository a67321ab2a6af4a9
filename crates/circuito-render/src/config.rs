use crate::geom::{Rect, Size, point};
use crate::{Error, Result};

/// Layout of the altimetry image.
///
/// All lengths are render-space pixels. The plot area is the canvas inset by `margin` on every
/// side; grid lines subdivide it into `horizontal_divisions` altitude bands and
/// `vertical_divisions` distance bands.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub horizontal_divisions: u32,
    pub vertical_divisions: u32,
    pub marker_radius: f64,
    /// Emitted as the SVG `<title>`.
    pub document_title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            margin: 80.0,
            horizontal_divisions: 5,
            vertical_divisions: 10,
            marker_radius: 5.0,
            document_title: "Perfil Altimétrico del Circuito".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(Error::InvalidConfig { message });

        for (name, v) in [
            ("width", self.width),
            ("height", self.height),
            ("margin", self.margin),
            ("marker radius", self.marker_radius),
        ] {
            if !v.is_finite() || v < 0.0 {
                return invalid(format!("{name} must be a finite, non-negative number (got {v})"));
            }
        }
        if self.width <= 2.0 * self.margin || self.height <= 2.0 * self.margin {
            return invalid(format!(
                "canvas {}x{} leaves no plot area inside a margin of {}",
                self.width, self.height, self.margin
            ));
        }
        if self.horizontal_divisions == 0 || self.vertical_divisions == 0 {
            return invalid("grid divisions must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn canvas(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Canvas inset by the margin on every side.
    pub fn plot_area(&self) -> Rect {
        Rect::new(
            point(self.margin, self.margin),
            Size::new(
                self.width - 2.0 * self.margin,
                self.height - 2.0 * self.margin,
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = RenderConfig::default();
        cfg.validate().unwrap();
        let plot = cfg.plot_area();
        assert_eq!(plot.min_x(), 80.0);
        assert_eq!(plot.max_x(), 1120.0);
        assert_eq!(plot.max_y(), 520.0);
    }

    #[test]
    fn margin_swallowing_the_canvas_is_rejected() {
        let cfg = RenderConfig {
            width: 100.0,
            margin: 50.0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn zero_divisions_and_nan_sizes_are_rejected() {
        let cfg = RenderConfig {
            vertical_divisions: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = RenderConfig {
            height: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
