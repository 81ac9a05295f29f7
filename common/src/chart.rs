//! Chart data model
//!
//! Figures are described as plain data: sampled line series plus optional
//! markers and filled rectangles, grouped into panels. A rendering surface
//! turns a `Chart` into pixels; this crate never depends on how.

use glam::DVec2;

/// RGBA color, components in [0, 1]
pub type Rgba = [f32; 4];

/// Colors shared by the chapter figures
pub mod palette {
    use super::Rgba;

    pub const BLUE: Rgba = [0.29, 0.62, 1.0, 1.0];
    pub const RED: Rgba = [1.0, 0.42, 0.42, 1.0];
    pub const SKY: Rgba = [0.53, 0.81, 0.92, 1.0];
    pub const LIGHT_BLUE: Rgba = [0.53, 0.81, 0.98, 1.0];
    pub const GREEN: Rgba = [0.56, 0.93, 0.56, 1.0];
    pub const GOLD: Rgba = [1.0, 0.84, 0.0, 1.0];
    pub const GRAY: Rgba = [0.33, 0.33, 0.33, 1.0];
}

#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    pub color: Rgba,
    pub width: f32,
}

impl LineStyle {
    pub fn new(color: Rgba) -> Self {
        Self { color, width: 2.0 }
    }

    pub fn with_width(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// A sampled line: paired x/y arrays plus styling
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub style: LineStyle,
}

impl Series {
    /// `x` and `y` must be the same length.
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>, style: LineStyle) -> Self {
        debug_assert_eq!(x.len(), y.len(), "series arrays must be paired");
        Self {
            label: label.into(),
            x,
            y,
            style,
        }
    }

    /// Build a series from 2-D sample points.
    pub fn from_points(label: impl Into<String>, points: &[DVec2], style: LineStyle) -> Self {
        let x = points.iter().map(|p| p.x).collect();
        let y = points.iter().map(|p| p.y).collect();
        Self::new(label, x, y, style)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A single highlighted point, e.g. the current operating point on a curve
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub position: DVec2,
    pub size: f32,
    pub color: Rgba,
}

/// An axis-aligned filled rectangle, e.g. a rod in the contraction panel
#[derive(Debug, Clone, Copy)]
pub struct RectShape {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub fill: Rgba,
    pub opacity: f32,
}

/// One plotting area with its own axes
#[derive(Debug, Clone)]
pub struct Panel {
    pub x_label: String,
    pub y_label: String,
    /// Draw the y axis top-down (energy-level diagrams)
    pub invert_y: bool,
    pub series: Vec<Series>,
    pub markers: Vec<Marker>,
    pub rects: Vec<RectShape>,
}

impl Panel {
    pub fn new(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            invert_y: false,
            series: Vec::new(),
            markers: Vec::new(),
            rects: Vec::new(),
        }
    }
}

/// A complete figure: one panel for line plots, several for stacked layouts
#[derive(Debug, Clone)]
pub struct Chart {
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Chart {
    pub fn single(title: impl Into<String>, panel: Panel) -> Self {
        Self {
            title: title.into(),
            panels: vec![panel],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_from_points_splits_coordinates() {
        let pts = [DVec2::new(1.0, 10.0), DVec2::new(2.0, 20.0)];
        let s = Series::from_points("edge", &pts, LineStyle::new(palette::BLUE));
        assert_eq!(s.x, vec![1.0, 2.0]);
        assert_eq!(s.y, vec![10.0, 20.0]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn single_panel_chart() {
        let chart = Chart::single("pattern", Panel::new("x (mm)", "I"));
        assert_eq!(chart.panels.len(), 1);
        assert!(!chart.panels[0].invert_y);
    }
}
