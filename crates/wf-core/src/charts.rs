//! SVG geometry for the small charts on the dashboard and cost pages.
//!
//! Everything is computed in a caller-supplied view box so the UI only has
//! to emit `<polyline>`, `<path>` and `<rect>` elements.

use std::f64::consts::PI;

/// One named value with its fill colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Plot area inside the view box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.height - self.padding;
        }
        self.height - self.padding - (value / max) * self.inner_height()
    }
}

/// Round an axis maximum up to 1, 2 or 5 times a power of ten.
pub fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let scaled = max / magnitude;
    let step = if scaled <= 1.0 {
        1.0
    } else if scaled <= 2.0 {
        2.0
    } else if scaled <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

/// Evenly spaced points for a line chart, scaled against `nice_ceiling`.
pub fn line_points(values: &[f64], frame: Frame) -> Vec<Point> {
    let max = nice_ceiling(values.iter().copied().fold(0.0, f64::max));
    let step = if values.len() > 1 {
        frame.inner_width() / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Point {
            x: frame.padding + step * i as f64,
            y: frame.y_for(*v, max),
        })
        .collect()
}

/// `points` attribute of an SVG `<polyline>`.
pub fn polyline(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Bars
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One bar per value; `gap` is the fraction of each slot left empty.
pub fn bars(values: &[f64], frame: Frame, gap: f64) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = nice_ceiling(values.iter().copied().fold(0.0, f64::max));
    let slot = frame.inner_width() / values.len() as f64;
    let width = slot * (1.0 - gap.clamp(0.0, 0.9));
    let base = frame.height - frame.padding;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = frame.y_for(*v, max);
            Bar {
                x: frame.padding + slot * i as f64 + (slot - width) / 2.0,
                y,
                width,
                height: base - y,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Donut
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub label: &'static str,
    pub color: &'static str,
    /// Whole-number share, as shown next to the slice.
    pub percent: u32,
    /// SVG path data of the ring segment.
    pub path: String,
    /// Where the percentage label goes.
    pub anchor: Point,
}

/// Share of each slice in whole percent, rounded half away from zero.
pub fn shares(slices: &[Slice]) -> Vec<u32> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    slices
        .iter()
        .map(|s| {
            if total <= 0.0 {
                0
            } else {
                (s.value / total * 100.0).round() as u32
            }
        })
        .collect()
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    // Angle 0 is twelve o'clock; positive turns clockwise.
    Point {
        x: center.x + radius * angle.sin(),
        y: center.y - radius * angle.cos(),
    }
}

/// Ring segments of a donut chart, clockwise from twelve o'clock.
pub fn donut(slices: &[Slice], center: Point, inner: f64, outer: f64) -> Vec<Arc> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let percents = shares(slices);
    let mut start = 0.0;
    slices
        .iter()
        .zip(percents)
        .map(|(slice, percent)| {
            // A full circle cannot be drawn with one arc command.
            let sweep = (slice.value / total * 2.0 * PI).min(2.0 * PI - 1e-4);
            let end = start + sweep;
            let large = if sweep > PI { 1 } else { 0 };
            let o0 = polar(center, outer, start);
            let o1 = polar(center, outer, end);
            let i1 = polar(center, inner, end);
            let i0 = polar(center, inner, start);
            let path = format!(
                "M {:.2} {:.2} A {outer} {outer} 0 {large} 1 {:.2} {:.2} L {:.2} {:.2} A {inner} {inner} 0 {large} 0 {:.2} {:.2} Z",
                o0.x, o0.y, o1.x, o1.y, i1.x, i1.y, i0.x, i0.y,
            );
            let anchor = polar(center, outer + 14.0, start + sweep / 2.0);
            start = end;
            Arc {
                label: slice.label,
                color: slice.color,
                percent,
                path,
                anchor,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODELS: [Slice; 4] = [
        Slice { label: "GPT-4", value: 320.0, color: "#2563EB" },
        Slice { label: "GPT-3.5", value: 180.0, color: "#60A5FA" },
        Slice { label: "Claude", value: 150.0, color: "#93C5FD" },
        Slice { label: "Mistral", value: 100.0, color: "#BFDBFE" },
    ];

    #[test]
    fn nice_ceiling_rounds_up() {
        assert_eq!(nice_ceiling(210.0), 500.0);
        assert_eq!(nice_ceiling(189_000.0), 200_000.0);
        assert_eq!(nice_ceiling(100.0), 100.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
    }

    #[test]
    fn line_spans_the_frame() {
        let pts = line_points(&[0.0, 250.0, 500.0], Frame::new(200.0, 100.0, 10.0));
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], Point { x: 10.0, y: 90.0 });
        assert_eq!(pts[1], Point { x: 100.0, y: 50.0 });
        assert_eq!(pts[2], Point { x: 190.0, y: 10.0 });
        assert_eq!(polyline(&pts[..2]), "10.0,90.0 100.0,50.0");
    }

    #[test]
    fn bars_rest_on_the_baseline() {
        let out = bars(&[50.0, 100.0], Frame::new(120.0, 100.0, 10.0), 0.5);
        assert_eq!(out.len(), 2);
        for bar in &out {
            assert!((bar.y + bar.height - 90.0).abs() < 1e-9);
            assert!((bar.width - 25.0).abs() < 1e-9);
        }
        assert!((out[1].height - 80.0).abs() < 1e-9);
        assert!(bars(&[], Frame::new(1.0, 1.0, 0.0), 0.1).is_empty());
    }

    #[test]
    fn shares_round_to_whole_percent() {
        assert_eq!(shares(&MODELS), vec![43, 24, 20, 13]);
    }

    #[test]
    fn donut_has_one_arc_per_slice() {
        let arcs = donut(&MODELS, Point { x: 100.0, y: 100.0 }, 60.0, 80.0);
        assert_eq!(arcs.len(), 4);
        assert!(arcs[0].path.starts_with("M 100.00 20.00"));
        assert_eq!(arcs[3].label, "Mistral");
        assert!(donut(&[], Point { x: 0.0, y: 0.0 }, 1.0, 2.0).is_empty());
    }
}
