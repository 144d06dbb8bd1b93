use crate::math::{Point3, Spectrum};

/// Debug geometry sink for visualizing where bounce rays land.
pub trait DebugDraw {
    fn draw_sphere(&mut self, center: Point3<f32>, radius: f32, segments: u32, color: Spectrum<f32>);
    fn draw_line(&mut self, from: Point3<f32>, to: Point3<f32>, color: Spectrum<f32>);
}

/// Discards everything.
pub struct NoDebugDraw;

impl DebugDraw for NoDebugDraw {
    fn draw_sphere(&mut self, _: Point3<f32>, _: f32, _: u32, _: Spectrum<f32>) {}
    fn draw_line(&mut self, _: Point3<f32>, _: Point3<f32>, _: Spectrum<f32>) {}
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DebugPrimitive {
    Sphere {
        center: Point3<f32>,
        radius: f32,
        segments: u32,
        color: Spectrum<f32>,
    },
    Line {
        from: Point3<f32>,
        to: Point3<f32>,
        color: Spectrum<f32>,
    },
}

/// Keeps drawn primitives around until cleared.
#[derive(Default)]
pub struct RecordingDebugDraw {
    pub primitives: Vec<DebugPrimitive>,
}

impl RecordingDebugDraw {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    pub fn sphere_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DebugPrimitive::Sphere { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DebugPrimitive::Line { .. }))
            .count()
    }
}

impl DebugDraw for RecordingDebugDraw {
    fn draw_sphere(&mut self, center: Point3<f32>, radius: f32, segments: u32, color: Spectrum<f32>) {
        self.primitives.push(DebugPrimitive::Sphere {
            center,
            radius,
            segments,
            color,
        });
    }

    fn draw_line(&mut self, from: Point3<f32>, to: Point3<f32>, color: Spectrum<f32>) {
        self.primitives.push(DebugPrimitive::Line { from, to, color });
    }
}
