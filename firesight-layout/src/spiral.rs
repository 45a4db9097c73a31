/// Offsets along an archimedean spiral around the origin.
///
/// Step `i` sits at `t = 0.1 * i * direction` and yields `(e * t * cos t, t * sin t)`,
/// where `e` is the canvas aspect ratio, so the spiral fills wide canvases
/// horizontally before vertically. The first offset is always `(0, 0)`.
#[derive(Debug, Clone)]
pub struct ArchimedeanSpiral {
    aspect: f32,
    direction: f32,
    step: usize,
}

impl ArchimedeanSpiral {
    const STEP_ANGLE: f32 = 0.1;

    pub fn new(width: f32, height: f32, clockwise: bool) -> Self {
        Self {
            aspect: width / height,
            direction: if clockwise { 1.0 } else { -1.0 },
            step: 0,
        }
    }
}

impl Iterator for ArchimedeanSpiral {
    type Item = [f32; 2];

    fn next(&mut self) -> Option<Self::Item> {
        let t = self.step as f32 * Self::STEP_ANGLE * self.direction;
        self.step += 1;
        Some([self.aspect * t * t.cos(), t * t.sin()])
    }
}
