use core::f32::consts::{FRAC_PI_2, TAU};

use resvg::tiny_skia;

use crate::coords::{Transform2d, Vec2};

/// Path element in device space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Seg {
    Move(Vec2),
    Line(Vec2),
    Cubic(Vec2, Vec2, Vec2),
    Close,
}

/// Canvas-style current path.
///
/// Points are mapped through the transform active when they are added, as a
/// canvas does, so later `translate`/`rotate` calls do not move existing
/// geometry.
#[derive(Debug, Default)]
pub(crate) struct PathSink {
    segs: Vec<Seg>,
    current: Option<Vec2>,
    subpath_start: Option<Vec2>,
}

impl PathSink {
    pub(crate) fn clear(&mut self) {
        self.segs.clear();
        self.current = None;
        self.subpath_start = None;
    }

    #[cfg(test)]
    pub(crate) fn segs(&self) -> &[Seg] {
        &self.segs
    }

    pub(crate) fn move_to(&mut self, p: Vec2) {
        self.segs.push(Seg::Move(p));
        self.current = Some(p);
        self.subpath_start = Some(p);
    }

    /// Without a current point this behaves like `move_to`.
    pub(crate) fn line_to(&mut self, p: Vec2) {
        if self.current.is_none() {
            self.move_to(p);
            return;
        }
        self.segs.push(Seg::Line(p));
        self.current = Some(p);
    }

    pub(crate) fn close(&mut self) {
        if let Some(start) = self.subpath_start {
            self.segs.push(Seg::Close);
            self.current = Some(start);
        }
    }

    /// Appends a clockwise arc as cubic Béziers of at most a quarter turn each.
    pub(crate) fn arc(&mut self, t: Transform2d, center: Vec2, radius: f32, start: f32, end: f32) {
        let radius = radius.max(0.0);
        let sweep = if end - start >= TAU { TAU } else { (end - start).rem_euclid(TAU) };

        let on_circle = |a: f32| center + Vec2::from_angle_x(a) * radius;
        let first = t.apply(on_circle(start));
        if self.current.is_some() {
            self.line_to(first);
        } else {
            self.move_to(first);
        }
        if sweep <= 0.0 || radius <= 0.0 {
            return;
        }

        let n = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
        let step = sweep / n as f32;
        let k = 4.0 / 3.0 * (step / 4.0).tan() * radius;

        for i in 0..n {
            let a0 = start + step * i as f32;
            let a1 = a0 + step;
            let p0 = on_circle(a0);
            let p3 = on_circle(a1);
            // Tangent at angle a is (-sin a, cos a) for a clockwise sweep in +Y-down space.
            let t0 = Vec2::new(-a0.sin(), a0.cos());
            let t1 = Vec2::new(-a1.sin(), a1.cos());
            let c1 = t.apply(p0 + t0 * k);
            let c2 = t.apply(p3 - t1 * k);
            let p3 = t.apply(p3);
            self.segs.push(Seg::Cubic(c1, c2, p3));
            self.current = Some(p3);
        }
    }

    /// Builds a tiny-skia path. Returns `None` for empty or degenerate paths.
    pub(crate) fn to_path(&self) -> Option<tiny_skia::Path> {
        let mut pb = tiny_skia::PathBuilder::new();
        for seg in &self.segs {
            match *seg {
                Seg::Move(p) => pb.move_to(p.x, p.y),
                Seg::Line(p) => pb.line_to(p.x, p.y),
                Seg::Cubic(c1, c2, p) => pb.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
                Seg::Close => pb.close(),
            }
        }
        pb.finish()
    }
}
