//! Ray casting against building pick volumes.

use bevy::prelude::*;

/// Distance along `dir` to the first intersection with the box, or `None` if
/// the ray misses. A ray starting inside the box hits at 0.
pub fn ray_box(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let (o, d, lo, hi) = (origin[axis], dir[axis], min[axis], max[axis]);
        if d.abs() < f32::EPSILON {
            // Parallel to this slab
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (t0, t1) = {
            let a = (lo - o) * inv;
            let b = (hi - o) * inv;
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        };
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(t_near.max(0.0))
}

/// Closest candidate whose box the ray crosses.
pub fn nearest_hit<T>(
    origin: Vec3,
    dir: Vec3,
    candidates: impl IntoIterator<Item = (T, Vec3, Vec3)>,
) -> Option<(T, f32)> {
    candidates
        .into_iter()
        .filter_map(|(item, min, max)| ray_box(origin, dir, min, max).map(|t| (item, t)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
