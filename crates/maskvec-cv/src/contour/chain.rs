use maskvec_core::Point;

/// Drop the interior points of horizontal, vertical and diagonal runs.
///
/// Input is a closed chain of 8-connected boundary pixels. Only the points
/// where the step direction changes survive, so a filled rectangle reduces
/// to its four corners. The enclosed area is unchanged.
pub fn compress_chain(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let kept: Vec<Point> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            step(prev, cur) != step(cur, next)
        })
        .map(|i| points[i])
        .collect();

    if kept.is_empty() {
        // every step identical: a chain that never turns
        return vec![points[0]];
    }
    kept
}

fn step(from: Point, to: Point) -> (i32, i32) {
    ((to.x - from.x).signum(), (to.y - from.y).signum())
}
