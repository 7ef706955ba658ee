use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Midpoint of the given side.
    pub fn anchor(&self, side: Side) -> Point {
        let Point { x, y } = self.origin;
        let Size { width, height } = self.size;
        match side {
            Side::Top => Point::new(x + width / 2.0, y),
            Side::Right => Point::new(x + width, y + height / 2.0),
            Side::Bottom => Point::new(x + width / 2.0, y + height),
            Side::Left => Point::new(x, y + height / 2.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub source: Point,
    pub source_side: Side,
    pub target: Point,
    pub target_side: Side,
}

/// Floating edge between two boxes. Attaches to the facing sides on the axis
/// where the centers are farther apart; ties go vertical.
pub fn connector(source: &Rect, target: &Rect) -> Connector {
    let a = source.center();
    let b = target.center();
    let horizontal = (a.x - b.x).abs();
    let vertical = (a.y - b.y).abs();

    let (source_side, target_side) = if horizontal > vertical {
        if a.x > b.x {
            (Side::Left, Side::Right)
        } else {
            (Side::Right, Side::Left)
        }
    } else if a.y > b.y {
        (Side::Top, Side::Bottom)
    } else {
        (Side::Bottom, Side::Top)
    };

    Connector {
        source: source.anchor(source_side),
        source_side,
        target: target.anchor(target_side),
        target_side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn stacked_boxes_use_top_and_bottom() {
        let parent = rect(0.0, 0.0, 100.0, 50.0);
        let child = rect(0.0, 200.0, 100.0, 50.0);
        let c = connector(&parent, &child);
        assert_eq!(c.source_side, Side::Bottom);
        assert_eq!(c.target_side, Side::Top);
        assert_eq!(c.source, Point::new(50.0, 50.0));
        assert_eq!(c.target, Point::new(50.0, 200.0));
    }

    #[test]
    fn side_by_side_boxes_use_left_and_right() {
        let right = rect(400.0, 0.0, 100.0, 100.0);
        let left = rect(0.0, 20.0, 100.0, 100.0);
        let c = connector(&right, &left);
        assert_eq!((c.source_side, c.target_side), (Side::Left, Side::Right));
        assert_eq!(c.source, Point::new(400.0, 50.0));
        assert_eq!(c.target, Point::new(100.0, 70.0));
    }

    #[test]
    fn upward_edge_leaves_from_top() {
        let low = rect(0.0, 300.0, 10.0, 10.0);
        let high = rect(0.0, 0.0, 10.0, 10.0);
        let c = connector(&low, &high);
        assert_eq!((c.source_side, c.target_side), (Side::Top, Side::Bottom));
    }

    #[test]
    fn diagonal_tie_prefers_vertical() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(100.0, 100.0, 10.0, 10.0);
        assert_eq!(connector(&a, &b).source_side, Side::Bottom);
    }
}
