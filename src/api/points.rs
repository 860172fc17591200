use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub fn new(x: isize, y: isize) -> Point { Point { x, y } }

    /// Creates a point with X and Y equal to zero.
    pub const fn zero() -> Self { Point { x: 0, y: 0 } }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point { Point::new(self.x + other.x, self.y + other.y) }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point { Point::new(self.x - other.x, self.y - other.y) }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, other: Point) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output { Point::new(-self.x, -self.y) }
}

impl From<(isize, isize)> for Point {
    fn from(other: (isize, isize)) -> Self { Point::new(other.0, other.1) }
}

impl From<Point> for (isize, isize) {
    fn from(other: Point) -> (isize, isize) { (other.x, other.y) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3, 4);
        let b = Point::new(-1, 2);
        assert_eq!(a + b, Point::new(2, 6));
        assert_eq!(a - b, Point::new(4, 2));
        assert_eq!(-a, Point::new(-3, -4));
        assert_eq!(Point::from((3, 4)), a);
    }
}
