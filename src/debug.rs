use procr_ansi_term::{Color, Style};
use std::fmt;

use crate::{point::Point, rect::Rect};

const STYLE_TYPE_NAME: Style = Style::new().bold().fg(Color::Purple);
const STYLE_POINT: Style = Style::new().fg(Color::Cyan);

#[macro_export]
macro_rules! info_label {
    ($label:literal) => {
        ::procr_ansi_term::Style::new()
            .bold()
            .fg(::procr_ansi_term::Color::Yellow)
            .paint(format!("({})", $label))
    };
}

pub fn debug_with(
    f: impl Fn(&mut fmt::Formatter) -> fmt::Result,
) -> impl fmt::Debug {
    struct DebugWith<F>(F);

    impl<F> fmt::Debug for DebugWith<F>
    where
        F: Fn(&mut fmt::Formatter) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0(f)
        }
    }

    DebugWith(f)
}

/// Styled point list, for verbose logging of the input.
pub fn debug_points(
    points: &[Point],
) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + '_ {
    move |f| {
        f.write_str("[")?;
        for (ix, p) in points.iter().enumerate() {
            if ix > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", STYLE_POINT.paint(format!("{:?}", p)))?;
        }
        f.write_str("]")
    }
}

#[macro_export]
macro_rules! dbg_points {
    ($points:expr) => {
        $crate::debug::debug_with($crate::debug::debug_points($points))
    };
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("@({},{})", self.x, self.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{:?}..{:?}]",
            STYLE_TYPE_NAME.paint("R"),
            self.left(),
            self.right()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_formatting() {
        let p = Point::new(-2, 7);
        assert_eq!(format!("{:?}", p), "@(-2,7)");
        assert_eq!(p.to_string(), "@(-2,7)");
    }

    #[test]
    fn point_list_contains_every_point() {
        let points = [Point::new(0, 1), Point::new(2, 3)];
        let out = format!("{:?}", crate::dbg_points!(&points));
        assert!(out.contains("@(0,1)"));
        assert!(out.contains("@(2,3)"));
    }
}
