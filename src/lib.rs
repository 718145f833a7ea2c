pub mod config;
pub mod counter;
pub mod debug;
pub mod index;
pub mod input;
pub mod output;
pub mod point;
pub mod rect;
pub mod run;

pub use counter::{
    count_rectangles, count_rectangles_ordered, count_rectangles_with,
    IndexKind, RectangleCounter,
};
pub use index::{AxisIndex, MembershipIndex, OrderedIndex};
pub use input::{parse_points, read_points};
pub use output::write_count;
pub use point::Point;
pub use rect::Rect;
pub use run::run;
