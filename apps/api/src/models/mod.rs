pub mod resume;
pub mod theme;

pub use resume::{Skill, TimelineEntry, UserData};
pub use theme::ThemeColor;
