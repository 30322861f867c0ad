// Resume HTML rendering.
// Pure functions only: UserData in, self-contained HTML document out.

pub mod skyline;
mod styles;

use crate::models::UserData;

/// Templates selectable through the `resume_template` request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeTemplate {
    Skyline,
}

impl ResumeTemplate {
    /// Resolves the wire selector (e.g. `"skyline"`). Unknown selectors yield `None`.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "skyline" => Some(Self::Skyline),
            _ => None,
        }
    }

    pub fn render(self, user: &UserData) -> String {
        match self {
            Self::Skyline => skyline::render_skyline(user),
        }
    }
}
