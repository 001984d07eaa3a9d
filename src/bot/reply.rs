use teloxide::utils::html;

use crate::status::StatusColor;

/// Embed-style reply: a title, a body and an accent color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub title: String,
    pub description: String,
    pub color: StatusColor,
}

impl Reply {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        color: StatusColor,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color,
        }
    }

    /// Telegram has no embeds, so the color becomes a leading marker
    pub fn to_html(&self) -> String {
        format!(
            "{} {}\n{}",
            self.color.marker(),
            html::bold(&html::escape(&self.title)),
            html::escape(&self.description)
        )
    }
}
