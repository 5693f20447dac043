//! Result presentation contract.
//!
//! Each solver group owns one result surface. The core never renders
//! anything itself; it hands a [`Message`] to whatever implements
//! [`ResultPresenter`] - a terminal front-end, a form adapter, or the
//! in-memory [`PanelBuffer`] used by tests.

use serde::{Deserialize, Serialize};

use crate::fields::FieldGroup;

/// The two shared result surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Panel {
    Soil,
    Runoff,
}

impl Panel {
    /// External wire name of the result surface.
    pub fn name(self) -> &'static str {
        match self {
            Panel::Soil => "soilResult",
            Panel::Runoff => "runoffResult",
        }
    }

    /// The panel owned by a field group.
    pub fn for_group(group: FieldGroup) -> Self {
        match group {
            FieldGroup::Soil => Panel::Soil,
            FieldGroup::Runoff => Panel::Runoff,
        }
    }
}

/// A panel message: a headline, an optional subtext line with the
/// formula substitution, and an error flag controlling styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub headline: String,
    pub detail: Option<String>,
    pub is_error: bool,
}

impl Message {
    pub fn success(headline: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            detail: Some(detail.into()),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            headline: text.into(),
            detail: None,
            is_error: true,
        }
    }
}

/// Sink for panel updates.
///
/// `show` makes the panel visible with the given content; `hide` blanks
/// it. Implementations decide what "visible" means for their medium.
pub trait ResultPresenter {
    fn show(&mut self, panel: Panel, message: &Message);
    fn hide(&mut self, panel: Panel);
}

/// In-memory presenter retaining the last message per panel.
#[derive(Debug, Clone, Default)]
pub struct PanelBuffer {
    soil: Option<Message>,
    runoff: Option<Message>,
}

impl PanelBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of a panel, or `None` while it is hidden.
    pub fn visible(&self, panel: Panel) -> Option<&Message> {
        match panel {
            Panel::Soil => self.soil.as_ref(),
            Panel::Runoff => self.runoff.as_ref(),
        }
    }

    fn slot(&mut self, panel: Panel) -> &mut Option<Message> {
        match panel {
            Panel::Soil => &mut self.soil,
            Panel::Runoff => &mut self.runoff,
        }
    }
}

impl ResultPresenter for PanelBuffer {
    fn show(&mut self, panel: Panel, message: &Message) {
        *self.slot(panel) = Some(message.clone());
    }

    fn hide(&mut self, panel: Panel) {
        *self.slot(panel) = None;
    }
}
