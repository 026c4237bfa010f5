//! Placement output consumed by the host.
//!
//! The list never touches the host's view tree directly. Every change to a
//! widget's attachment, visibility or frame is recorded as a
//! [`PlacementCommand`]; the host drains the log after each layout pass and
//! applies the commands in order.

use crate::pool::WidgetId;
use listview_geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementCommand {
    /// A newly constructed widget joins the host tree. Emitted once per widget.
    Attach {
        widget: WidgetId,
        kind: &'static str,
    },
    /// The widget becomes visible.
    Show { widget: WidgetId },
    /// The widget is hidden and parked for reuse.
    Hide { widget: WidgetId },
    /// The widget's frame changes.
    Move { widget: WidgetId, frame: Rect },
}

impl PlacementCommand {
    pub fn widget(&self) -> WidgetId {
        match self {
            PlacementCommand::Attach { widget, .. }
            | PlacementCommand::Show { widget }
            | PlacementCommand::Hide { widget }
            | PlacementCommand::Move { widget, .. } => *widget,
        }
    }
}

/// Commands recorded since the host last drained them.
#[derive(Debug, Default)]
pub struct PlacementLog {
    commands: Vec<PlacementCommand>,
}

impl PlacementLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PlacementCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn as_slice(&self) -> &[PlacementCommand] {
        &self.commands
    }

    /// Takes all pending commands, leaving the log empty.
    pub fn drain(&mut self) -> Vec<PlacementCommand> {
        std::mem::take(&mut self.commands)
    }
}
