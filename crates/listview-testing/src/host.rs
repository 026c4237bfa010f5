//! In-memory stand-in for a host view tree.
//!
//! [`TestHost`] applies [`PlacementCommand`]s the way a real host would and
//! rejects any command sequence a real host could not honor, such as showing
//! a widget that was never attached.

use std::collections::BTreeMap;
use std::fmt;

use listview_core::{PlacementCommand, Rect, WidgetId};

/// State of one widget in the host tree.
#[derive(Clone, Debug, PartialEq)]
pub struct HostNode {
    pub kind: &'static str,
    pub visible: bool,
    pub frame: Option<Rect>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum HostError {
    AlreadyAttached { widget: WidgetId },
    NotAttached { widget: WidgetId },
    AlreadyVisible { widget: WidgetId },
    AlreadyHidden { widget: WidgetId },
    /// A move that leaves the frame unchanged.
    RedundantMove { widget: WidgetId, frame: Rect },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::AlreadyAttached { widget } => {
                write!(f, "widget {widget} attached twice")
            }
            HostError::NotAttached { widget } => {
                write!(f, "widget {widget} used before it was attached")
            }
            HostError::AlreadyVisible { widget } => {
                write!(f, "widget {widget} shown while already visible")
            }
            HostError::AlreadyHidden { widget } => {
                write!(f, "widget {widget} hidden while already hidden")
            }
            HostError::RedundantMove { widget, frame } => {
                write!(f, "widget {widget} moved to its current frame {frame:?}")
            }
        }
    }
}

impl std::error::Error for HostError {}

#[derive(Debug, Default)]
pub struct TestHost {
    nodes: BTreeMap<WidgetId, HostNode>,
    attaches: usize,
    moves: usize,
    applied: usize,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, command: PlacementCommand) -> Result<(), HostError> {
        match command {
            PlacementCommand::Attach { widget, kind } => {
                if self.nodes.contains_key(&widget) {
                    return Err(HostError::AlreadyAttached { widget });
                }
                self.nodes.insert(
                    widget,
                    HostNode {
                        kind,
                        visible: false,
                        frame: None,
                    },
                );
                self.attaches += 1;
            }
            PlacementCommand::Show { widget } => {
                let node = self.node_mut(widget)?;
                if node.visible {
                    return Err(HostError::AlreadyVisible { widget });
                }
                node.visible = true;
            }
            PlacementCommand::Hide { widget } => {
                let node = self.node_mut(widget)?;
                if !node.visible {
                    return Err(HostError::AlreadyHidden { widget });
                }
                node.visible = false;
            }
            PlacementCommand::Move { widget, frame } => {
                let node = self.node_mut(widget)?;
                if node.frame == Some(frame) {
                    return Err(HostError::RedundantMove { widget, frame });
                }
                node.frame = Some(frame);
                self.moves += 1;
            }
        }
        self.applied += 1;
        log::trace!("host applied {command:?}");
        Ok(())
    }

    /// Applies commands in order, stopping at the first rejected one.
    pub fn apply_all(
        &mut self,
        commands: impl IntoIterator<Item = PlacementCommand>,
    ) -> Result<(), HostError> {
        commands
            .into_iter()
            .try_for_each(|command| self.apply(command))
    }

    pub fn node(&self, widget: WidgetId) -> Option<&HostNode> {
        self.nodes.get(&widget)
    }

    /// Visible widgets and their frames, top to bottom.
    pub fn visible_nodes(&self) -> Vec<(WidgetId, Rect)> {
        let mut visible: Vec<(WidgetId, Rect)> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.visible)
            .filter_map(|(id, node)| node.frame.map(|frame| (*id, frame)))
            .collect();
        visible.sort_by(|a, b| a.1.y.total_cmp(&b.1.y));
        visible
    }

    pub fn visible_count(&self) -> usize {
        self.nodes.values().filter(|node| node.visible).count()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn attach_count(&self) -> usize {
        self.attaches
    }

    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn applied_count(&self) -> usize {
        self.applied
    }

    /// Dump the host tree as text for debugging
    pub fn dump_tree(&self) -> String {
        let mut out = String::new();
        for (id, node) in &self.nodes {
            let state = if node.visible { "shown" } else { "hidden" };
            match node.frame {
                Some(frame) => out.push_str(&format!(
                    "{id} {} {state} @ ({}, {}) {}x{}\n",
                    node.kind, frame.x, frame.y, frame.width, frame.height
                )),
                None => out.push_str(&format!("{id} {} {state} unplaced\n", node.kind)),
            }
        }
        out
    }

    fn node_mut(&mut self, widget: WidgetId) -> Result<&mut HostNode, HostError> {
        self.nodes
            .get_mut(&widget)
            .ok_or(HostError::NotAttached { widget })
    }
}
