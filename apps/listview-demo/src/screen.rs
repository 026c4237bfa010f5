//! Console stand-in for a view tree.

use std::collections::BTreeMap;

use anyhow::{bail, ensure, Result};
use listview_core::{ListView, PlacementCommand, Rect, WidgetId};

use crate::rows::DemoRow;

#[derive(Debug, Default)]
struct Slot {
    visible: bool,
    frame: Option<Rect>,
}

/// Applies placement commands and prints what a user would see.
#[derive(Debug, Default)]
pub struct Screen {
    slots: BTreeMap<WidgetId, Slot>,
    moves: usize,
}

impl Screen {
    pub fn apply(&mut self, commands: Vec<PlacementCommand>) -> Result<()> {
        for command in commands {
            match command {
                PlacementCommand::Attach { widget, kind } => {
                    ensure!(
                        !self.slots.contains_key(&widget),
                        "widget {widget} attached twice"
                    );
                    log::debug!("attaching {kind} widget {widget}");
                    self.slots.insert(widget, Slot::default());
                }
                PlacementCommand::Show { widget } => self.slot(widget)?.visible = true,
                PlacementCommand::Hide { widget } => self.slot(widget)?.visible = false,
                PlacementCommand::Move { widget, frame } => {
                    self.slot(widget)?.frame = Some(frame);
                    self.moves += 1;
                }
            }
        }
        Ok(())
    }

    pub fn attached(&self) -> usize {
        self.slots.len()
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Visible rows top to bottom, positioned relative to the viewport.
    pub fn render(&self, list: &ListView<DemoRow>) -> String {
        let offset = list.content_offset();
        let mut lines: Vec<(f32, String)> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.visible)
            .filter_map(|(id, slot)| {
                let frame = slot.frame?;
                let row = list.widget(*id)?;
                Some((frame.y, format!("{:>7.1} | {}", frame.y - offset, row)))
            })
            .collect();
        lines.sort_by(|a, b| a.0.total_cmp(&b.0));
        lines
            .into_iter()
            .map(|(_, line)| line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn slot(&mut self, widget: WidgetId) -> Result<&mut Slot> {
        match self.slots.get_mut(&widget) {
            Some(slot) => Ok(slot),
            None => bail!("widget {widget} used before it was attached"),
        }
    }
}
