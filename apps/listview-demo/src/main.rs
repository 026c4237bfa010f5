mod rows;
mod screen;

use anyhow::{Context, Result};
use listview_core::{
    EdgeInsets, ListView, ListViewConfig, Rect, RowIndex, ScrollAlignment, SectionDimensions,
};

use crate::rows::{bind_row, DemoRow};
use crate::screen::Screen;

const WINDOW: Rect = Rect::new(0.0, 0.0, 360.0, 640.0);
const SCROLL_STEP: f32 = 120.0;

#[cfg(feature = "logging")]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

/// Section row counts from the command line, `3 12 40` when none are given.
fn parse_sections() -> Result<SectionDimensions> {
    let counts = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<usize>()
                .with_context(|| format!("invalid row count '{arg}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    if counts.is_empty() {
        Ok(SectionDimensions::from([3, 12, 40]))
    } else {
        Ok(SectionDimensions::new(counts))
    }
}

fn present(title: &str, list: &mut ListView<DemoRow>, screen: &mut Screen) -> Result<()> {
    list.layout_if_needed();
    screen.apply(list.drain_commands())?;
    println!("--- {title} (offset {:.1}) ---", list.content_offset());
    println!("{}", screen.render(list));
    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let sections = parse_sections()?;
    let bounds = Rect::from_size(WINDOW.inset(EdgeInsets::uniform(16.0)).size());
    let mut list = ListView::new(ListViewConfig {
        bounds,
        clamp_scroll: true,
        ..Default::default()
    })
    .context("list configuration rejected")?;
    let mut screen = Screen::default();

    list.reload(sections, bind_row);
    log::info!(
        "{} rows in {} sections, content height {}",
        list.geometry().len(),
        list.sections().section_count(),
        list.content_height()
    );
    present("initial", &mut list, &mut screen)?;

    while list.content_offset() < list.max_content_offset() {
        list.scroll_by(SCROLL_STEP);
        list.layout_if_needed();
        screen.apply(list.drain_commands())?;
    }
    present("bottom", &mut list, &mut screen)?;

    let target = RowIndex::new(1, 5);
    if list.scroll_to_row(target, ScrollAlignment::Center) {
        present(&format!("centered on {target}"), &mut list, &mut screen)?;
    }

    list.reload([2, 2], bind_row);
    present("after reload", &mut list, &mut screen)?;

    let stats = list.stats();
    log::info!("{stats:?}");
    println!(
        "created {} widgets for {} rows, {} reuses, {} moves applied",
        stats.widgets_created,
        list.geometry().len(),
        stats.reuse_count,
        screen.moves()
    );
    debug_assert_eq!(screen.attached(), list.widget_count());
    Ok(())
}
