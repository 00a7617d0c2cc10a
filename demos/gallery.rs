//! Builds a bordered application frame with a gridded center panel, runs
//! the layout hand-off down the tree, and emits the solved bounds plus a
//! metrics snapshot through the logging module.
//!
//! ```bash
//! cargo run --example gallery
//! ```

use std::sync::Arc;
use std::time::Instant;

use alcove::{
    Block, Border, Bounds, BoundsPatch, Component, ComponentRef, Grid, Insets, LogEvent, LogLevel,
    Logger, LoggingError, MemorySink, Panel, Result, component_ref,
};

fn main() -> Result<()> {
    let started = Instant::now();
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::new(sink.clone());

    // Center: a 2x2 grid of tiles inside its own panel.
    let tiles: Vec<ComponentRef> = (0..4)
        .map(|i| component_ref(Block::new(40.0 + i as f32 * 10.0, 30.0)))
        .collect();
    let center = component_ref(
        Panel::new()
            .with_insets(Insets::uniform(2.0))
            .with_layout(Grid::new().rows(2).hgap(4.0).vgap(4.0).items(tiles.clone()))
            .with_children(tiles.clone()),
    );

    let header = component_ref(Block::new(0.0, 24.0));
    let footer = component_ref(Block::new(0.0, 18.0));
    let sidebar = component_ref(Block::new(120.0, 0.0));

    let regions: Vec<(&str, ComponentRef)> = vec![
        ("header", header.clone()),
        ("footer", footer.clone()),
        ("sidebar", sidebar.clone()),
        ("center", center.clone()),
    ];

    let mut frame = Panel::new()
        .with_bounds(Bounds::new(0.0, 0.0, 640.0, 480.0))
        .with_insets(Insets::uniform(8.0))
        .with_layout(
            Border::new()
                .north(header)
                .south(footer.clone())
                .west(sidebar)
                .center(center.clone())
                .hgap(6.0)
                .vgap(6.0),
        )
        .with_children(regions.iter().map(|(_, c)| c.clone()).collect());

    // Explicit hand-off: the frame lays out its regions, then the center
    // panel lays out its own tiles.
    frame.do_layout();
    center.borrow_mut().do_layout();

    for (name, component) in &regions {
        let bounds = component.borrow().bounds();
        logger.log_event(
            LogEvent::new(LogLevel::Info, "gallery", "region placed")
                .field("region", *name)
                .field("bounds", serde_json::to_value(bounds).map_err(LoggingError::from)?),
        )?;
    }
    for (index, tile) in tiles.iter().enumerate() {
        let bounds = tile.borrow().bounds();
        logger.log_event(
            LogEvent::new(LogLevel::Debug, "gallery", "tile placed")
                .field("tile", index)
                .field("bounds", serde_json::to_value(bounds).map_err(LoggingError::from)?),
        )?;
    }
    logger.log_event(
        frame
            .metrics()
            .snapshot(started.elapsed())
            .to_log_event("gallery"),
    )?;

    // Nudge the footer without disturbing its other fields.
    footer.borrow_mut().set_bounds(BoundsPatch::new().height(20.0));

    for event in sink.drain() {
        println!("{}", serde_json::to_string(&event).map_err(LoggingError::from)?);
    }
    Ok(())
}
