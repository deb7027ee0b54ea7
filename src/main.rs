use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::time::MissedTickBehavior;

use typeahead::app::{App, MouseCapture};
use typeahead::cli::Args;
use typeahead::combobox::{Combobox, ComboboxOptions};
use typeahead::config::{self, ConfigResult};
use typeahead::{logging, source};

/// How often the widget is driven and redrawn without input
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();
    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    args.apply(&mut config);
    log::debug!("Starting with {:?}", config);

    let source = source::from_config(&config.source)?;
    let combobox = Combobox::new(source, ComboboxOptions::from(&config.widget));
    let mut app = App::new(combobox).with_notification(warning);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Mouse capture is released before the terminal is restored
    let result = MouseCapture::acquire()
        .map_err(color_eyre::Report::from)
        .and_then(|_mouse_capture| runtime.block_on(run(terminal, &mut app)));

    ratatui::restore();
    app.shutdown();
    result?;

    if let Some(selection) = app.selection() {
        println!("{}", selection);
    }

    Ok(())
}

async fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !app.should_quit {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => app.handle_event(event),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            _ = ticker.tick() => {}
        }
    }

    Ok(())
}
