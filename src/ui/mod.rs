//! Terminal demo: a counter view connected to the store.

pub mod counter_view;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod terminal_guard;
pub mod theme;

use crate::binder::Binder;
use crate::config::UiConfig;
use crate::counter::{bind_handlers, select_props, CounterStore};
use crate::ui::counter_view::CounterView;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::input::{apply, map_key, InputAction};
use crate::ui::layout::layout_regions;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::widgets::Clear;
use ratatui::Frame;
use std::io;
use std::time::Duration;

/// Connect a [`CounterView`] to `store`.
pub fn connect_counter(store: &CounterStore, step: i64) -> Binder<CounterView> {
    Binder::connect(store, CounterView::new(), select_props, move |dispatcher| {
        bind_handlers(dispatcher, step)
    })
}

pub fn run(store: &CounterStore, config: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let binder = connect_counter(store, config.step);
    let events = EventHandler::new(tick_rate);
    let mut status: Option<String> = None;

    loop {
        terminal.draw(|frame| draw(frame, &binder, store.listener_count(), status.as_deref()))?;

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                let action = map_key(key);
                if action == InputAction::Quit {
                    break;
                }
                if action == InputAction::None {
                    continue;
                }
                status = match apply(action, binder.handlers()) {
                    Ok(()) => None,
                    Err(err) => {
                        tracing::warn!(error = %err, ?action, "Handler failed");
                        Some(err.to_string())
                    }
                };
            }
            Ok(AppEvent::Resize) | Ok(AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    binder.disconnect();
    drop(guard);
    Ok(())
}

pub fn draw(
    frame: &mut Frame<'_>,
    binder: &Binder<CounterView>,
    listeners: usize,
    status: Option<&str>,
) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(listeners).widget(), header);
    frame.render_widget(Clear, body);
    binder.with_view(|view| frame.render_widget(view.widget(), body));
    frame.render_widget(Footer::new(status).widget(footer), footer);
}
