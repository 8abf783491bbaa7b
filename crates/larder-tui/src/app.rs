//! Application core — event loop, key routing, action dispatch, rendering.
//!
//! All UI state lives on [`App`]: the current snapshot, the search-filtered
//! view, modal and focus state, toasts. Nothing is global. Mutations flow
//! through [`Action`]s; inventory operations are dispatched to the data
//! bridge as [`InventoryCommand`]s and never awaited by key handlers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};
use tokio::sync::mpsc;
use tracing::info;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use larder_core::{filter_by_name, InventoryItem};

use crate::action::{Action, Notification, NotificationLevel};
use crate::data_bridge::InventoryCommand;
use crate::event::{Event, EventReader};
use crate::theme;
use crate::tui::Tui;

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Connection status as seen by the TUI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

/// Which element currently receives non-global keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    List,
    Search,
}

/// Top-level application state and event loop.
pub struct App {
    /// Full inventory snapshot, in store iteration order.
    items: Arc<Vec<InventoryItem>>,
    /// Search-filtered view the list renders from.
    filtered: Vec<InventoryItem>,
    /// Live search input.
    search_input: Input,
    /// Add-item modal state.
    modal_open: bool,
    modal_input: Input,
    /// List selection.
    table_state: TableState,
    /// Input focus (list vs search; the modal overrides both).
    focus: Focus,
    /// Whether the app should keep running.
    running: bool,
    /// Connection status indicator.
    connection_status: ConnectionStatus,
    /// Help overlay visibility.
    help_visible: bool,
    /// Active toast, if any.
    toast: Option<(Notification, Instant)>,
    /// Action sender — the data bridge dispatches through this too.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Command sender to the data bridge (fire-and-forget).
    command_tx: mpsc::UnboundedSender<InventoryCommand>,
}

impl App {
    pub fn new(command_tx: mpsc::UnboundedSender<InventoryCommand>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            items: Arc::new(Vec::new()),
            filtered: Vec::new(),
            search_input: Input::default(),
            modal_open: false,
            modal_input: Input::default(),
            table_state: TableState::default(),
            focus: Focus::default(),
            running: true,
            connection_status: ConnectionStatus::default(),
            help_visible: false,
            toast: None,
            action_tx,
            action_rx,
            command_tx,
        }
    }

    /// Sender half of the action channel, for the data bridge.
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(&key) {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action);

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. The modal and search inputs consume
    /// keys while focused; global keys apply otherwise.
    fn handle_key_event(&mut self, key: &KeyEvent) -> Option<Action> {
        // Ctrl+C always quits
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.help_visible {
            // In help mode, Esc or ? closes help
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            };
        }

        if self.modal_open {
            return match key.code {
                KeyCode::Esc => Some(Action::CloseAddModal),
                KeyCode::Enter => Some(Action::SubmitAdd),
                _ => {
                    self.modal_input
                        .handle_event(&crossterm::event::Event::Key(*key));
                    None
                }
            };
        }

        if self.focus == Focus::Search {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::LeaveSearch),
                _ => {
                    self.search_input
                        .handle_event(&crossterm::event::Event::Key(*key));
                    // Live filter: every keystroke re-filters the list
                    Some(Action::SearchChanged)
                }
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc => Some(Action::DismissNotification),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('/') => Some(Action::FocusSearch),
            KeyCode::Char('n') => Some(Action::OpenAddModal),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('+' | 'a') => Some(Action::AddOne),
            KeyCode::Char('-' | 'd') => Some(Action::RemoveOne),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectUp),
            KeyCode::Char('g') => Some(Action::SelectTop),
            KeyCode::Char('G') => Some(Action::SelectBottom),
            _ => None,
        }
    }

    /// Process a single action — update app state.
    fn process_action(&mut self, action: &Action) {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::ItemsUpdated(items) => {
                self.items = items.clone();
                // A fresh snapshot always shows the full list, even while
                // search text is present; the text stays in the input and
                // re-filters on the next keystroke.
                self.reset_filter_to_full();
            }

            Action::SearchChanged => {
                self.recompute_filtered();
            }

            Action::FocusSearch => {
                self.focus = Focus::Search;
            }

            Action::LeaveSearch => {
                self.focus = Focus::List;
            }

            Action::OpenAddModal => {
                self.modal_open = true;
            }

            Action::CloseAddModal => {
                self.modal_open = false;
            }

            Action::SubmitAdd => {
                // The controller treats an empty name as a no-op; the modal
                // closes either way, matching the original behavior.
                let name = self.modal_input.value().trim().to_owned();
                if !name.is_empty() {
                    let _ = self.command_tx.send(InventoryCommand::Add(name));
                }
                self.modal_input.reset();
                self.modal_open = false;
            }

            Action::AddOne => {
                if let Some(item) = self.selected_item() {
                    let _ = self
                        .command_tx
                        .send(InventoryCommand::Add(item.name.clone()));
                }
            }

            Action::RemoveOne => {
                if let Some(item) = self.selected_item() {
                    let _ = self
                        .command_tx
                        .send(InventoryCommand::Remove(item.name.clone()));
                }
            }

            Action::Refresh => {
                let _ = self.command_tx.send(InventoryCommand::Refresh);
            }

            Action::SelectUp => self.move_selection(-1),
            Action::SelectDown => self.move_selection(1),
            Action::SelectTop => self.select(0),
            Action::SelectBottom => self.select(usize::MAX),

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::Connected => {
                self.connection_status = ConnectionStatus::Connected;
            }

            Action::Disconnected(_) => {
                self.connection_status = ConnectionStatus::Disconnected;
            }

            Action::Notify(notification) => {
                self.toast = Some((notification.clone(), Instant::now()));
            }

            Action::DismissNotification => {
                self.toast = None;
            }

            Action::Tick => {
                if let Some((_, shown_at)) = &self.toast {
                    if shown_at.elapsed() > TOAST_DURATION {
                        self.toast = None;
                    }
                }
            }

            // Render is handled in the main loop; resize just triggers redraw
            Action::Render | Action::Resize(..) => {}
        }
    }

    // ── Derived state ────────────────────────────────────────────

    /// Recompute the filtered view from the snapshot and search text, then
    /// clamp the selection into range.
    fn recompute_filtered(&mut self) {
        self.filtered = filter_by_name(&self.items, self.search_input.value());
        self.clamp_selection();
    }

    /// Replace the filtered view with the full snapshot.
    fn reset_filter_to_full(&mut self) {
        self.filtered = self.items.as_ref().clone();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered.len();
        match self.table_state.selected() {
            Some(sel) if len > 0 => self.table_state.select(Some(sel.min(len - 1))),
            _ if len > 0 => self.table_state.select(Some(0)),
            _ => self.table_state.select(None),
        }
    }

    fn selected_item(&self) -> Option<&InventoryItem> {
        self.filtered.get(self.table_state.selected()?)
    }

    fn select(&mut self, idx: usize) {
        if self.filtered.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(idx.min(self.filtered.len() - 1)));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.filtered.is_empty() {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta);
        self.select(next);
    }

    // ── Rendering ────────────────────────────────────────────────

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [header] [search] [item list] [status bar]
        let layout = Layout::vertical([
            Constraint::Length(1), // Header bar
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // Item list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        self.render_header(frame, layout[0]);
        self.render_search(frame, layout[1]);
        self.render_list(frame, layout[2]);
        self.render_status_bar(frame, layout[3]);

        // Overlays on top
        if self.modal_open {
            self.render_add_modal(frame, area);
        }
        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
        if let Some((notification, _)) = &self.toast {
            render_toast(frame, area, notification);
        }
    }

    /// Fixed header bar: static title on the left, add-item hint on the right.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(Line::from(" Larder — Inventory Items")).style(theme::header_bar()),
            area,
        );
        frame.render_widget(
            Paragraph::new(Line::from("n Add New Item "))
                .style(theme::header_bar())
                .right_aligned(),
            area,
        );
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let border = if self.focus == Focus::Search {
            theme::border_focused()
        } else {
            theme::border_default()
        };

        let block = Block::default()
            .title(" Search ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let value = self.search_input.value();
        let text = if value.is_empty() && self.focus != Focus::Search {
            Line::from(Span::styled("Search inventory…", theme::key_hint()))
        } else {
            Line::from(value)
        };
        frame.render_widget(Paragraph::new(text), inner);

        if self.focus == Focus::Search {
            let cursor_x = inner.x + u16::try_from(self.search_input.visual_cursor()).unwrap_or(0);
            frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }

    /// The item list: filtered view, store iteration order, one row per
    /// item with display-capitalized name and quantity.
    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Items ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focus == Focus::List {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        if self.filtered.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let message = if self.items.is_empty() {
                "No items — press n to add one"
            } else {
                "No items match the search"
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(message, theme::key_hint()))).centered(),
                inner,
            );
            return;
        }

        let rows: Vec<Row> = self
            .filtered
            .iter()
            .map(|item| {
                Row::new(vec![
                    Cell::from(item.display_name()),
                    Cell::from(item.quantity.to_string()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [Constraint::Min(20), Constraint::Length(8)],
        )
        .header(Row::new(vec!["Name", "Qty"]).style(theme::table_header()))
        .row_highlight_style(theme::row_selected())
        .highlight_symbol("▸ ")
        .block(block);

        let mut state = self.table_state.clone();
        frame.render_stateful_widget(table, area, &mut state);
    }

    /// Bottom status bar with connection status and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let connection_indicator = match &self.connection_status {
            ConnectionStatus::Connected => {
                Span::styled("● connected", Style::default().fg(theme::SUCCESS_GREEN))
            }
            ConnectionStatus::Disconnected => {
                Span::styled("○ disconnected", Style::default().fg(theme::ERROR_RED))
            }
            ConnectionStatus::Connecting => Span::styled(
                "◐ connecting",
                Style::default().fg(theme::WARNING_YELLOW),
            ),
        };

        let hints = Span::styled(
            " │ n add item  + / - adjust  / search  r refresh  ? help  q quit",
            theme::key_hint(),
        );

        let line = Line::from(vec![Span::raw(" "), connection_indicator, hints]);
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Centered add-item modal: one text input plus the confirm hint.
    fn render_add_modal(&self, frame: &mut Frame, area: Rect) {
        let modal_area = centered_rect(area, 46, 7);
        frame.render_widget(Clear, modal_area);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            modal_area,
        );

        let block = Block::default()
            .title(" Add Item ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let value = self.modal_input.value();
        let input_line = if value.is_empty() {
            Line::from(Span::styled("Enter item name", theme::key_hint()))
        } else {
            Line::from(value)
        };
        frame.render_widget(Paragraph::new(input_line), rows[1]);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Enter", theme::key_hint_key()),
                Span::styled(" add   ", theme::key_hint()),
                Span::styled("Esc", theme::key_hint_key()),
                Span::styled(" cancel", theme::key_hint()),
            ])),
            rows[3],
        );

        let cursor_x = rows[1].x + u16::try_from(self.modal_input.visual_cursor()).unwrap_or(0);
        frame.set_cursor_position((cursor_x.min(rows[1].right().saturating_sub(1)), rows[1].y));
    }

    /// Centered help overlay.
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_area = centered_rect(area, 52, 14);
        frame.render_widget(Clear, help_area);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let hint = |key: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<10}"), theme::key_hint_key()),
                Span::styled(desc, theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            hint("n", "Add a new item"),
            hint("+ / a", "Add one of the selected item"),
            hint("- / d", "Remove one of the selected item"),
            hint("/", "Search (Esc or Enter to leave)"),
            hint("j/k ↑/↓", "Move selection"),
            hint("g / G", "Top / bottom"),
            hint("r", "Refresh from the store"),
            hint("?", "This help"),
            hint("q", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "                    Esc or ? to close",
                theme::key_hint(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}

/// Render the active toast in the bottom-right corner.
fn render_toast(frame: &mut Frame, area: Rect, notification: &Notification) {
    let width = u16::try_from(notification.message.len() + 4)
        .unwrap_or(u16::MAX)
        .min(area.width.saturating_sub(2));
    let toast_area = Rect::new(
        area.right().saturating_sub(width + 1),
        area.bottom().saturating_sub(4),
        width,
        3,
    );

    let color = match notification.level {
        NotificationLevel::Info => theme::NEON_CYAN,
        NotificationLevel::Error => theme::ERROR_RED,
    };

    frame.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", notification.message),
            Style::default().fg(color),
        ))),
        inner,
    );
}

/// A `width`×`height` rect centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn app() -> (App, mpsc::UnboundedReceiver<InventoryCommand>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        (App::new(command_tx), command_rx)
    }

    fn snapshot(entries: &[(&str, u64)]) -> Arc<Vec<InventoryItem>> {
        Arc::new(
            entries
                .iter()
                .map(|(name, quantity)| InventoryItem::new(*name, *quantity))
                .collect(),
        )
    }

    fn type_into_search(app: &mut App, text: &str) {
        app.process_action(&Action::FocusSearch);
        for c in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            let action = app.handle_key_event(&key).expect("search keystroke");
            app.process_action(&action);
        }
    }

    #[test]
    fn items_update_populates_list_view() {
        let (mut app, _rx) = app();
        app.process_action(&Action::ItemsUpdated(snapshot(&[
            ("apple", 1),
            ("banana", 3),
        ])));

        assert_eq!(app.filtered.len(), 2);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn search_filters_live() {
        let (mut app, _rx) = app();
        app.process_action(&Action::ItemsUpdated(snapshot(&[
            ("apple", 1),
            ("banana", 3),
        ])));

        type_into_search(&mut app, "ap");
        assert_eq!(app.filtered, vec![InventoryItem::new("apple", 1)]);
    }

    #[test]
    fn snapshot_update_resets_filter_to_full_list() {
        let (mut app, _rx) = app();
        app.process_action(&Action::ItemsUpdated(snapshot(&[
            ("apple", 1),
            ("banana", 3),
        ])));
        type_into_search(&mut app, "ap");
        assert_eq!(app.filtered, vec![InventoryItem::new("apple", 1)]);

        // A new snapshot (post add/remove refresh) shows the whole list
        // again; the search text is preserved in the input.
        app.process_action(&Action::ItemsUpdated(snapshot(&[
            ("apple", 2),
            ("banana", 3),
            ("grape", 1),
        ])));
        assert_eq!(app.filtered.len(), 3);
        assert_eq!(app.search_input.value(), "ap");

        // The next keystroke filters against the new snapshot
        let key = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        let action = app.handle_key_event(&key).expect("search keystroke");
        app.process_action(&action);
        assert_eq!(app.filtered, vec![InventoryItem::new("apple", 2)]);
    }

    #[test]
    fn submit_add_with_value_sends_command_and_closes_modal() {
        let (mut app, mut rx) = app();
        app.process_action(&Action::OpenAddModal);
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(app.handle_key_event(&key).is_none()); // consumed by the input
        app.process_action(&Action::SubmitAdd);

        assert!(!app.modal_open);
        assert_eq!(app.modal_input.value(), "");
        match rx.try_recv() {
            Ok(InventoryCommand::Add(name)) => assert_eq!(name, "x"),
            other => panic!("expected Add command, got {other:?}"),
        }
    }

    #[test]
    fn submit_add_with_empty_value_closes_without_command() {
        let (mut app, mut rx) = app();
        app.process_action(&Action::OpenAddModal);
        app.process_action(&Action::SubmitAdd);

        assert!(!app.modal_open);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn row_operations_target_the_selected_filtered_item() {
        let (mut app, mut rx) = app();
        app.process_action(&Action::ItemsUpdated(snapshot(&[
            ("apple", 1),
            ("banana", 3),
        ])));
        app.process_action(&Action::SelectDown);
        app.process_action(&Action::AddOne);
        app.process_action(&Action::RemoveOne);

        match rx.try_recv() {
            Ok(InventoryCommand::Add(name)) => assert_eq!(name, "banana"),
            other => panic!("expected Add command, got {other:?}"),
        }
        match rx.try_recv() {
            Ok(InventoryCommand::Remove(name)) => assert_eq!(name, "banana"),
            other => panic!("expected Remove command, got {other:?}"),
        }
    }

    #[test]
    fn selection_clamps_when_filter_shrinks_list() {
        let (mut app, _rx) = app();
        app.process_action(&Action::ItemsUpdated(snapshot(&[
            ("apple", 1),
            ("banana", 3),
            ("grape", 1),
        ])));
        app.process_action(&Action::SelectBottom);
        assert_eq!(app.table_state.selected(), Some(2));

        type_into_search(&mut app, "ap");
        assert_eq!(app.filtered.len(), 2);
        assert_eq!(app.table_state.selected(), Some(1));
    }

    #[test]
    fn toast_expires_on_tick() {
        let (mut app, _rx) = app();
        app.process_action(&Action::Notify(Notification::error("boom")));
        assert!(app.toast.is_some());

        // Pretend the toast has been visible long enough
        if let Some((_, shown_at)) = &mut app.toast {
            *shown_at = Instant::now() - TOAST_DURATION - Duration::from_secs(1);
        }
        app.process_action(&Action::Tick);
        assert!(app.toast.is_none());
    }
}
