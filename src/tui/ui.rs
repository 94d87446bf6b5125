use crate::tui::app::{App, Mode};
use crate::tui::edit::EditState;
use crate::tui::search::SearchOutcome;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // URL bar
            Constraint::Min(0),    // History
            Constraint::Length(3), // Search bar
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_url_bar(frame, chunks[0], app);
    draw_history_list(frame, chunks[1], app);
    draw_search_bar(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    match app.mode {
        Mode::Bookmarks => draw_bookmarks_window(frame, app),
        Mode::Help => draw_help_window(frame),
        _ => {}
    }
}

fn input_line(editor: &EditState, active: bool) -> Line<'_> {
    if active {
        let (before_cursor, after_cursor) = editor.split_at_cursor();
        Line::from(vec![
            Span::raw(before_cursor),
            Span::styled("█", Style::default().fg(Color::Yellow)),
            Span::raw(after_cursor),
        ])
    } else {
        Line::from(editor.buffer.as_str())
    }
}

fn active_border(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

fn draw_url_bar(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.mode == Mode::UrlInput;
    let url_bar = Paragraph::new(input_line(&app.url_input, active)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" URL ")
            .border_style(active_border(active)),
    );

    frame.render_widget(url_bar, area);
}

fn draw_history_list(frame: &mut Frame, area: Rect, app: &App) {
    let entries = app.visible_items();
    let current = app.tracker.current_url();
    let showing_results = app.search.is_showing_results();

    if entries.is_empty() && !showing_results && app.tracker.is_empty() {
        let hint = Paragraph::new("No pages visited. Press i to enter a URL.")
            .block(Block::default().borders(Borders::ALL).title(" History "))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, url)| {
            // The first history entry is the page being viewed.
            let is_current = !showing_results && i == 0 && current.is_some();
            let style = if is_current {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if is_current { "▶ " } else { "  " };
            ListItem::new(Line::from(Span::styled(format!("{}{}", marker, url), style)))
        })
        .collect();

    let title = if showing_results { " Search Results " } else { " History " };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(app.history_cursor.selection(entries.len()));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.mode == Mode::Search;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(area);

    let search_bar = Paragraph::new(input_line(&app.search.query, active)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(active_border(active)),
    );

    let label_color = match app.search.outcome {
        Some(SearchOutcome::NoMatch) => Color::Red,
        _ => Color::Green,
    };
    let label = Paragraph::new(app.search.label())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(label_color));

    frame.render_widget(search_bar, chunks[0]);
    frame.render_widget(label, chunks[1]);
}

fn availability(name: &str, available: bool) -> Span<'_> {
    if available {
        Span::styled(name, Style::default().fg(Color::Green))
    } else {
        Span::styled(name, Style::default().fg(Color::DarkGray))
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer_line = match app.mode {
        Mode::UrlInput => Line::from("URL | Enter: visit | Esc: cancel | ←→: cursor | Ctrl+W: delete word"),
        Mode::Search => Line::from("SEARCH | Enter: search | Esc: cancel | ←→: cursor | Ctrl+W: delete word"),
        _ => {
            let tracker = &app.tracker;
            Line::from(vec![
                Span::raw(format!(
                    "Current: {} | Bookmarks: {} | ",
                    tracker.current_url().unwrap_or("-"),
                    tracker.bookmarks().len()
                )),
                availability("back", tracker.can_go_back()),
                Span::raw(" "),
                availability("forward", tracker.can_go_forward()),
                Span::raw(" "),
                availability("undo", tracker.can_undo()),
                Span::raw(" "),
                availability("redo", tracker.can_redo()),
                Span::raw(" | ?: help | q: quit"),
            ])
        }
    };

    let footer = Paragraph::new(footer_line)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_bookmarks_window(frame: &mut Frame, app: &App) {
    let bookmarks = app.tracker.bookmarks();
    let items: Vec<ListItem> = if bookmarks.is_empty() {
        vec![ListItem::new(Span::styled(
            "No bookmarks yet. Press b on a page to add one.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        bookmarks
            .iter()
            .map(|url| ListItem::new(url.as_str()))
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Bookmarks ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    let mut list_state = ListState::default();
    list_state.select(app.bookmarks_cursor.selection(bookmarks.len()));

    let area = centered_rect(60, 50, frame.size());
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Browser History - Keyboard Commands",
        "",
        "PAGES:",
        "  i / o             Type a URL, Enter to visit",
        "  ← / h             Go back",
        "  → / l             Go forward",
        "  u                 Undo",
        "  r / Ctrl+R        Redo",
        "  C                 Clear history (bookmarks are kept)",
        "",
        "BOOKMARKS:",
        "  b                 Bookmark current page",
        "  B                 View bookmarks",
        "",
        "SEARCH:",
        "  /                 Search history, Enter to run",
        "  Esc               Reset search and show full history",
        "",
        "OTHER:",
        "  ↑↓ / j/k          Move highlight",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
