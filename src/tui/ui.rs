use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::store::Filter;

use super::app::{Focus, Screen, Snapshot};
use super::input::{input_line, render_hints};
use super::theme::Theme;

const INPUT_PLACEHOLDER: &str = "What needs to be done? (Enter to add)";

pub fn draw(frame: &mut Frame, snap: &Snapshot<'_>, theme: &Theme) {
    match snap.screen {
        Screen::Welcome => draw_welcome(frame, theme),
        Screen::List(focus) => draw_list_screen(frame, snap, focus, theme),
    }
}

// ── Welcome ───────────────────────────────────────────────────────────

fn draw_welcome(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();

    let [_, panel_row, footer, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [panel] = Layout::horizontal([Constraint::Length(46)])
        .flex(Flex::Center)
        .areas(panel_row);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(theme.border_welcome));

    let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let option = |key: &'static str, desc: &'static str, color: Color| {
        Line::from(vec![Span::styled(key, bold(color)), Span::raw(desc)])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("TODO TUI", bold(theme.text_primary))),
        Line::from(Span::styled(
            "A keyboard-driven terminal TODO manager",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        option("[L]", " - View todo list", theme.status_done),
        option("[C]", " - Create new todo", theme.hint_key),
        option("[Esc]", " - Exit", theme.quit_hint),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        panel,
    );

    let version = Line::from(Span::styled(
        format!("todo-tui {}", crate::VERSION),
        Style::default().fg(theme.border_unfocused),
    ));
    frame.render_widget(
        Paragraph::new(version).alignment(Alignment::Center),
        footer,
    );
}

// ── List screen ───────────────────────────────────────────────────────

fn draw_list_screen(frame: &mut Frame, snap: &Snapshot<'_>, focus: Focus, theme: &Theme) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, snap, theme, outer[0]);
    draw_input(frame, snap, focus == Focus::InputField, theme, outer[1]);
    draw_filter_tabs(frame, snap.filter, theme, outer[2]);
    draw_tasks(frame, snap, focus == Focus::TaskList, theme, outer[3]);
    draw_tip_bar(frame, focus, theme, outer[4]);
}

fn draw_header(frame: &mut Frame, snap: &Snapshot<'_>, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_accent))
        .style(Style::default().bg(theme.header_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).areas(inner);

    let title = Line::from(vec![
        Span::styled(
            "TODO Manager",
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  ({} active, {} done)",
                snap.active_count, snap.completed_count
            ),
            Style::default().fg(theme.text_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), left);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "[Esc] Back",
            Style::default().fg(theme.quit_hint),
        ))
        .alignment(Alignment::Right),
        right,
    );
}

fn draw_input(frame: &mut Frame, snap: &Snapshot<'_>, focused: bool, theme: &Theme, area: Rect) {
    let title = if focused {
        " New "
    } else {
        " New (Tab to focus) "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.input_border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [field, hint] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).areas(inner);

    let line = input_line(
        snap.input,
        INPUT_PLACEHOLDER,
        focused,
        Style::default().fg(theme.text_primary),
        Style::default().fg(theme.border_input),
        Style::default()
            .fg(theme.border_unfocused)
            .add_modifier(Modifier::ITALIC),
    );
    frame.render_widget(Paragraph::new(line), field);
    render_hints(
        frame,
        hint,
        &[("[Enter]", " Add")],
        theme.hint_key_style(),
        theme.hint_desc_style(),
    );
}

fn draw_filter_tabs(frame: &mut Frame, current: Filter, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.filter_tab));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(
        "Filter:  ",
        Style::default()
            .fg(theme.text_secondary)
            .add_modifier(Modifier::BOLD),
    )];
    for filter in Filter::ALL {
        spans.push(Span::styled(
            format!(" [{}] {} ", filter.shortcut(), filter.label()),
            theme.filter_tab_style(filter == current),
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_tasks(frame: &mut Frame, snap: &Snapshot<'_>, focused: bool, theme: &Theme, area: Rect) {
    let title = if focused {
        Line::from(vec![
            Span::styled(
                " Tasks ",
                Style::default()
                    .fg(theme.border_tasks)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[↑↓/jk] Navigate  [Space/Enter] Toggle  [d/Del] Delete ",
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        Line::from(Span::styled(
            " Tasks (Tab to focus) ",
            Style::default().fg(theme.text_secondary),
        ))
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.tasks_border(focused));

    if snap.filtered.is_empty() {
        let msg = if snap.todos.is_empty() {
            "No todos yet. Create one above!"
        } else {
            "Nothing matches this filter."
        };
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(
                msg,
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
            row,
        );
        return;
    }

    let items: Vec<ListItem> = snap
        .filtered
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            let mut spans = vec![
                Span::styled(
                    format!(" {} ", todo.symbol()),
                    theme.status_style(todo.completed()),
                ),
                Span::styled(todo.text(), theme.todo_text_style(todo.completed())),
            ];
            if i == snap.selection {
                spans.push(Span::styled(
                    " ◀",
                    Style::default()
                        .fg(theme.selection_indicator)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected_row_style());
    let mut state = ListState::default().with_selected(Some(snap.selection));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_tip_bar(frame: &mut Frame, focus: Focus, theme: &Theme, area: Rect) {
    let hints: &[(&str, &str)] = match focus {
        Focus::InputField => &[
            (" Enter", ":add  "),
            ("Tab", ":tasks  "),
            ("Esc", ":back  "),
            ("Ctrl+C", ":quit"),
        ],
        Focus::TaskList => &[
            (" 1/2/3", ":filter  "),
            ("Space", ":toggle  "),
            ("d", ":delete  "),
            ("Tab", ":input  "),
            ("Esc", ":back"),
        ],
    };
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.tip_bg)),
        area,
    );
    render_hints(
        frame,
        area,
        hints,
        theme.hint_key_style(),
        Style::default().fg(theme.text_primary),
    );
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::tui::app::App;

    /// Render the app into an in-memory buffer and return plain text.
    fn render(app: &App, w: u16, h: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| draw(frame, &app.snapshot(), &theme))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        buf.content
            .chunks(buf.area.width as usize)
            .map(|row| {
                let s: String = row.iter().map(ratatui::buffer::Cell::symbol).collect();
                s.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn add(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn welcome_shows_options() {
        let out = render(&App::default(), 80, 24);
        assert!(out.contains("TODO TUI"));
        assert!(out.contains("[L] - View todo list"));
        assert!(out.contains("[C] - Create new todo"));
        assert!(out.contains("[Esc] - Exit"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('l'));
        let out = render(&app, 90, 20);
        assert!(out.contains("No todos yet. Create one above!"));
        assert!(out.contains("(0 active, 0 done)"));
        assert!(out.contains("What needs to be done?"));
        assert!(out.contains("Tasks (Tab to focus)"));
    }

    #[test]
    fn list_shows_todos_and_counts() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('l'));
        add(&mut app, "Buy milk");
        add(&mut app, "Walk dog");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));

        let out = render(&app, 90, 20);
        assert!(out.contains("✓ Buy milk ◀"));
        assert!(out.contains("☐ Walk dog"));
        assert!(out.contains("(1 active, 1 done)"));
        assert!(out.contains("New (Tab to focus)"));
        assert!(out.contains("[1] All"));
        assert!(out.contains("[3] Completed"));
    }

    #[test]
    fn filter_with_no_matches_says_so() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('l'));
        add(&mut app, "Buy milk");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('3'));
        let out = render(&app, 90, 20);
        assert!(out.contains("Nothing matches this filter."));
        assert!(!out.contains("Buy milk"));
    }

    #[test]
    fn input_text_is_rendered() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('c'));
        for c in "draft".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        let out = render(&app, 90, 20);
        assert!(out.contains("draft\u{2588}"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = App::default();
        render(&app, 10, 3);
        press(&mut app, KeyCode::Char('l'));
        add(&mut app, "x");
        render(&app, 10, 3);
    }
}
