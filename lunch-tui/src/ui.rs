use lunch_store::RecordStore;
use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::app::{App, View};
use crate::form::{Focus, FormKind, FormSession, Phase, TextField};
use crate::menu::MENU_ENTRIES;

const ACCENT: Color = Color::Indexed(205);
const LABEL_WIDTH: u16 = 24;

/// Draw the whole screen. The log pane is left out when `logger_state` is
/// `None`.
pub fn render<S: RecordStore>(f: &mut Frame, app: &App<S>, logger_state: Option<&TuiWidgetState>) {
    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Min(8),    // Current view
        Constraint::Length(1), // Status
    ];
    if logger_state.is_some() {
        constraints.push(Constraint::Length(8)); // Logs
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    render_header(f, chunks[0], app.view());

    match app.view() {
        View::Home => render_home(f, chunks[1], app.menu().selected()),
        View::LunchOrder => render_form(f, chunks[1], app.lunch_order()),
        View::OfficeTally => render_form(f, chunks[1], app.office_tally()),
    }

    render_status(f, chunks[2], app);

    if let Some(state) = logger_state {
        let logs = TuiLoggerWidget::default()
            .block(
                Block::default()
                    .title(" Logs ")
                    .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                    .borders(Borders::ALL),
            )
            .output_separator('|')
            .output_timestamp(Some("%H:%M:%S".to_string()))
            .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
            .output_target(false)
            .output_file(false)
            .output_line(false)
            .style(Style::default().fg(Color::White))
            .state(state);
        f.render_widget(logs, chunks[3]);
    }
}

fn render_header(f: &mut Frame, area: Rect, view: View) {
    let section = match view {
        View::Home => " Home ",
        View::LunchOrder => " Lunch order ",
        View::OfficeTally => " Office tally ",
    };
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" Lunch Log "),
        Span::raw(" | "),
        Span::styled(
            section,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);

    let hint = Paragraph::new("Ctrl+C to quit ")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(hint, area.inner(Margin::new(1, 1)));
}

fn render_home(f: &mut Frame, area: Rect, selected: usize) {
    let items: Vec<ListItem> = MENU_ENTRIES
        .iter()
        .map(|(label, _)| ListItem::new(*label))
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" What would you like to do? ").borders(Borders::ALL))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_form<K: FormKind>(f: &mut Frame, area: Rect, session: &FormSession<K>) {
    let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let focused = session.focused();

    match session.phase() {
        Phase::CollectingRestaurant => {
            let rows = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

            f.render_widget(Paragraph::new(K::TITLE).style(title_style), rows[0]);
            f.render_widget(Paragraph::new(format!("{}:", K::RESTAURANT.label)), rows[2]);
            render_input(
                f,
                rows[3],
                session.restaurant_input(),
                focused == Some(Focus::Restaurant),
            );
            render_back_hint(f, rows[4]);
        }
        Phase::CollectingDetails => {
            let fields = session.fields();
            let mut constraints = vec![Constraint::Length(1); 4 + fields.len() + 2];
            constraints.push(Constraint::Min(0));
            let rows = Layout::vertical(constraints).split(area);

            f.render_widget(
                Paragraph::new(format!("Restaurant: {}", session.restaurant())).style(title_style),
                rows[0],
            );
            let help = if fields.len() > 1 {
                "Add details (↑/↓ to navigate, enter to submit):"
            } else {
                "Press enter to submit:"
            };
            f.render_widget(Paragraph::new(help), rows[2]);

            for (i, field) in fields.iter().enumerate() {
                let is_focused = focused == Some(Focus::Field(i));
                render_labelled_input(f, rows[4 + i], field, is_focused);
            }
            render_back_hint(f, rows[4 + fields.len() + 1]);
        }
    }
}

fn render_labelled_input(f: &mut Frame, area: Rect, field: &TextField, focused: bool) {
    let [label_area, input_area] =
        Layout::horizontal([Constraint::Length(LABEL_WIDTH + 1), Constraint::Min(1)]).areas(area);

    let label_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(format!("{}:", field.spec().label)).style(label_style),
        label_area,
    );
    render_input(f, input_area, field, focused);
}

fn render_input(f: &mut Frame, area: Rect, field: &TextField, focused: bool) {
    let input = field.input();
    let width = area.width.max(1) as usize - 1;
    let scroll = input.visual_scroll(width);

    let paragraph = if field.value().is_empty() {
        Paragraph::new(field.spec().placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Paragraph::new(field.value())
            .style(style)
            .scroll((0, scroll as u16))
    };
    f.render_widget(paragraph, area);

    if focused {
        f.set_cursor_position((
            area.x + ((input.visual_cursor().max(scroll) - scroll) as u16),
            area.y,
        ));
    }
}

fn render_back_hint(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new("Press escape to go back.").style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_status<S: RecordStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let line = if let Some(err) = app.last_error() {
        Line::from(Span::styled(
            format!(" Error: {}", err),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(notice) = app.notice() {
        Line::from(Span::styled(
            format!(" {}", notice),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Command;
    use crate::testing::{MemoryStore, type_keys};
    use ratatui::backend::TestBackend;

    fn draw(app: &App<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, app, None)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_home_lists_both_forms() {
        let app = App::new(MemoryStore::default());
        let screen = draw(&app);
        assert!(screen.contains("Post your own lunch order"));
        assert!(screen.contains("Post the office tally"));
        assert!(!screen.contains("Press escape to go back."));
    }

    #[test]
    fn test_lunch_order_phases() {
        let mut app = App::new(MemoryStore::default());
        app.handle(Command::Confirm);
        let screen = draw(&app);
        assert!(screen.contains("What restaurant made your lunch?"));
        assert!(screen.contains("Torched Hop"));
        assert!(screen.contains("Press escape to go back."));

        type_keys(&mut app, "Cafe X");
        app.handle(Command::Confirm);
        let screen = draw(&app);
        assert!(screen.contains("Restaurant: Cafe X"));
        assert!(screen.contains("score (1-10):"));
        assert!(screen.contains("visit outside of work?:"));
        assert!(screen.contains("notes:"));
    }

    #[test]
    fn test_office_tally_details() {
        let mut app = App::new(MemoryStore::default());
        app.handle(Command::FocusNext);
        app.handle(Command::Confirm);
        type_keys(&mut app, "Deli");
        app.handle(Command::Confirm);
        type_keys(&mut app, "12");

        let screen = draw(&app);
        assert!(screen.contains("Restaurant: Deli"));
        assert!(screen.contains("Tally count:"));
        assert!(screen.contains("12"));
    }

    #[test]
    fn test_status_line() {
        let mut app = App::new(MemoryStore::failing());
        app.handle(Command::FocusNext);
        app.handle(Command::Confirm);
        type_keys(&mut app, "Deli");
        app.handle(Command::Confirm);
        type_keys(&mut app, "1");
        app.handle(Command::Confirm);
        assert!(draw(&app).contains("Error: Invalid record: store unavailable"));

        app.store().fail.set(false);
        type_keys(&mut app, "Deli");
        app.handle(Command::Confirm);
        type_keys(&mut app, "2");
        app.handle(Command::Confirm);
        let screen = draw(&app);
        assert!(screen.contains("Saved tally #1"));
        assert!(!screen.contains("Error:"));
    }
}
