use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};
use chrono::Local;
use crate::commands::time_left;
use crate::content::{category_label, score_verdict, LEARNING_TOPICS, PASSWORD_STORAGE_HINT, QUICK_TIPS, RECOMMENDATION_OF_THE_DAY};
use crate::models::PasswordPolicy;
use crate::session::Variant;
use super::app::{App, Tab};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(3)  // Help
        ].as_ref())
        .split(f.area());

    render_tabs(f, app, chunks[0]);

    match app.tab {
        Tab::Home => render_home(f, app, chunks[1]),
        Tab::Reminders => render_reminders(f, app, chunks[1]),
        Tab::Password => render_password(f, app, chunks[1]),
        Tab::Learning => render_learning(f, chunks[1]),
        Tab::Dashboard => render_dashboard(f, app, chunks[1]),
    }

    let help_text = match app.tab {
        Tab::Reminders => "q: Quit | 1-5/Tab: Switch | j/k: Move | Space: Toggle done | Esc: Dismiss",
        Tab::Password => "q: Quit | 1-5/Tab: Switch | ←/→: Length | u/l/n/s: Classes | g: Generate | y: Copy | Esc: Dismiss",
        _ => "q: Quit | 1-5/Tab: Switch | Esc: Dismiss",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, chunks[2]);

    if let Some(n) = app.session.current_notification() {
        let area = centered_rect(60, 4, f.area());
        f.render_widget(Clear, area);

        let color = match n.variant {
            Variant::Info => Color::Green,
            Variant::Destructive => Color::Red,
        };
        let popup = Paragraph::new(n.description.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(n.title.as_str()));

        f.render_widget(popup, area);
    }
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!("[{}] {}", i + 1, t.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Digital Hygiene"))
        .select(app.tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    f.render_widget(tabs, area);
}

fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)].as_ref())
        .split(area);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ].as_ref())
        .split(rows[0]);

    let score = app.session.ledger().overall_score();
    score_gauge(f, "Protection level", score, cards[0]);

    let active = Paragraph::new(vec![
        Line::from(Span::styled(
            app.session.ledger().active_count().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("reminders need your attention"),
        Line::from(Span::styled("[2] View tasks", Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().borders(Borders::ALL).title("Active tasks"));
    f.render_widget(active, cards[1]);

    let generator = Paragraph::new(vec![
        Line::from("Create a strong password to protect an account"),
        Line::from(Span::styled("[3] Create password", Style::default().fg(Color::DarkGray))),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Password generator"));
    f.render_widget(generator, cards[2]);

    let mut lines = Vec::new();
    for tip in QUICK_TIPS {
        lines.push(Line::from(Span::styled(tip.title, Style::default().add_modifier(Modifier::BOLD))));
        lines.push(Line::from(format!("  {}", tip.body)));
    }
    let tips = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Quick tips"));
    f.render_widget(tips, rows[1]);
}

fn render_reminders(f: &mut Frame, app: &mut App, area: Rect) {
    let today = Local::now().date_naive();

    let rows: Vec<Row> = app
        .session
        .ledger()
        .reminders()
        .iter()
        .map(|r| {
            let days_left = (r.due_date - today).num_days();
            let style = if r.completed {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            } else if days_left < 0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(if r.completed { "[x]" } else { "[ ]" }),
                Cell::from(r.title.clone()),
                Cell::from(r.description.clone()),
                Cell::from(category_label(r.kind)),
                Cell::from(r.due_date.format("%d.%m.%Y").to_string()),
                Cell::from(time_left(days_left)),
            ]).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(20),
        Constraint::Min(20),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(Row::new(vec!["", "Title", "Description", "Category", "Due", "Time Left"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .bottom_margin(1))
        .block(Block::default().borders(Borders::ALL).title("Your reminders"))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_password(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Length
            Constraint::Length(6), // Switches
            Constraint::Min(0),    // Result
        ].as_ref())
        .split(area);

    let policy = app.session.policy();
    let span = (PasswordPolicy::MAX_LENGTH - PasswordPolicy::MIN_LENGTH) as f64;
    let ratio = (policy.length.saturating_sub(PasswordPolicy::MIN_LENGTH)) as f64 / span;
    let length = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Password length"))
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{} characters", policy.length));
    f.render_widget(length, chunks[0]);

    let switch = |key: char, label: &str, on: bool| {
        let (mark, style) = if on {
            ("[on] ", Style::default().fg(Color::Green))
        } else {
            ("[off]", Style::default().fg(Color::DarkGray))
        };
        Line::from(vec![
            Span::styled(mark, style),
            Span::raw(format!(" ({}) {}", key, label)),
        ])
    };
    let switches = Paragraph::new(vec![
        switch('u', "Uppercase letters (A-Z)", policy.include_uppercase),
        switch('l', "Lowercase letters (a-z)", policy.include_lowercase),
        switch('n', "Digits (0-9)", policy.include_numbers),
        switch('s', "Symbols (!@#$%...)", policy.include_symbols),
    ])
    .block(Block::default().borders(Borders::ALL).title("Character types"));
    f.render_widget(switches, chunks[1]);

    let result = match app.session.generated_password() {
        Some(p) => vec![
            Line::from(Span::styled(p.to_string(), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled(PASSWORD_STORAGE_HINT, Style::default().fg(Color::Gray))),
        ],
        None => vec![Line::from(Span::styled("Press g to generate", Style::default().fg(Color::DarkGray)))],
    };
    let result = Paragraph::new(result)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Your new password"));
    f.render_widget(result, chunks[2]);
}

fn render_learning(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);
    let cells: Vec<Rect> = rows
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
                .split(*row)
                .to_vec()
        })
        .collect();

    for (topic, cell) in LEARNING_TOPICS.iter().zip(cells) {
        let lines: Vec<Line> = topic
            .points
            .iter()
            .map(|p| Line::from(vec![Span::styled("✓ ", Style::default().fg(Color::Green)), Span::raw(*p)]))
            .collect();
        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(topic.title));
        f.render_widget(card, cell);
    }
}

fn render_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let ledger = app.session.ledger();
    let breakdown = ledger.category_breakdown();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2 + 3 * breakdown.len() as u16),
            Constraint::Min(0),
        ].as_ref())
        .split(area);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ].as_ref())
        .split(rows[0]);

    score_gauge(f, "Overall score", ledger.overall_score(), cards[0]);

    let completed = ledger.completed_count();
    let total = ledger.len();
    let done_ratio = if total > 0 { completed as f64 / total as f64 } else { 0.0 };
    let done = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Tasks completed"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(done_ratio)
        .label(format!("{}/{}", completed, total));
    f.render_widget(done, cards[1]);

    let active = Paragraph::new(Span::styled(
        ledger.active_count().to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL).title("Active reminders"));
    f.render_widget(active, cards[2]);

    let block = Block::default().borders(Borders::ALL).title("By category");
    let inner = block.inner(rows[1]);
    f.render_widget(block, rows[1]);
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); breakdown.len()])
        .split(inner);
    for ((kind, stats), slot) in breakdown.iter().zip(slots.iter()) {
        let gauge = Gauge::default()
            .block(Block::default().title(format!("{} ({} of {})", category_label(*kind), stats.completed, stats.total)))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio((stats.percentage / 100.0).clamp(0.0, 1.0));
        f.render_widget(gauge, *slot);
    }

    let tip = Paragraph::new(RECOMMENDATION_OF_THE_DAY)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Recommendation of the day"));
    f.render_widget(tip, rows[2]);
}

fn score_gauge(f: &mut Frame, title: &str, score: u8, area: Rect) {
    let color = if score >= 80 {
        Color::Green
    } else if score >= 50 {
        Color::Yellow
    } else {
        Color::Red
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .gauge_style(Style::default().fg(color))
        .percent(u16::from(score))
        .label(format!("{}% {}", score, score_verdict(score)));
    f.render_widget(gauge, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height - height) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height - height) / 2),
        ].as_ref())
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ].as_ref())
        .split(popup_layout[1])[1]
}
