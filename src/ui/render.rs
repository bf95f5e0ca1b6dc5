use crate::api::NameCandidate;
use crate::session::{tag_label, transliterate_full, Gender, Screen, Session, TAG_CHOICES};
use crate::ui::app::App;
use crate::ui::form::FormField;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draw the whole UI. `loading` overlays a spinner on top of the current screen.
pub fn render(frame: &mut Frame, app: &App, session: &Session, loading: bool) {
    let theme = &app.theme;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg)),
        frame.area(),
    );

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, session, main_chunks[0]);

    match session.screen() {
        Screen::Input => render_input(frame, app, main_chunks[1]),
        Screen::Selection => render_selection(frame, app, session, main_chunks[1]),
        Screen::Meaning => render_meaning(frame, theme, session, main_chunks[1]),
        Screen::Fortune => render_fortune(frame, theme, session, main_chunks[1]),
    }

    render_footer(frame, app, session, main_chunks[2]);

    if loading {
        render_loading(frame, app);
    }
    if let Some(message) = &app.alert {
        render_alert(frame, theme, message);
    }
}

fn render_header(frame: &mut Frame, app: &App, session: &Session, area: Rect) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(
            "  NAEILUM ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {}", session.screen().title()),
            Style::default().fg(theme.fg),
        ),
        Span::styled(
            format!("   {}", app.server_url),
            Style::default().fg(theme.fg_dim),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(header, area);
}

fn field_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(theme.accent)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg)
    }
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let form = &app.form;
    let mut lines = vec![
        Line::from(Span::styled(
            "Tell us your name and we will find its Korean counterpart.",
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(""),
    ];

    for (field, label, value) in [
        (FormField::FirstName, "First name", &form.first_name),
        (FormField::LastName, "Last name ", &form.last_name),
    ] {
        let focused = form.focus == field;
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(theme.fg_dim)),
            Span::styled(format!("{value}{cursor}"), field_style(theme, focused)),
        ]));
    }

    lines.push(Line::from(""));
    let arrow = if form.options_open { "▼" } else { "▶" };
    lines.push(Line::from(Span::styled(
        format!("{arrow} Options"),
        field_style(theme, form.focus == FormField::Options),
    )));

    if form.options_open {
        let radios: Vec<String> = Gender::ALL
            .iter()
            .map(|g| {
                let mark = if *g == form.gender { "(•)" } else { "( )" };
                format!("{mark} {}", g.label())
            })
            .collect();
        lines.push(Line::from(vec![
            Span::styled("    Gender: ", Style::default().fg(theme.fg_dim)),
            Span::styled(
                radios.join("  "),
                field_style(theme, form.focus == FormField::Gender),
            ),
        ]));

        lines.push(Line::from(Span::styled(
            "    Tags:",
            Style::default().fg(theme.fg_dim),
        )));
        for (i, ((value, label), checked)) in TAG_CHOICES.iter().zip(form.tags.iter()).enumerate()
        {
            let mark = if *checked { "[x]" } else { "[ ]" };
            lines.push(Line::from(Span::styled(
                format!("      {mark} {value} ({label})"),
                field_style(theme, form.focus == FormField::Tag(i)),
            )));
        }

        let mark = if form.save { "[x]" } else { "[ ]" };
        lines.push(Line::from(Span::styled(
            format!("    {mark} Save my choice"),
            field_style(theme, form.focus == FormField::Save),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [ Find my Korean name ]  ",
        field_style(theme, form.focus == FormField::Submit),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ✍️  Your Name ")
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn candidate_card<'a>(
    theme: &Theme,
    candidate: &NameCandidate,
    highlighted: bool,
    selected: bool,
) -> ListItem<'a> {
    let mark = if selected { "✔ " } else { "  " };
    let base = if highlighted {
        Style::default().bg(theme.highlight_bg)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(mark.to_string(), base.fg(theme.success)),
            Span::styled(
                candidate.name_kr.clone(),
                base.fg(theme.secondary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", candidate.hanja_string()), base.fg(theme.secondary)),
            Span::styled(format!("  {}", candidate.name_en), base.fg(theme.fg)),
        ]),
        Line::from(Span::styled(
            format!("    {}", candidate.summary),
            base.fg(theme.fg_dim),
        )),
        Line::from(""),
    ];
    ListItem::new(lines)
}

fn render_selection(frame: &mut Frame, app: &App, session: &Session, area: Rect) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let display_name = session.user_data().display_name();
    let intro = Paragraph::new(Line::from(vec![
        Span::styled(display_name.clone(), Style::default().fg(theme.fg)),
        Span::styled("  →  ", Style::default().fg(theme.fg_dim)),
        Span::styled(
            transliterate_full(&display_name),
            Style::default().fg(theme.secondary),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(intro, chunks[0]);

    // Rebuilt from scratch every frame.
    let items: Vec<ListItem> = session
        .candidates()
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            candidate_card(
                theme,
                candidate,
                i == app.card_cursor,
                session.selected_card() == Some(i),
            )
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 🌸 Name Candidates ")
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(list, chunks[1]);
}

fn render_meaning(frame: &mut Frame, theme: &Theme, session: &Session, area: Rect) {
    let lines = match session.selected_name() {
        Some(name) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        name.name_kr.clone(),
                        Style::default()
                            .fg(theme.secondary)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", name.hanja_string()),
                        Style::default().fg(theme.secondary),
                    ),
                ]),
                Line::from(Span::styled(
                    name.name_en.clone(),
                    Style::default().fg(theme.fg),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Family name",
                    Style::default().fg(theme.accent),
                )),
                Line::from(vec![
                    Span::styled(
                        format!("  {} ({}) ", name.family_name.korean, name.family_name.hanja),
                        Style::default().fg(theme.secondary),
                    ),
                    Span::styled(
                        name.family_name.meaning.clone(),
                        Style::default().fg(theme.fg),
                    ),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "Given name",
                    Style::default().fg(theme.accent),
                )),
            ];

            lines.extend(name.given_name.iter().map(|part| {
                Line::from(vec![
                    Span::styled(
                        format!("  {} ({}) ", part.syllable, part.hanja),
                        Style::default().fg(theme.secondary),
                    ),
                    Span::styled(part.meaning.clone(), Style::default().fg(theme.fg)),
                ])
            }));

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                name.summary.clone(),
                Style::default()
                    .fg(theme.fg)
                    .add_modifier(Modifier::ITALIC),
            )));
            lines
        }
        None => vec![Line::from("No name selected")],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 📜 Meaning ")
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_fortune(frame: &mut Frame, theme: &Theme, session: &Session, area: Rect) {
    let tags: Vec<&str> = session.current_tags().iter().map(|t| tag_label(t)).collect();

    let lines = match session.fortune() {
        Some(fortune) => {
            let section = |title: &str, body: &str| {
                vec![
                    Line::from(Span::styled(
                        title.to_string(),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(body.to_string(), Style::default().fg(theme.fg))),
                    Line::from(""),
                ]
            };

            let mut lines = vec![
                Line::from(vec![
                    Span::styled(fortune.date.clone(), Style::default().fg(theme.secondary)),
                    Span::styled(
                        format!("   {}", tags.join(", ")),
                        Style::default().fg(theme.fg_dim),
                    ),
                ]),
                Line::from(""),
            ];
            lines.extend(section("🥠 Cosmic Cookie", &fortune.cosmic_cookie));
            lines.extend(section("🍪 Lucky Snack", &fortune.lucky_snack));
            lines.extend(section("🔮 A Deeper Look", &fortune.deeper_look));
            lines
        }
        None => vec![Line::from("No fortune yet")],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ✨ Fortune ")
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, session: &Session, area: Rect) {
    let help_text = if app.alert.is_some() {
        "[Enter/Esc] Dismiss"
    } else {
        match session.screen() {
            Screen::Input => {
                "[Tab/↑↓] Move  [Space] Toggle  [Ctrl+O] Options  [Enter] Submit  [Ctrl+C] Quit"
            }
            Screen::Selection if session.selected_card().is_some() => {
                "[↑↓/jk] Move  [Space] Select  [Enter/c] Confirm  [p] Preview  [r] Restart  [q] Quit"
            }
            Screen::Selection => "[↑↓/jk] Move  [Space] Select  [p] Preview  [r] Restart  [q] Quit",
            Screen::Meaning => "[f/Enter] Today's fortune  [r] Restart  [q] Quit",
            Screen::Fortune => "[m/Enter] Other fortunes  [r] Restart  [q] Quit",
        }
    };

    let footer = Paragraph::new(help_text).style(Style::default().fg(app.theme.fg_dim));
    frame.render_widget(footer, area);
}

/// A rectangle of `width` × `height` centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_loading(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(36, 5, frame.area());
    let spinner = SPINNER[app.spinner_tick % SPINNER.len()];

    let popup = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {spinner} Consulting the stars..."),
            Style::default().fg(theme.fg),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn render_alert(frame: &mut Frame, theme: &Theme, message: &str) {
    let area = centered_rect(50, 7, frame.area());
    let popup = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.fg))),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(theme.fg_dim),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" ⚠ Notice ")
            .border_style(Style::default().fg(theme.error))
            .style(Style::default().bg(theme.bg)),
    )
    .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(36, 5, area);
        assert_eq!(rect, Rect::new(32, 17, 36, 5));
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(2, 3, 20, 4);
        let rect = centered_rect(36, 5, area);
        assert_eq!(rect, Rect::new(2, 3, 20, 4));
    }
}
