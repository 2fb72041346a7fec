//! Rendering for the portfolio application.
//!
//! Pure view code: reads application state, draws widgets, mutates
//! nothing. The console panel keeps its newest line in view by scrolling
//! to the tail on every frame.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::app::{ContactField, GardenApp, Mode, SendState};
use super::sections::{SectionId, CONTACT_TEXT, EXPERIENCE_TEXT, HOME_TEXT, PROJECTS, SKILLS};
use super::theme::{current_theme, Theme};
use crate::achievements::AchievementId;
use crate::terminal::LineKind;

/// Draw one frame.
pub fn draw(frame: &mut Frame, app: &GardenApp) {
    let theme = current_theme();
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_nav(frame, chunks[0], app, &theme);

    if app.garden.session().is_open() {
        let halves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Percentage(50)])
            .split(chunks[1]);
        render_section(frame, halves[0], app, &theme);
        render_console(frame, halves[1], app, &theme);
    } else {
        render_section(frame, chunks[1], app, &theme);
    }

    render_footer(frame, chunks[2], app, &theme);

    match app.mode {
        Mode::Contact => render_contact_form(frame, area, app, &theme),
        Mode::ConfirmReset => render_confirm_reset(frame, area, &theme),
        Mode::Help => render_help(frame, area, &theme),
        _ => {}
    }

    render_toast(frame, area, app, &theme);
}

fn render_nav(frame: &mut Frame, area: Rect, app: &GardenApp, theme: &Theme) {
    let mut spans = vec![Span::styled(" Digital Garden 🌱", theme.accent_bold_style())];
    for (i, section) in SectionId::ALL.iter().enumerate() {
        spans.push(Span::styled("  ", theme.text_secondary_style()));
        let style = if i == app.section_idx {
            theme.accent_bold_style().add_modifier(Modifier::UNDERLINED)
        } else {
            theme.text_secondary_style()
        };
        spans.push(Span::styled(section.title(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_section(frame: &mut Frame, area: Rect, app: &GardenApp, theme: &Theme) {
    if app.section() == SectionId::Skills {
        render_skills(frame, area, theme);
        return;
    }

    let profile = &app.garden.config().profile;
    let mut lines: Vec<Line> = Vec::new();
    match app.section() {
        SectionId::Home => push_text(&mut lines, HOME_TEXT, theme),
        SectionId::About => {
            push_text(&mut lines, &profile.about, theme);
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                profile.skills.clone(),
                theme.text_secondary_style(),
            )));
        }
        SectionId::Projects => {
            for project in PROJECTS {
                lines.push(Line::from(Span::styled(
                    format!("▸ {}", project.name),
                    theme.accent_bold_style(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  {}", project.summary),
                    theme.text_style(),
                )));
                lines.push(Line::from(""));
            }
        }
        SectionId::Experience => push_text(&mut lines, EXPERIENCE_TEXT, theme),
        SectionId::Contact => push_text(&mut lines, CONTACT_TEXT, theme),
        SectionId::Skills => unreachable!(),
    }

    let block = section_block(app.section().title(), theme);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_skills(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = section_block("Skills", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;
    for skill in SKILLS {
        if y >= inner.y + inner.height {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(10)])
            .split(row);
        frame.render_widget(
            Paragraph::new(skill.name).style(theme.text_style()),
            cols[0],
        );
        let gauge = Gauge::default()
            .ratio(f64::from(skill.level) / 100.0)
            .label(format!("{}%", skill.level))
            .gauge_style(theme.accent_style())
            .use_unicode(true);
        frame.render_widget(gauge, cols[1]);
        y += 2;
    }
}

fn render_console(frame: &mut Frame, area: Rect, app: &GardenApp, theme: &Theme) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" garden@digital:~ ", theme.accent_style()))
        .border_style(theme.accent_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 {
        return;
    }
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    // Multi-line responses (e.g. help) become one visual line each
    let mut lines: Vec<Line> = Vec::new();
    for entry in app.garden.session().lines() {
        let style = match entry.kind {
            LineKind::Command => theme.command_style(),
            LineKind::Response => theme.text_style(),
            LineKind::Notice => theme.accent_style(),
        };
        for part in entry.to_string().lines() {
            lines.push(Line::from(Span::styled(part.to_string(), style)));
        }
    }
    // Keep the newest line in view
    let offset = lines.len().saturating_sub(parts[0].height as usize) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), parts[0]);

    let prompt = Line::from(vec![
        Span::styled("> ", theme.accent_bold_style()),
        Span::styled(&*app.input, theme.text_style()),
        Span::styled("▌", theme.accent_style()),
    ]);
    frame.render_widget(Paragraph::new(prompt), parts[1]);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &GardenApp, theme: &Theme) {
    let hints: &[(&str, &str)] = match app.mode {
        Mode::Normal => &[
            ("←/→", "sections"),
            ("↑/↓", "scroll"),
            ("c", "contact"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Mode::Terminal => &[("Enter", "run"), ("Esc", "close")],
        Mode::Contact => &[("Tab", "next field"), ("Enter", "send"), ("Esc", "back")],
        Mode::Help => &[("any key", "back")],
        Mode::ConfirmReset => &[("y", "reset"), ("n", "keep")],
    };
    let mut spans = build_hint_spans(hints, theme);
    spans.push(Span::styled(
        format!(
            "  ·  {}/{} achievements",
            app.garden.tracker().unlocked_count(),
            AchievementId::ALL.len()
        ),
        theme.text_secondary_style(),
    ));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Build styled spans for footer keybinding hints.
fn build_hint_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ".to_string(), theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(format!(": {desc}"), theme.text_secondary_style()));
    }
    spans
}

fn render_toast(frame: &mut Frame, area: Rect, app: &GardenApp, theme: &Theme) {
    let Some(toast) = &app.active_toast else {
        return;
    };
    let width = (UnicodeWidthStr::width(toast.text.as_str()) as u16 + 4)
        .min(area.width.saturating_sub(2));
    if width < 4 || area.height < 5 {
        return;
    }
    let rect = Rect::new(area.right().saturating_sub(width + 1), area.y + 1, width, 3);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style());
    let text = Paragraph::new(Span::styled(&*toast.text, theme.accent_bold_style()))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(text, rect);
}

fn render_contact_form(frame: &mut Frame, area: Rect, app: &GardenApp, theme: &Theme) {
    let rect = centered_rect(60, 70, area);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Contact ", theme.accent_bold_style()))
        .border_style(theme.accent_style());
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.height < 10 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let focus = app.contact.focus;
    render_field(frame, rows[0], "Name", &app.contact.name, focus == ContactField::Name, theme);
    render_field(frame, rows[1], "Email", &app.contact.email, focus == ContactField::Email, theme);
    render_field(
        frame,
        rows[2],
        "Message",
        &app.contact.message,
        focus == ContactField::Message,
        theme,
    );

    let label = match app.contact.send {
        SendState::Idle => {
            let style = if focus == ContactField::Send {
                theme.accent_bold_style()
            } else {
                theme.text_style()
            };
            Span::styled("[ Send ]", style)
        }
        SendState::Sending(_) => Span::styled("Sending...", theme.text_secondary_style()),
        SendState::Sent(_) => {
            Span::styled("Sent!", theme.success_style().add_modifier(Modifier::BOLD))
        }
    };
    frame.render_widget(
        Paragraph::new(label).alignment(Alignment::Center),
        rows[3],
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &'static str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let border = if focused {
        theme.accent_style()
    } else {
        theme.text_secondary_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(label)
        .border_style(border);
    let text = Paragraph::new(value.to_string())
        .style(theme.text_style())
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(text, area);
}

fn render_confirm_reset(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rect = centered_rect(50, 20, area);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Reset achievements ", theme.error_style()))
        .border_style(theme.error_style());
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            "This clears every unlocked achievement.",
            theme.text_style(),
        )),
        Line::from(Span::styled("Are you sure? (y/N)", theme.text_style())),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: false });
    frame.render_widget(text, rect);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rect = centered_rect(60, 60, area);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Help ", theme.accent_bold_style()))
        .border_style(theme.accent_style());
    let keys = [
        ("←/→, Tab", "move between sections"),
        ("↑/↓, PgUp/PgDn", "scroll the current section"),
        ("c", "open the contact form"),
        ("R", "reset achievements"),
        ("q", "quit"),
    ];
    let mut lines: Vec<Line> = keys
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<16}"), theme.accent_style()),
                Span::styled(*desc, theme.text_style()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Not everything in the garden is on the map.",
        theme.text_secondary_style(),
    )));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn section_block(title: &'static str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::TOP)
        .title(Span::styled(format!(" {title} "), theme.accent_style()))
        .border_style(theme.text_secondary_style())
}

/// Create a centered layout with the given percentage constraints.
///
/// Returns the center area that can be used for content.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn push_text(lines: &mut Vec<Line<'static>>, text: &str, theme: &Theme) {
    for part in text.lines() {
        lines.push(Line::from(Span::styled(
            part.to_string(),
            theme.text_style(),
        )));
    }
}
