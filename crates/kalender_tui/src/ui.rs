//! Terminal rendering for the landing view, calendar view and modals.
//!
//! # Responsibility
//! - Draw the current `App` state; no state mutation happens here.
//! - Map opaque style tokens to terminal colors.

use crate::app::{App, EditField, View};
use chrono::Datelike;
use kalender_core::{
    CalendarEvent, IdentityRepository, SchoolIdentity, DAY_NAMES, MONTH_NAMES,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const CELL_WIDTH: usize = 5;

/// Static resource links shown on the landing view.
const RESOURCE_LINKS: [(&str, &str); 5] = [
    (
        "Regulasi",
        "https://drive.google.com/drive/folders/1I-caNlfvfiq0vCVjdHPgIsI1cWpv9iMV",
    ),
    (
        "KKG PAI SD KAB BANDUNG",
        "https://drive.google.com/drive/folders/1TzLmke0b_FOfXcaO8xaLzhzZ0aSKvsYL",
    ),
    (
        "Kemendikdasmen",
        "https://drive.google.com/drive/folders/1i3smJL-qBzKgCJjovBE5LbjihRxiS-_-",
    ),
    (
        "Foto & Video Player",
        "https://drive.google.com/drive/folders/1Dus0HbnGiKqHT6JmogtYGZXqVponBygM",
    ),
    (
        "Monitoring",
        "https://drive.google.com/drive/folders/1Poh7_FMTutAi7568nsPMkgRKX4RrcsEN",
    ),
];

const INFO_NOTES: [&str; 4] = [
    "Pembelajaran mandiri diharapkan tidak membebani murid dengan PR berlebihan.",
    "Kegiatan di sekolah fokus pada peningkatan iman, takwa, dan karakter mulia.",
    "Penyesuaian aktivitas fisik (PJOK) selama bulan Ramadan.",
    "Libur Idulfitri dimanfaatkan untuk silaturahmi dan persaudaraan.",
];

const LEGEND: [(&str, &str); 5] = [
    ("Mandiri (Senin-Jumat)", "amber"),
    ("Sekolah (Senin-Jumat)", "emerald"),
    ("Libur Idulfitri", "rose"),
    ("Pembiasaan Baik", "red"),
    ("Masuk Kembali", "blue"),
];

pub fn draw<R: IdentityRepository>(frame: &mut Frame<'_>, app: &App<R>) {
    match app.view {
        View::Landing => draw_landing(frame, app),
        View::Calendar => draw_calendar(frame, app),
    }

    if let Some(event) = &app.detail {
        draw_detail_modal(frame, event);
    }
    if app.identity.is_editing() {
        draw_edit_modal(frame, app);
    }
}

/// Maps a style token to a terminal color; unknown tokens degrade to gray.
fn token_color(token: &str) -> Color {
    match token {
        "amber" => Color::Yellow,
        "emerald" => Color::Green,
        "rose" => Color::LightMagenta,
        "rose-muted" => Color::Magenta,
        "red" => Color::Red,
        "blue" => Color::Blue,
        _ => Color::Gray,
    }
}

fn draw_landing<R: IdentityRepository>(frame: &mut Frame<'_>, app: &App<R>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(RESOURCE_LINKS.len() as u16 + 2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(identity_block(app.identity.committed()), chunks[0]);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "RAMADAN 1447H",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Panduan Pembelajaran & Kalender Interaktif Tahun 2026 Masehi"),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hero, chunks[1]);

    let links: Vec<Line<'_>> = RESOURCE_LINKS
        .iter()
        .map(|(title, url)| {
            Line::from(vec![
                Span::styled(
                    format!("{title}: "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(*url, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(links).block(Block::default().borders(Borders::ALL).title("Tautan")),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new("Enter/c: buka kalender  e: edit identitas  q: keluar")
            .style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );
}

fn draw_calendar<R: IdentityRepository>(frame: &mut Frame<'_>, app: &App<R>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(1),
        ])
        .split(area);

    draw_calendar_header(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(7 * CELL_WIDTH as u16 + 2), Constraint::Min(20)])
        .split(chunks[1]);

    draw_month_grid(frame, app, body[0]);
    draw_sidebar(frame, app, body[1]);

    frame.render_widget(
        Paragraph::new(
            "panah: pilih hari  Enter: detail  [/]: bulan  e: edit identitas  b: beranda  q: keluar",
        )
        .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn identity_block(identity: &SchoolIdentity) -> Paragraph<'_> {
    let logo_line = match identity
        .logo_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
    {
        Some(url) => Line::from(vec![
            Span::styled("Logo: ", Style::default().fg(Color::DarkGray)),
            Span::raw(url),
        ]),
        // Placeholder glyph when no logo URL is set.
        None => Line::from(Span::styled("◈", Style::default().fg(Color::DarkGray))),
    };

    Paragraph::new(vec![
        Line::from(Span::styled(
            identity.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(identity.address.as_str()),
        logo_line,
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Identitas Sekolah"),
    )
}

fn draw_calendar_header<R: IdentityRepository>(frame: &mut Frame<'_>, app: &App<R>, area: Rect) {
    let identity = app.identity.committed();
    let back = if app.window.can_step_back() {
        Span::raw("< ")
    } else {
        Span::styled("< ", Style::default().fg(Color::DarkGray))
    };
    let forward = if app.window.can_step_forward() {
        Span::raw(" >")
    } else {
        Span::styled(" >", Style::default().fg(Color::DarkGray))
    };

    let header = Paragraph::new(Line::from(vec![
        back,
        Span::styled(
            app.window.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        forward,
        Span::raw("  |  "),
        Span::raw(identity.name.as_str()),
        Span::raw(", "),
        Span::styled(
            identity.address.as_str(),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_month_grid<R: IdentityRepository>(frame: &mut Frame<'_>, app: &App<R>, area: Rect) {
    let mut lines = Vec::new();

    lines.push(Line::from(
        DAY_NAMES
            .iter()
            .map(|name| {
                Span::styled(
                    format!("{name:^CELL_WIDTH$}"),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    ));

    for week in app.window.grid().chunks(7) {
        let mut spans = Vec::with_capacity(7);
        for cell in week {
            spans.push(match cell {
                None => Span::raw(" ".repeat(CELL_WIDTH)),
                Some(day) => day_span(app, *day),
            });
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Kalender")),
        area,
    );
}

fn day_span<R: IdentityRepository>(app: &App<R>, day: u32) -> Span<'static> {
    let mut style = match app.event_for(day) {
        Some(event) => Style::default().fg(token_color(&event.style)),
        None => Style::default(),
    };
    if day == app.cursor_day {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!("{day:^CELL_WIDTH$}"), style)
}

fn draw_sidebar<R: IdentityRepository>(frame: &mut Frame<'_>, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LEGEND.len() as u16 + 2),
            Constraint::Min(4),
        ])
        .split(area);

    let legend_lines: Vec<Line<'_>> = LEGEND
        .iter()
        .map(|(label, token)| {
            Line::from(vec![
                Span::styled("  ", Style::default().bg(token_color(token))),
                Span::raw(" "),
                Span::raw(*label),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(legend_lines)
            .block(Block::default().borders(Borders::ALL).title("Keterangan")),
        chunks[0],
    );

    let mut info_lines = Vec::new();
    if let Some(event) = app.event_under_cursor() {
        info_lines.push(Line::from(Span::styled(
            event.title.clone(),
            Style::default()
                .fg(token_color(&event.style))
                .add_modifier(Modifier::BOLD),
        )));
        info_lines.push(Line::from(date_range_label(&event)));
        info_lines.push(Line::default());
    }
    for note in INFO_NOTES {
        info_lines.push(Line::from(format!("- {note}")));
    }
    frame.render_widget(
        Paragraph::new(info_lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Informasi Penting"),
            ),
        chunks[1],
    );
}

fn draw_detail_modal(frame: &mut Frame<'_>, event: &CalendarEvent) {
    let area = centered_rect(frame.area(), 60, 10);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            event.title.clone(),
            Style::default()
                .fg(token_color(&event.style))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(date_range_label(event)),
        Line::default(),
        Line::from(event.description.clone()),
        Line::default(),
        Line::from(Span::styled(
            "Esc: tutup",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Detail Kegiatan")),
        area,
    );
}

fn draw_edit_modal<R: IdentityRepository>(frame: &mut Frame<'_>, app: &App<R>) {
    let Some(draft) = app.identity.draft() else {
        return;
    };
    let area = centered_rect(frame.area(), 64, 9);
    frame.render_widget(Clear, area);

    let lines = vec![
        edit_field_line("Nama Sekolah", &draft.name, app.edit_field == EditField::Name),
        edit_field_line(
            "Alamat Sekolah",
            &draft.address,
            app.edit_field == EditField::Address,
        ),
        edit_field_line(
            "URL Logo (Opsional)",
            draft.logo_url.as_deref().unwrap_or(""),
            app.edit_field == EditField::LogoUrl,
        ),
        Line::default(),
        Line::from(Span::styled(
            "Tab: ganti kolom  Enter: simpan  Esc: batal",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Edit Identitas Sekolah"),
        ),
        area,
    );
}

fn edit_field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![Span::styled(format!("{label}: "), label_style), Span::raw(value)];
    if focused {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }
    Line::from(spans)
}

/// Formats the inclusive range as display text, collapsing single days.
fn date_range_label(event: &CalendarEvent) -> String {
    let start = &event.start_date;
    let end = &event.end_date;
    if event.is_multi_day() {
        format!(
            "{} {} - {} {} {}",
            start.day(),
            MONTH_NAMES[start.month0() as usize],
            end.day(),
            MONTH_NAMES[end.month0() as usize],
            end.year(),
        )
    } else {
        format!(
            "{} {} {}",
            start.day(),
            MONTH_NAMES[start.month0() as usize],
            start.year(),
        )
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::{date_range_label, token_color};
    use chrono::NaiveDate;
    use kalender_core::resolve;
    use ratatui::style::Color;

    #[test]
    fn unknown_token_degrades_to_gray() {
        assert_eq!(token_color("bg-red-100"), Color::Gray);
        assert_eq!(token_color("red"), Color::Red);
    }

    #[test]
    fn range_label_collapses_single_days() {
        let single = resolve(2026, 2, 30).expect("return-to-school day resolves");
        assert_eq!(date_range_label(&single), "30 Maret 2026");

        let ranged = resolve(2026, 1, 18).expect("independent study resolves");
        assert_eq!(
            ranged.start_date,
            NaiveDate::from_ymd_opt(2026, 2, 18).expect("valid date")
        );
        assert_eq!(date_range_label(&ranged), "18 Februari - 20 Februari 2026");
    }
}
