use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Tabs};

use crate::config::Lang;
use crate::land::{
    PH_BOUNDS, RAINFALL_BOUNDS, SALINITY_BOUNDS, SOIL_TYPES, TEMPERATURE_BOUNDS,
};
use crate::output::formatter;
use crate::tui::app::{App, FormField, InputMode, View};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 16 || area.width < 48 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Form(7) + Banner(1) + Tabs(1) + Table(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(7), // Input form
        Constraint::Length(1), // Verdict banner
        Constraint::Length(1), // Tab bar
        Constraint::Fill(1),   // Results table
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_form(frame, chunks[1], app);
    render_banner(frame, chunks[2], app);
    render_tabs(frame, chunks[3], app);
    render_table(frame, chunks[4], app);
    render_status_bar(frame, chunks[5], app);

    // Render overlays based on input mode
    match app.input_mode {
        InputMode::Breakdown => render_breakdown_popup(frame, app),
        InputMode::Help => render_help_popup(frame, app),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.lang {
        Lang::Ar => "🌾 mazra — تقييم الأرض الزراعية وترشيح المحاصيل",
        Lang::En => "🌾 mazra — land evaluation & crop recommendation",
    };
    let line = Line::from(Span::styled(
        title,
        Style::default().fg(app.theme.title_color).bold(),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn field_label(field: FormField, lang: Lang) -> &'static str {
    match lang {
        Lang::Ar => match field {
            FormField::Soil => "🌍 نوع التربة",
            FormField::Ph => "⚗️ pH التربة",
            FormField::Rainfall => "🌧️ الأمطار (مم)",
            FormField::Temperature => "🌡️ الحرارة (°C)",
            FormField::Salinity => "🧂 الملوحة (dS/m)",
        },
        Lang::En => match field {
            FormField::Soil => "🌍 Soil type",
            FormField::Ph => "⚗️ Soil pH",
            FormField::Rainfall => "🌧️ Rainfall (mm)",
            FormField::Temperature => "🌡️ Temperature (°C)",
            FormField::Salinity => "🧂 Salinity (dS/m)",
        },
    }
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let block_title = match app.lang {
        Lang::Ar => " 📋 بيانات التربة والمناخ ",
        Lang::En => " 📋 Land & climate ",
    };
    let block = Block::bordered().title(block_title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1); 5]).split(inner);

    for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
        render_field_line(frame, *row, app, *field);
    }
}

fn render_field_line(frame: &mut Frame, area: Rect, app: &App, field: FormField) {
    let focused = app.focused == field;
    let marker = if focused { "▸ " } else { "  " };
    let label_style = if focused {
        app.theme.field_focused
    } else {
        Style::default().fg(app.theme.field_label)
    };

    let mut spans = vec![
        Span::styled(marker, label_style),
        Span::styled(format!("{:<18}", field_label(field, app.lang)), label_style),
        Span::raw(" "),
    ];

    match field {
        FormField::Soil => {
            let soil = &SOIL_TYPES[app.soil_index];
            spans.push(Span::styled("◂ ", Style::default().fg(app.theme.muted)));
            spans.push(Span::styled(soil.display(), label_style));
            spans.push(Span::styled(" ▸", Style::default().fg(app.theme.muted)));
            spans.push(Span::styled(
                format!("  ({}/{})", app.soil_index + 1, SOIL_TYPES.len()),
                Style::default().fg(app.theme.muted),
            ));
        }
        FormField::Ph => {
            spans.push(Span::raw(format!("{:>6.1}  ", app.conditions.ph)));
            spans.extend(slider_spans(app, app.conditions.ph, PH_BOUNDS.0, PH_BOUNDS.1));
        }
        FormField::Rainfall => {
            spans.push(Span::raw(format!("{:>6}  ", app.conditions.rainfall)));
            spans.extend(slider_spans(
                app,
                app.conditions.rainfall as f64,
                RAINFALL_BOUNDS.0 as f64,
                RAINFALL_BOUNDS.1 as f64,
            ));
        }
        FormField::Temperature => {
            spans.push(Span::raw(format!("{:>6}  ", app.conditions.temperature)));
            spans.extend(slider_spans(
                app,
                app.conditions.temperature as f64,
                TEMPERATURE_BOUNDS.0 as f64,
                TEMPERATURE_BOUNDS.1 as f64,
            ));
        }
        FormField::Salinity => {
            spans.push(Span::raw(format!("{:>6.1}  ", app.conditions.salinity)));
            spans.extend(slider_spans(
                app,
                app.conditions.salinity,
                SALINITY_BOUNDS.0,
                SALINITY_BOUNDS.1,
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Horizontal slider track showing where a value sits within its bounds.
fn slider_spans(app: &App, value: f64, min: f64, max: f64) -> Vec<Span<'static>> {
    const WIDTH: usize = 20;
    let ratio = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * WIDTH as f64).round() as usize;
    let empty = WIDTH.saturating_sub(filled);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled(
            "█".repeat(filled),
            Style::default().fg(app.theme.slider_filled),
        ));
    }
    if empty > 0 {
        spans.push(Span::styled(
            "░".repeat(empty),
            Style::default().fg(app.theme.bar_empty),
        ));
    }
    spans
}

fn render_banner(frame: &mut Frame, area: Rect, app: &App) {
    let label = app.assessment.verdict.label(app.lang);
    let max = match app.lang {
        Lang::Ar => format!(" (أقصى توافق: {:.1}%)", app.assessment.max_suitability),
        Lang::En => format!(" (max suitability: {:.1}%)", app.assessment.max_suitability),
    };
    let line = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(app.theme.verdict_color(app.assessment.verdict))
                .bold(),
        ),
        Span::styled(max, Style::default().fg(app.theme.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles = match app.lang {
        Lang::Ar => vec!["🌱 المقترحة", "الكل"],
        Lang::En => vec!["🌱 Recommended", "All crops"],
    };
    let selected = match app.current_view {
        View::Recommended => 0,
        View::All => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive_style)
        .highlight_style(app.theme.tab_active_style.reversed())
        .divider(" | ");

    frame.render_widget(tabs, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App) {
    if app.visible_rows().is_empty() {
        let empty_msg = Paragraph::new(formatter::empty_notice(app.lang))
            .alignment(Alignment::Center)
            .block(Block::default());
        frame.render_widget(empty_msg, area);
        return;
    }

    let headers = match app.lang {
        Lang::Ar => ["#", "المحصول", "التوافق %", "الإنتاجية"],
        Lang::En => ["#", "Crop", "Suit %", "Yield"],
    };

    let rows: Vec<Row> = app
        .visible_rows()
        .iter()
        .enumerate()
        .map(|(idx, eval)| {
            let index = format!("{}.", idx + 1);
            let score_color = app.theme.score_color(eval.suitability);

            let mut score_spans = vec![Span::styled(
                format!("{:>5.1} ", eval.suitability),
                Style::default().fg(score_color),
            )];
            score_spans.extend(suitability_bar(app, eval.suitability, 10));
            let score_line = Line::from(score_spans);

            // Alternating row background (odd rows get subtle background)
            let row_style = if idx % 2 == 1 {
                Style::default().bg(app.theme.row_alt_bg)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(index).style(Style::default().fg(app.theme.index_color)),
                Cell::from(eval.crop.display_name()),
                Cell::from(score_line),
                Cell::from(format!("{:.2}", eval.expected_yield)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),  // Index: "10."
        Constraint::Fill(1),    // Crop name
        Constraint::Length(18), // Score + bar
        Constraint::Length(10), // Expected yield
    ];

    let header_style = app.theme.header_style;
    let row_selected = app.theme.row_selected;
    let table = Table::new(rows, widths)
        .header(Row::new(headers.to_vec()).style(header_style).bottom_margin(1))
        .row_highlight_style(row_selected);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn suitability_bar(app: &App, suitability: f64, width: usize) -> Vec<Span<'static>> {
    let ratio = (suitability / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let bar_color = app.theme.score_color(suitability);
    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled(
            "█".repeat(filled),
            Style::default().fg(bar_color),
        ));
    }
    if empty > 0 {
        spans.push(Span::styled(
            "░".repeat(empty),
            Style::default().fg(app.theme.bar_empty),
        ));
    }
    spans
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(app.theme.flash_color),
        ))
    } else {
        let count = match app.current_view {
            View::Recommended => format!("{} recommended", app.assessment.recommended.len()),
            View::All => format!("{} crops", app.assessment.all.len()),
        };

        let hints = [
            ("j/k", ":field "),
            ("h/l", ":adjust "),
            ("H/L", ":coarse "),
            ("Tab", ":view "),
            ("b", ":details "),
            ("r", ":reset "),
            ("?", ":help "),
            ("q", ":quit"),
        ];

        let mut spans = vec![
            Span::styled(count, Style::default().fg(app.theme.muted)),
            Span::raw("  "),
        ];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(app.theme.status_key_color),
            ));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(app.theme.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the per-crop criterion breakdown popup
fn render_breakdown_popup(frame: &mut Frame, app: &App) {
    let Some(eval) = app.selected_evaluation() else {
        return;
    };

    let popup_area = centered_rect_fixed(56, 12, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .border_style(Style::default().fg(app.theme.popup_border))
        .title(Span::styled(
            format!(" {} ", eval.crop.display_name()),
            app.theme.popup_title,
        ));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines = Vec::with_capacity(eval.score.checks.len() + 4);
    for check in &eval.score.checks {
        let (mark, color) = if check.passed {
            ("✓", app.theme.check_pass)
        } else {
            ("✗", app.theme.check_fail)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", mark), Style::default().fg(color).bold()),
            Span::styled(format!("{:<12}", check.label), Style::default().fg(color)),
            Span::styled(check.detail.clone(), Style::default().fg(app.theme.muted)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("{:.1}%", eval.suitability),
            Style::default()
                .fg(app.theme.score_color(eval.suitability))
                .bold(),
        ),
        Span::styled(
            format!("  →  {:.2} ton/feddan", eval.expected_yield),
            Style::default().fg(app.theme.muted),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " j/k: other crops | Esc: close",
        Style::default().fg(app.theme.muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(52, 15, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .border_style(Style::default().fg(app.theme.popup_border))
        .title(" Keyboard Shortcuts ");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(app.theme.status_key_color).bold();
    let help_lines = vec![
        Line::from(vec![
            Span::styled("j / Down      ", key_style),
            Span::raw("Next form field"),
        ]),
        Line::from(vec![
            Span::styled("k / Up        ", key_style),
            Span::raw("Previous form field"),
        ]),
        Line::from(vec![
            Span::styled("h / Left      ", key_style),
            Span::raw("Decrease value / previous soil"),
        ]),
        Line::from(vec![
            Span::styled("l / Right     ", key_style),
            Span::raw("Increase value / next soil"),
        ]),
        Line::from(vec![
            Span::styled("H / L         ", key_style),
            Span::raw("Coarse adjust"),
        ]),
        Line::from(vec![
            Span::styled("Tab           ", key_style),
            Span::raw("Toggle Recommended/All crops"),
        ]),
        Line::from(vec![
            Span::styled("b             ", key_style),
            Span::raw("Criterion breakdown for a crop"),
        ]),
        Line::from(vec![
            Span::styled("r             ", key_style),
            Span::raw("Reset form to defaults"),
        ]),
        Line::from(vec![
            Span::styled("?             ", key_style),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![
            Span::styled("q / Ctrl-c    ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(app.theme.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}
