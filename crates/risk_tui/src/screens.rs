//! Screen rendering functions for the TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use risk_core::dashboard::DashboardModel;
use risk_core::types::{RecentRisk, Risk, RiskMetrics, RiskStatus, Severity};

use crate::app::FetchState;

/// Dashboard colour for a severity tier.
///
/// Mirrors the fixed visual encoding: critical = error-strong,
/// high = error-light, medium = warning, low = success.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::LightRed,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Green,
    }
}

/// Card icon for a severity tier.
pub fn severity_symbol(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "✖",
        Severity::High => "⚠",
        Severity::Medium => "ℹ",
        Severity::Low => "✔",
    }
}

/// Label of a recent-risks entry: `title (severity)`.
pub fn recent_entry_label(risk: &RecentRisk) -> String {
    format!("{} ({})", risk.title, risk.severity)
}

/// Detail route a recent-risks entry navigates to.
pub fn risk_route(id: u64) -> String {
    format!("/risks/{}", id)
}

/// Draw the dashboard screen
pub fn draw_dashboard(
    frame: &mut Frame,
    area: Rect,
    state: &FetchState<RiskMetrics>,
    selected: usize,
) {
    match state {
        FetchState::Loading => draw_loading(frame, area, "Loading risk metrics..."),
        FetchState::Failed(message) => draw_failed(frame, area, message),
        FetchState::Ready(metrics) => {
            let model = DashboardModel::resolve(metrics);
            draw_ready_dashboard(frame, area, &model, selected);
        }
    }
}

fn draw_loading(frame: &mut Frame, area: Rect, message: &str) {
    let loading = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loading, area);
}

fn draw_failed(frame: &mut Frame, area: Rect, message: &str) {
    let failed = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Error "));
    frame.render_widget(failed, area);
}

fn draw_ready_dashboard(frame: &mut Frame, area: Rect, model: &DashboardModel, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    draw_counters(frame, chunks[0], model);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_severity_cards(frame, content[0], model);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(content[1]);

    draw_status_panel(frame, right[0], model);
    draw_recent_risks(frame, right[1], model, selected);
}

/// Four top-line counters: total, open, critical+high, closed
fn draw_counters(frame: &mut Frame, area: Rect, model: &DashboardModel) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let counters = [
        (model.total_risks, "Total Risks"),
        (model.open_risks, "Open Risks"),
        (model.critical_high(), "Critical/High Risks"),
        (model.closed_risks, "Closed Risks"),
    ];

    for (column, (value, label)) in columns.iter().zip(counters) {
        let counter = Paragraph::new(vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(counter, *column);
    }
}

/// Four severity cards in a 2x2 grid
fn draw_severity_cards(frame: &mut Frame, area: Rect, model: &DashboardModel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let cells = [
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]),
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]),
    ];

    for (index, severity) in Severity::ALL.into_iter().enumerate() {
        let cell = cells[index / 2][index % 2];
        let color = severity_color(severity);

        let card = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", severity_symbol(severity)),
                    Style::default().fg(color),
                ),
                Span::styled(
                    model.severity_count(severity).to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                severity.label(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, cell);
    }
}

/// Status panel with one count per risk state
fn draw_status_panel(frame: &mut Frame, area: Rect, model: &DashboardModel) {
    let lines: Vec<Line> = RiskStatus::ALL
        .into_iter()
        .map(|status| {
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", status.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(model.status_count(status).to_string()),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines)
        .block(Block::default().title(" Risk Status ").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

/// Recent-risks list with the selected entry highlighted
fn draw_recent_risks(frame: &mut Frame, area: Rect, model: &DashboardModel, selected: usize) {
    let lines: Vec<Line> = if model.recent_risks.is_empty() {
        vec![Line::from(Span::styled(
            "No recent risks available",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        model
            .recent_risks
            .iter()
            .enumerate()
            .map(|(index, risk)| {
                let style = if index == selected {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(
                        recent_entry_label(risk),
                        style.fg(severity_color(risk.severity)),
                    ),
                    Span::styled(
                        format!("  → {}", risk_route(risk.id)),
                        style.fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    let list = Paragraph::new(lines)
        .block(Block::default().title(" Recent Risks ").borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// Draw the risk-detail screen
pub fn draw_risk_detail(frame: &mut Frame, area: Rect, state: &FetchState<Risk>) {
    match state {
        FetchState::Loading => draw_loading(frame, area, "Loading risk details..."),
        FetchState::Failed(message) => draw_failed(frame, area, message),
        FetchState::Ready(risk) => {
            let content = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("Title:       ", Style::default().fg(Color::Yellow)),
                    Span::raw(&risk.title),
                ]),
                Line::from(vec![
                    Span::styled("Category:    ", Style::default().fg(Color::Yellow)),
                    Span::raw(&risk.category),
                ]),
                Line::from(vec![
                    Span::styled("Severity:    ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        risk.severity.as_str(),
                        Style::default().fg(severity_color(risk.severity)),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Status:      ", Style::default().fg(Color::Yellow)),
                    Span::raw(risk.status.as_str()),
                ]),
                Line::from(""),
                Line::from(vec![Span::styled(
                    "--- Description ---",
                    Style::default().fg(Color::Cyan),
                )]),
                Line::from(Span::raw(risk.description.clone())),
            ];

            let detail = Paragraph::new(content).block(
                Block::default()
                    .title(format!(" {} ", risk_route(risk.id)))
                    .borders(Borders::ALL),
            );
            frame.render_widget(detail, area);
        }
    }
}
