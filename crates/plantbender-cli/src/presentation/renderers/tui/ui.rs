use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Clear, Gauge, Paragraph, Row, Table},
};

use plantbender_runtime::NotificationLevel;

use super::app::AppState;
use super::background::WaveBackground;
use crate::presentation::view_models::{DashboardViewModel, RgbColor};

const COLUMN_WIDTH: u16 = 64;

pub(crate) fn draw(f: &mut Frame, vm: &DashboardViewModel, app: &mut AppState) {
    let area = f.area();
    f.render_widget(WaveBackground::new(vm.frame), area);

    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(COLUMN_WIDTH.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [header, gauge, toggle, history, notification, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(column);

    render_header(f, header, vm);
    render_gauge(f, gauge, vm);
    render_toggle(f, toggle, vm);
    render_history(f, history, vm, app);
    render_notification(f, notification, vm);
    render_footer(f, footer);
}

fn rgb(color: RgbColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn render_header(f: &mut Frame, area: Rect, vm: &DashboardViewModel) {
    let title = Line::from(vec![
        Span::raw("🌱 "),
        Span::styled(
            vm.title.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        area,
    );
}

fn render_gauge(f: &mut Frame, area: Rect, vm: &DashboardViewModel) {
    let gauge = Gauge::default()
        .block(Block::bordered().title(" Soil humidity "))
        .gauge_style(
            Style::default()
                .fg(rgb(vm.gauge.color))
                .bg(Color::Rgb(40, 40, 40))
                .add_modifier(Modifier::BOLD),
        )
        .ratio(vm.gauge.fraction)
        .label(vm.gauge.label.as_str());

    f.render_widget(Clear, area);
    f.render_widget(gauge, area);
}

fn render_toggle(f: &mut Frame, area: Rect, vm: &DashboardViewModel) {
    let toggle = &vm.toggle;
    let button_style = if !toggle.enabled {
        Style::default().fg(Color::DarkGray)
    } else if toggle.is_on {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("  {}  ", toggle.label),
        button_style,
    ))];
    if let Some(hint) = &toggle.hint {
        lines.push(Line::from(Span::styled(
            hint.as_str(),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" Watering ")),
        area,
    );
}

fn render_history(f: &mut Frame, area: Rect, vm: &DashboardViewModel, app: &mut AppState) {
    let block = Block::bordered().title(" History ");
    f.render_widget(Clear, area);

    if let Some(loading) = &vm.loading {
        f.render_widget(
            Paragraph::new(loading.as_str())
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    if vm.rows.is_empty() {
        f.render_widget(
            Paragraph::new(vm.empty_message.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::DIM))
                .block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Time"),
        Cell::from(vm.humidity_header.as_str()),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = vm.rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.date.as_str()),
            Cell::from(row.time.as_str()),
            Cell::from(row.humidity.as_str()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_notification(f: &mut Frame, area: Rect, vm: &DashboardViewModel) {
    f.render_widget(Clear, area);
    let Some(notification) = &vm.notification else {
        return;
    };

    let color = match notification.level {
        NotificationLevel::Success => Color::Green,
        NotificationLevel::Warning => Color::Yellow,
        NotificationLevel::Error => Color::Red,
    };

    f.render_widget(
        Paragraph::new(notification.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        area,
    );
}

fn render_footer(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new("w/space: water   ↑/↓: scroll   q: quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::build_dashboard_view_model;
    use plantbender_runtime::{ViewSnapshot, WateringToggle};
    use plantbender_testing::fixtures;
    use plantbender_types::Normalization;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn screen(value: &serde_json::Value, is_loading: bool) -> String {
        let snapshot = ViewSnapshot {
            records: Arc::from(fixtures::records_from(value)),
            is_loading,
        };
        let vm = build_dashboard_view_model(
            &snapshot,
            Normalization::default(),
            &WateringToggle::new(),
            None,
            0,
        );

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = AppState::new();
        app.set_row_count(vm.rows.len());
        terminal.draw(|f| draw(f, &vm, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_draws_history_rows() {
        let text = screen(&fixtures::dry_history(), false);
        assert!(text.contains("PlantBender"));
        assert!(text.contains("Water the plant!"));
        assert!(text.contains("Humidity (%)"));
        assert!(text.contains("29.33"));
        assert!(text.contains("No data"));
    }

    #[test]
    fn test_empty_history_message() {
        let text = screen(&serde_json::json!([]), false);
        assert!(text.contains("No data available"));
    }

    #[test]
    fn test_loading_spinner() {
        let text = screen(&serde_json::json!([]), true);
        assert!(text.contains("Loading humidity history..."));
        assert!(!text.contains("No data available"));
    }
}
