//! Ratatui-based terminal UI.
//!
//! The TUI is the interactive face of the predictor: a panel of the thirteen
//! input parameters with value stepping, a live Vn readout, and a Plotters
//! sensitivity chart for a selectable varying parameter. All session state
//! (current values, which parameter the chart varies) lives here; the core
//! stays pure.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::ann::AnnPredictor;
use crate::app::pipeline;
use crate::catalog;
use crate::domain::{ParamKey, RawInputSet, SweepSample};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::SweepChart;

/// Value stepping resolution: ←/→ moves by range/STEP_DIVISIONS.
const STEP_DIVISIONS: f64 = 40.0;

/// Start the TUI with the given baseline inputs.
pub fn run(predictor: &AnnPredictor, baseline: RawInputSet) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(predictor.clone(), baseline)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    predictor: AnnPredictor,
    inputs: RawInputSet,
    selected_field: usize,
    sweep_param: ParamKey,
    vn_kn: f64,
    samples: Vec<SweepSample>,
    status: String,
}

impl App {
    fn new(predictor: AnnPredictor, inputs: RawInputSet) -> Result<Self, AppError> {
        let mut app = Self {
            predictor,
            inputs,
            selected_field: 0,
            sweep_param: ParamKey::ShearSpan,
            vn_kn: 0.0,
            samples: Vec::new(),
            status: String::new(),
        };
        app.recompute()?;
        app.status = "Ready.".to_string();
        Ok(app)
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < ParamKey::ALL.len() - 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_selected(-1.0)?,
            KeyCode::Right => self.adjust_selected(1.0)?,
            KeyCode::Char('s') => {
                self.sweep_param = ParamKey::ALL[self.selected_field];
                self.recompute()?;
                self.status = format!("Sweeping {}.", self.sweep_param.label());
            }
            KeyCode::Char('m') => {
                self.inputs = RawInputSet::midpoint();
                self.recompute()?;
                self.status = "Reset all parameters to range midpoints.".to_string();
            }
            _ => {}
        }

        Ok(false)
    }

    /// Step the selected parameter's value, clamped to its valid range.
    ///
    /// Clamping here is a UI affordance (like a bounded form field), not core
    /// behavior: values handed to the engine are always in range.
    fn adjust_selected(&mut self, direction: f64) -> Result<(), AppError> {
        let key = ParamKey::ALL[self.selected_field];
        let def = catalog::definition_of(key);
        let step = def.width() / STEP_DIVISIONS;
        let value = (self.inputs.get(key) + direction * step).clamp(def.min, def.max);
        self.inputs.set(key, value);
        self.recompute()?;
        self.status = format!("{} = {value:.4}", key.label());
        Ok(())
    }

    fn recompute(&mut self) -> Result<(), AppError> {
        let predict = pipeline::run_predict(&self.predictor, self.inputs)?;
        self.vn_kn = predict.vn_kn;
        let sweep = pipeline::run_sweep(
            &self.predictor,
            self.inputs,
            self.sweep_param,
            crate::sweep::DEFAULT_STEPS,
        )?;
        self.samples = sweep.samples;
        Ok(())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("corbel", Style::default().fg(Color::Cyan)),
            Span::raw(" — RC corbel ultimate shear capacity (ANN)"),
        ]));
        lines.push(Line::from(vec![
            Span::raw("Predicted Vn: "),
            Span::styled(
                format!("{:.2} kN", self.vn_kn),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("   | chart varies: {}", self.sweep_param.label()),
                Style::default().fg(Color::Gray),
            ),
        ]));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(44), Constraint::Min(0)])
            .split(area);

        self.draw_parameters(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
    }

    fn draw_parameters(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut items = Vec::new();
        for def in catalog::definitions() {
            let marker = if def.key == self.sweep_param { "~" } else { " " };
            items.push(ListItem::new(format!(
                "{marker}{:<8} {:>10.4}  [{}, {}]",
                def.key.label(),
                self.inputs.get(def.key),
                def.min,
                def.max,
            )));
        }

        let list = List::new(items)
            .block(Block::default().title("Parameters").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = format!("Vn vs. {}", self.sweep_param.label());
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        if self.samples.len() < 2 {
            let msg = Paragraph::new("No sweep data.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        }

        let curve: Vec<(f64, f64)> = self
            .samples
            .iter()
            .map(|s| (s.raw_value, s.predicted))
            .collect();
        let (x_bounds, y_bounds) = chart_bounds(&curve, self.vn_kn);

        let widget = SweepChart {
            curve: &curve,
            marker: Some((self.inputs.get(self.sweep_param), self.vn_kn)),
            x_bounds,
            y_bounds,
            x_label: self.sweep_param.label().to_string(),
            y_label: "Vn (kN)",
        };
        frame.render_widget(widget, inner);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  s sweep this param  m midpoints  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Compute padded chart bounds covering the curve and the live readout.
fn chart_bounds(curve: &[(f64, f64)], vn_kn: f64) -> ([f64; 2], [f64; 2]) {
    let x_min = curve[0].0;
    let x_max = curve[curve.len() - 1].0;

    let mut y_min = vn_kn;
    let mut y_max = vn_kn;
    for &(_, y) in curve {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let span = (y_max - y_min).max(1.0);
    (
        [x_min, x_max],
        [y_min - 0.05 * span, y_max + 0.05 * span],
    )
}
