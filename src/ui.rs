use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

use crate::i18n::Translator;
use crate::logging;
use crate::screens::database::{ConnectionStepForm, FormState};
use crate::screens::review::{ReviewAction, ReviewScreen};
use crate::settings::DatabaseSettings;
use crate::statusbar::StatusBarRenderer;
use crate::wizard::{Wizard, WizardStep};

type TeardownStep = Box<dyn FnOnce() -> io::Result<()>>;

/// Runs every step even after one fails and reports the first error.
fn run_teardown(steps: Vec<TeardownStep>) -> io::Result<()> {
    steps
        .into_iter()
        .fold(Ok(()), |first, step| {
            let result = step();
            first.and(result)
        })
}

pub struct App {
    wizard: Wizard,
    database: ConnectionStepForm,
    review: ReviewScreen,
    statusbar_renderer: StatusBarRenderer,
    logger_widget_state: TuiWidgetState,
    should_quit: bool,
}

impl App {
    pub fn new(translator: Translator, form: FormState) -> Self {
        Self {
            wizard: Wizard::new(form),
            database: ConnectionStepForm::new(translator.clone()),
            review: ReviewScreen::new(translator),
            statusbar_renderer: StatusBarRenderer::new(),
            logger_widget_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    /// Runs the wizard until the user confirms or quits. Returns the
    /// confirmed settings, or `None` when cancelled.
    pub async fn run(&mut self) -> Result<Option<DatabaseSettings>> {
        enable_raw_mode()?;
        logging::switch_to_tui_logging();

        let result = self.run_in_terminal().await;

        logging::switch_to_console_logging();
        let restored = run_teardown(vec![
            Box::new(disable_raw_mode) as TeardownStep,
            Box::new(|| execute!(io::stdout(), DisableMouseCapture)) as TeardownStep,
            Box::new(|| execute!(io::stdout(), LeaveAlternateScreen)) as TeardownStep,
            Box::new(|| execute!(io::stdout(), Show)) as TeardownStep,
        ]);

        result?;
        restored?;
        Ok(self.wizard.is_finished().then(|| self.wizard.settings()))
    }

    async fn run_in_terminal(&mut self) -> Result<()> {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        execute!(terminal.backend_mut(), EnterAlternateScreen)?;
        execute!(terminal.backend_mut(), EnableMouseCapture)?;
        self.run_app(&mut terminal).await
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_millis(250);

        info!("Database setup started");
        loop {
            terminal.draw(|f| self.ui(f))?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => self.handle_input(key.code, key.modifiers),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.on_tick();
                last_tick = Instant::now();
            }

            if self.should_quit || self.wizard.is_finished() {
                break;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        let quit = match key {
            KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
            KeyCode::Char('x') => modifiers.contains(KeyModifiers::ALT),
            _ => false,
        };
        if quit {
            warn!("Setup cancelled");
            self.should_quit = true;
            return;
        }

        match key {
            KeyCode::PageUp => {
                self.logger_widget_state
                    .transition(TuiWidgetEvent::PrevPageKey);
                return;
            }
            KeyCode::PageDown => {
                self.logger_widget_state
                    .transition(TuiWidgetEvent::NextPageKey);
                return;
            }
            _ => {}
        }

        match self.wizard.step() {
            WizardStep::Database => {
                if key == KeyCode::Esc {
                    // Back to the latest log messages
                    self.logger_widget_state
                        .transition(TuiWidgetEvent::EscapeKey);
                    return;
                }
                let actions = self.database.handle_input(key, modifiers, self.wizard.form());
                self.wizard.apply_all(actions);
            }
            WizardStep::Review => {
                if let Some(action) = self.review.handle_input(key, modifiers) {
                    self.apply_review_action(action);
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            match self.wizard.step() {
                WizardStep::Database => {
                    let actions =
                        self.database
                            .handle_mouse_click(mouse.column, mouse.row, self.wizard.form());
                    self.wizard.apply_all(actions);
                }
                WizardStep::Review => {
                    if let Some(action) = self.review.handle_mouse_click(mouse.column, mouse.row) {
                        self.apply_review_action(action);
                    }
                }
            }
        }
    }

    fn apply_review_action(&mut self, action: ReviewAction) {
        match action {
            ReviewAction::Back => self.wizard.back(),
            ReviewAction::Confirm => self.wizard.confirm(),
        }
    }

    fn on_tick(&mut self) {
        let step = self.wizard.step();
        self.statusbar_renderer.set_current_step(step);
        match step {
            WizardStep::Database => {
                let invalid = self.wizard.form().invalid_fields().len();
                self.statusbar_renderer.set_status_message(if invalid == 0 {
                    "Database".to_string()
                } else {
                    format!("Database: {invalid} field(s) need attention")
                });
                self.statusbar_renderer
                    .set_help_text(self.database.help_text());
            }
            WizardStep::Review => {
                self.statusbar_renderer.set_status_message("Review");
                self.statusbar_renderer
                    .set_help_text("Enter/Alt+O - Confirm | Esc/Alt+B - Back");
            }
        }
    }

    fn ui(&mut self, f: &mut Frame) {
        tui_logger::move_events();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Wizard step
                Constraint::Length(8), // Setup log
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        let step = self.wizard.step();
        self.database.render(
            f,
            chunks[0],
            self.wizard.form(),
            step == WizardStep::Database,
        );
        if step == WizardStep::Review {
            let settings = self.wizard.settings();
            self.review.render(f, chunks[0], &settings, true);
        }

        self.render_log(f, chunks[1]);
        self.statusbar_renderer.render_status_bar(f, chunks[2]);
    }

    fn render_log(&self, f: &mut Frame, area: Rect) {
        if area.height < 3 {
            f.render_widget(Paragraph::new(""), area);
            return;
        }
        let logger_widget = TuiLoggerWidget::default()
            .block(Block::default().title("Setup Log").borders(Borders::ALL))
            .output_timestamp(Some("%H:%M:%S".to_string()))
            .output_level(Some(TuiLoggerLevelOutput::Long))
            .output_target(false)
            .output_file(false)
            .output_line(false)
            .output_separator(' ')
            .style_info(Style::default().fg(Color::White))
            .style_warn(Style::default().fg(Color::Yellow))
            .style_error(Style::default().fg(Color::Red))
            .style_debug(Style::default().fg(Color::DarkGray))
            .style_trace(Style::default().fg(Color::Gray))
            .state(&self.logger_widget_state);
        f.render_widget(logger_widget, area);
    }
}
