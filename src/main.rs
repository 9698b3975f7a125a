//! Ordinate - a terminal-based function plotter.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ordinate::app::{App, Focus};
use ordinate::function::Function;
use ordinate::plot::GlyphStyle;
use ordinate::sample::{PlotSettings, SampleSpec};
use ordinate::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Point count used when neither --points nor --step is given.
const DEFAULT_POINTS: usize = 101;

#[derive(Parser, Debug)]
#[command(name = "ordinate", version)]
#[command(about = "A terminal-based function plotter", long_about = None)]
struct Args {
    /// Left edge of the sampling interval
    #[arg(long, default_value_t = -5.0, allow_hyphen_values = true)]
    x_min: f64,

    /// Right edge of the sampling interval
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    x_max: f64,

    /// Number of evenly spaced sample points
    #[arg(short = 'n', long, conflicts_with = "step")]
    points: Option<usize>,

    /// Step size between sample points
    #[arg(long)]
    step: Option<f64>,

    /// Comma-separated function keys to plot, e.g. "1,2"
    #[arg(short = 'f', long, default_value = "1,2")]
    functions: String,

    /// Start with cone glyphs instead of lines
    #[arg(long)]
    cones: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    /// Run the startup values through the same validation the form uses.
    fn settings(&self) -> ordinate::Result<PlotSettings> {
        let spec = match (self.points, self.step) {
            (_, Some(step)) => SampleSpec::Step(step),
            (Some(points), None) => SampleSpec::Count(points),
            (None, None) => SampleSpec::Count(DEFAULT_POINTS),
        };
        let functions = Function::parse_selection(&self.functions)?;
        PlotSettings::new(self.x_min, self.x_max, spec, functions)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("starting ordinate");
    }

    // Validate the startup settings before entering raw mode so a bad
    // invocation fails with a plain error message.
    let settings = match args.settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        },
    };
    let style = if args.cones {
        GlyphStyle::Cones
    } else {
        GlyphStyle::Lines
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(settings, style);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("ordinate exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Warning modal - swallows every key until dismissed
                if app.warning.is_some() {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                        app.dismiss_warning();
                    }
                    continue;
                }

                // Global bindings
                match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                    (KeyModifiers::NONE, KeyCode::Tab) => {
                        app.toggle_focus();
                        continue;
                    },
                    _ => {},
                }

                match app.focus {
                    Focus::Form => handle_form_key(&mut app, key),
                    Focus::Plot => handle_plot_key(&mut app, key),
                }
            }
        }
    }
    Ok(())
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Apply
        (KeyModifiers::NONE, KeyCode::Enter) => app.apply_settings(),

        // Field navigation
        (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
            app.form.focus_prev();
        },
        (KeyModifiers::NONE, KeyCode::Down) => app.form.focus_next(),

        // Sampling mode toggle
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => app.toggle_sample_mode(),

        // Hand focus back to the plot
        (KeyModifiers::NONE, KeyCode::Esc) => app.toggle_focus(),

        // Editing within the focused field
        (KeyModifiers::NONE, KeyCode::Left) => app.form.active_field_mut().move_left(),
        (KeyModifiers::NONE, KeyCode::Right) => app.form.active_field_mut().move_right(),
        (KeyModifiers::NONE, KeyCode::Home) => app.form.active_field_mut().move_home(),
        (KeyModifiers::NONE, KeyCode::End) => app.form.active_field_mut().move_end(),
        (KeyModifiers::NONE, KeyCode::Backspace) => app.form.active_field_mut().backspace(),
        (KeyModifiers::NONE, KeyCode::Delete) => app.form.active_field_mut().delete(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.form.active_field_mut().insert(c);
        },

        _ => {},
    }
}

fn handle_plot_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,

        // Probe cursor
        (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
            app.plot.cursor_left();
        },
        (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
            app.plot.cursor_right();
        },

        // Re-apply the form without switching focus
        (KeyModifiers::NONE, KeyCode::Enter) => app.apply_settings(),

        // Features
        (KeyModifiers::NONE, KeyCode::Char('g')) => app.cycle_style(),
        (KeyModifiers::NONE, KeyCode::Char('s')) => app.toggle_sample_mode(),
        (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

        // Clipboard
        (KeyModifiers::NONE, KeyCode::Char('c')) => app.copy_plot_data(),

        _ => {},
    }
}
