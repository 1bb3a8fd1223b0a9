//! Xcurve - a terminal function plotter.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use xcurve::app::App;
use xcurve::config::{PlotConfig, PlotLayoutConfig, DEFAULT_DUMP_POINTS, DEFAULT_INTERACTIVE_POINTS};
use xcurve::eval::evaluate;
use xcurve::sampling::{sample, ViewRange};
use xcurve::{dump, input, ui, XcurveError};

#[derive(Parser, Debug)]
#[command(name = "xcurve")]
#[command(about = "Plot a function of x in the terminal", long_about = None)]
struct Args {
    /// Expression in x, e.g. "sin(x) + x**2". Read from stdin when omitted.
    expression: Option<String>,

    /// Lower bound of the initial x-range
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    low: f64,

    /// Upper bound of the initial x-range
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    high: f64,

    /// Number of samples per evaluation [default: 10000, or 400 with --dump]
    #[arg(long)]
    points: Option<usize>,

    /// Print the sampled curve as a table instead of opening the plot
    #[arg(long)]
    dump: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log filter, in RUST_LOG syntax
    #[arg(long, default_value = "debug")]
    log_level: String,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::try_new(&args.log_level)?)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Xcurve");
    }

    let default_points = if args.dump {
        DEFAULT_DUMP_POINTS
    } else {
        DEFAULT_INTERACTIVE_POINTS
    };
    let config = PlotConfig::new(
        ViewRange::new(args.low, args.high)?,
        args.points.unwrap_or(default_points),
    )?;

    let expression = match args.expression {
        Some(ref expression) if !expression.trim().is_empty() => expression.trim().to_string(),
        Some(_) => return Err(XcurveError::EmptyExpression.into()),
        // The dump table owns stdout.
        None if args.dump => input::read_expression(io::stdin().lock(), io::stderr())?,
        None => input::read_expression(io::stdin().lock(), io::stdout())?,
    };

    let code = if args.dump {
        run_dump(&expression, &config)?
    } else {
        run_interactive(expression, config)?;
        ExitCode::SUCCESS
    };

    if args.log.is_some() {
        tracing::info!("Xcurve exited");
    }

    Ok(code)
}

fn run_dump(expression: &str, config: &PlotConfig) -> Result<ExitCode> {
    tracing::info!(expression, view = %config.x_range, points = config.num_points, "Dump");
    let xs = sample(config.x_range, config.num_points);
    match evaluate(expression, xs.view()) {
        Ok(ys) => {
            dump::write_samples(io::stdout().lock(), xs.view(), ys.view())?;
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => {
            tracing::warn!(expression, "Evaluation failed: {}", err);
            eprintln!("Error: {}", err);
            Ok(ExitCode::FAILURE)
        },
    }
}

fn run_interactive(expression: String, config: PlotConfig) -> Result<()> {
    let layout = PlotLayoutConfig::default();
    let app = App::new(expression, config, layout.clone());

    // Setup terminal
    enable_raw_mode().map_err(XcurveError::terminal)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(XcurveError::terminal)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(XcurveError::terminal)?;

    // Run app
    let res = run_app(&mut terminal, app, &layout);

    // Restore terminal
    disable_raw_mode().map_err(XcurveError::terminal)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(XcurveError::terminal)?;
    terminal.show_cursor().map_err(XcurveError::terminal)?;

    match res {
        Ok(app) => {
            // Diagnostics were only on the status bar while the screen was taken over.
            if let Some(diagnostic) = app.renderer.diagnostic() {
                eprintln!("Error: {}", diagnostic);
            }
        },
        Err(err) => eprintln!("Error: {}", err),
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    layout: &PlotLayoutConfig,
) -> Result<App> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, layout))?;

        if event::poll(Duration::from_millis(100))? {
            // Drain everything already queued so a burst of zoom or pan keys
            // costs one recompute for the final interval.
            loop {
                if let Event::Key(key) = event::read()? {
                    app.handle_key(key);
                }
                if app.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if app.should_quit {
            return Ok(app);
        }
        app.flush_view_change();
    }
}
