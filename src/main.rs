//! dirfield - direction fields for two-variable dynamical systems in the terminal.

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dirfield::{
    app::App,
    plot::ui::snapshot,
    sample_field,
    ui::{self, formatters::format_field_value, ThemeColors},
    util::parse_color,
    FieldOptions, PhasePlot, System,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "dirfield")]
#[command(about = "Direction fields for two-variable dynamical systems", long_about = None)]
struct Args {
    /// System to plot
    #[arg(long, value_enum, default_value_t = System::Harmonic)]
    system: System,

    /// System parameters, comma separated (defaults depend on the system)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    params: Option<Vec<f64>>,

    /// X axis limits as LO,HI
    #[arg(long, value_parser = parse_limits, allow_hyphen_values = true)]
    xlim: Option<(f64, f64)>,

    /// Y axis limits as LO,HI
    #[arg(long, value_parser = parse_limits, allow_hyphen_values = true)]
    ylim: Option<(f64, f64)>,

    /// State slot plotted on the X axis
    #[arg(long)]
    x_index: Option<usize>,

    /// State slot plotted on the Y axis
    #[arg(long)]
    y_index: Option<usize>,

    /// Plot slot 1 on X and slot 0 on Y
    #[arg(long)]
    switch_axes: bool,

    /// Full initial state, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    s0: Option<Vec<f64>>,

    /// Evaluation time
    #[arg(short = 't', long = "time", default_value_t = 0.0, allow_hyphen_values = true)]
    time: f64,

    /// Arrow color (k, r, g, b, c, m, y, w or a color name)
    #[arg(long, default_value = "y")]
    color: String,

    /// Arrows along X
    #[arg(long, default_value_t = 30)]
    nx: usize,

    /// Arrows along Y
    #[arg(long, default_value_t = 30)]
    ny: usize,

    /// Draw all arrows with the same length
    #[arg(long)]
    normalise: bool,

    /// Arrow length exponent, 0 (uniform) to 1 (proportional)
    #[arg(long)]
    dynamic_range: Option<f64>,

    /// Also draw arrows where the axes are negative
    #[arg(long)]
    no_clip_negative: bool,

    /// Do not divide vectors by the axis spans
    #[arg(long)]
    no_scale_to_axes: bool,

    /// Print one rendered frame and exit
    #[arg(long, conflicts_with = "table")]
    snapshot: bool,

    /// Print the sampled field as `x y dx dy` rows and exit
    #[arg(long)]
    table: bool,

    /// Snapshot width in columns
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Snapshot height in rows
    #[arg(long, default_value_t = 30)]
    height: u16,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn parse_limits(s: &str) -> std::result::Result<(f64, f64), String> {
    let (lo, hi) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LO,HI, got '{}'", s))?;
    let lo: f64 = lo.trim().parse().map_err(|e| format!("bad lower limit '{}': {}", lo, e))?;
    let hi: f64 = hi.trim().parse().map_err(|e| format!("bad upper limit '{}': {}", hi, e))?;
    Ok((lo, hi))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting dirfield");
    }

    let system = args.system;
    let params = args.params.clone().unwrap_or_else(|| system.default_params());
    system.check_params(&params)?;

    let (default_x, default_y) = system.default_limits();
    let limits = (args.xlim.unwrap_or(default_x), args.ylim.unwrap_or(default_y));

    let options = FieldOptions {
        x_index: args.x_index,
        y_index: args.y_index,
        switch_axes: args.switch_axes,
        s0: args.s0.clone(),
        t: args.time,
        color: parse_color(&args.color)?,
        nx: args.nx,
        ny: args.ny,
        normalise: args.normalise,
        dynamic_range: args.dynamic_range,
        clip_negative: !args.no_clip_negative,
        scale_to_axes: !args.no_scale_to_axes,
    };

    if options.normalise && options.dynamic_range.is_some() {
        eprintln!("Warning: cannot use a dynamic range when arrows are normalised (ignoring dynamic range value)");
    }

    if args.table {
        return print_table(system, &params, &options, limits);
    }

    let app = App::new(system, params, options, limits)?;

    if args.snapshot {
        if let Some(err) = &app.error_message {
            bail!("{}", err);
        }
        let colors = ThemeColors::from_theme(&app.theme);
        println!("{}", snapshot(&app.plot, &colors, args.width, args.height)?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("dirfield exited");
    }

    Ok(())
}

fn print_table(
    system: System,
    params: &[f64],
    options: &FieldOptions,
    (xlim, ylim): ((f64, f64), (f64, f64)),
) -> Result<()> {
    let plot = PhasePlot::new(xlim, ylim)?;
    let field = sample_field(&plot, &system, params, options)?;

    println!("# x y dx dy");
    for (x, y, u, v) in field.nodes() {
        println!(
            "{} {} {} {}",
            format_field_value(x),
            format_field_value(y),
            format_field_value(u),
            format_field_value(v)
        );
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match (key.modifiers, key.code) {
                    (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => return Ok(()),
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Pan with hjkl or arrows
                    (_, KeyCode::Left) | (_, KeyCode::Char('h')) => app.pan(-1, 0),
                    (_, KeyCode::Right) | (_, KeyCode::Char('l')) => app.pan(1, 0),
                    (_, KeyCode::Up) | (_, KeyCode::Char('k')) => app.pan(0, 1),
                    (_, KeyCode::Down) | (_, KeyCode::Char('j')) => app.pan(0, -1),

                    // Zoom
                    (_, KeyCode::Char('+')) | (_, KeyCode::Char('=')) => app.zoom(true),
                    (_, KeyCode::Char('-')) | (_, KeyCode::Char('_')) => app.zoom(false),

                    // Field options
                    (_, KeyCode::Char('n')) => app.toggle_normalise(),
                    (_, KeyCode::Char(']')) => app.step_dynamic_range(true),
                    (_, KeyCode::Char('[')) => app.step_dynamic_range(false),
                    (_, KeyCode::Char('d')) => app.clear_dynamic_range(),
                    (_, KeyCode::Char('a')) => app.toggle_scale_to_axes(),
                    (_, KeyCode::Char('c')) => app.toggle_clip_negative(),
                    (_, KeyCode::Char('s')) => app.toggle_switch_axes(),

                    (_, KeyCode::Char('r')) => app.reset_view(),
                    (_, KeyCode::Char('T')) => app.cycle_theme(),
                    _ => {},
                }
            }
        }
    }
}
