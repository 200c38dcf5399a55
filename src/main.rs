use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use polymaze::{
    Color, Cursor, GeneratorConfig, MazeGenerator, MazeOptions, Pose, Recorder, Shape, StartFrom,
    boundary::SideSelection,
    export::{self, OutputFormat},
};
use tracing::Level;

/// Draw a perfect maze on a regular polygon.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// decagon, hexagon, triangle, trapezoid or rhombus
    #[arg(default_value = "decagon")]
    shape: String,

    /// Tiling method, or `random`
    #[arg(short, long, default_value = "random")]
    method: String,

    /// Interior angle of a rhombus, in degrees
    #[arg(long, default_value_t = 72.0)]
    angle: f64,

    /// Side length is round(2^depth) units
    #[arg(short, long, default_value_t = 3.0)]
    depth: f64,

    /// Length of one unit
    #[arg(short, long, default_value_t = 10.0)]
    unit: f64,

    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of random holes in the outer boundary
    #[arg(long, default_value_t = 2)]
    holes: usize,

    /// Explicit 1-based boundary sides to open; overrides --holes
    #[arg(long, value_delimiter = ',')]
    hole_sides: Option<Vec<usize>>,

    #[arg(long)]
    counter_clockwise: bool,

    /// corner or midpoint
    #[arg(long, default_value = "corner")]
    start_from: String,

    /// Wall color
    #[arg(long, default_value = "black")]
    color: String,

    /// Marks internal holes in this color
    #[arg(long)]
    hole_color: Option<String>,

    /// Marks boundary holes in this color
    #[arg(long)]
    boundary_hole_color: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Write here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with generator settings
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "polymaze.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let directory = match args.log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = args
        .log_file
        .file_name()
        .context("log file path has no file name")?;
    let (writer, _guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(args.log_level)
        .init();

    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GeneratorConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };
    if let Some(color) = &args.hole_color {
        config.hole_color = Some(color.parse()?);
    }

    let shape = Shape::parse(&args.shape, &args.method, args.angle)?;
    let options = MazeOptions {
        depth: args.depth,
        unit_len: args.unit,
        clockwise: !args.counter_clockwise,
        start_from: args.start_from.parse::<StartFrom>()?,
        num_boundary_holes: args.holes,
        boundary_holes: args.hole_sides.clone().map(SideSelection::Indices),
        boundary_hole_color: args
            .boundary_hole_color
            .as_deref()
            .map(str::parse::<Color>)
            .transpose()?,
        ..MazeOptions::default()
    };

    let mut cursor = Cursor::with_pose(Recorder::default(), Pose::default());
    cursor.set_color(args.color.parse()?);
    let mut generator = MazeGenerator::new(config, args.seed);
    generator.generate(&mut cursor, &shape, &options)?;

    let strokes = cursor.into_surface().into_strokes();
    tracing::info!("[main] {} drew {} strokes", shape, strokes.len());

    let output = match args.format {
        OutputFormat::Svg => export::to_svg(&strokes, args.unit),
        OutputFormat::Json => export::to_json(&strokes)?,
    };
    match &args.output {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{output}"),
    }
    Ok(())
}
