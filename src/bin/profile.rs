use std::time::Instant;

use polymaze::{Cursor, GeneratorConfig, MazeGenerator, MazeOptions, Recorder, Shape};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);
    let depth = args.next().and_then(|s| s.parse::<f64>().ok()).unwrap_or(5.0);

    let mut generator = MazeGenerator::new(GeneratorConfig::default(), Some(0));
    let shape = Shape::Decagon(Default::default());
    let options = MazeOptions {
        depth,
        ..MazeOptions::default()
    };

    let start = Instant::now();
    let mut strokes = 0;
    for _ in 0..num_iters {
        let mut cursor = Cursor::new(Recorder::default());
        generator.generate(&mut cursor, &shape, &options)?;
        strokes += cursor.surface().len();
    }
    let elapsed = start.elapsed();
    println!(
        "{num_iters} x {shape} at depth {depth}: {strokes} strokes in {elapsed:?} ({:?} per maze)",
        elapsed / num_iters.max(1) as u32
    );
    Ok(())
}
