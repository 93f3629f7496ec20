use prettypalette::error::PaletteError;
use prettypalette::render::{Canvas, DrawOptions};
use prettypalette::{Color, Palette};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PaletteError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut palette = Palette::gradient(
        &Color::from_24bit(240, 240, 0),
        &Color::from_24bit(0, 0, 255),
        10,
    );

    let mut canvas = Canvas::new(40, 7);
    let top = DrawOptions::builder().size(40.0, 3.0).build();
    palette.draw(&mut canvas, &top);

    palette.reverse();
    let bottom = DrawOptions::builder()
        .position(0.0, 4.0)
        .size(40.0, 3.0)
        .build();
    palette.draw(&mut canvas, &bottom);

    print!("{}", canvas);
    println!("{}", palette);

    // RUST_LOG=info shows one swatch per color.
    palette.log();

    let current = palette.current()?;
    println!("current: {}", current.to_hex_format());
    Ok(())
}
