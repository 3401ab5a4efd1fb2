use bezarrow::render::{Curve, listing, to_svg};
use bezarrow::{Bounds, Draw};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stderr)
        .init();

    // The default element: bottom-left to top-right, arrowhead on the end
    let curve = Curve::default();
    let frame = Bounds::of_size(100.0, 100.0);

    let mut cmds: Vec<Draw> = Vec::new();
    curve.draw(&frame, Some(&mut cmds));
    println!("=== Commands ===");
    println!("{}", listing(&cmds));

    println!("\n=== SVG ===");
    match to_svg(&curve, &frame) {
        Ok(svg) => println!("{}", svg),
        Err(e) => eprintln!("Error: {}", e),
    }
}
