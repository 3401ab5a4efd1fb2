use bezarrow::render::{Curve, CurveSource, to_svg};
use bezarrow::{Bounds, Handle, HandleSpec, ShapeKind, Style};
use glam::dvec2;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut start = HandleSpec::at(dvec2(30.0, 150.0));
    start.set_control_offset(dvec2(60.0, 0.0));
    start.set_terminal_shape(ShapeKind::Disc);
    start.set_terminal_size(4.0);

    let mut end = HandleSpec::at(dvec2(170.0, 40.0));
    end.set_control_offset(dvec2(0.0, 80.0));
    end.set_terminal_shape(ShapeKind::ArrowHead);
    end.set_terminal_size(12.0);

    let style = Style {
        line_width: 2.0,
        show_handles: true,
        ..Style::default()
    };
    let frame = Bounds::of_size(200.0, 200.0);

    // One handle is "not configured yet": nothing is drawn
    let lonely = Curve::new(CurveSource::Handles(vec![start]), style.clone());
    match to_svg(&lonely, &frame) {
        Ok(svg) => println!("{}", svg),
        Err(e) => eprintln!("Error: {}", e),
    }

    let curve = Curve::new(CurveSource::Handles(vec![start, end]), style);
    match to_svg(&curve, &frame) {
        Ok(svg) => println!("{}", svg),
        Err(e) => eprintln!("Error: {}", e),
    }
}
