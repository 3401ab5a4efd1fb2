fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let input = std::env::args()
        .nth(1)
        .map(|path| std::fs::read_to_string(&path).expect("Failed to read file"))
        .unwrap_or_else(|| {
            r##"[curve]
start_anchor = 2
end_anchor = 1
end_shape = 1
arrow_size = 10
line_width = 2
color = "#336699"
show_handles = true"##
                .to_string()
        });

    match bezarrow::render_svg(&input, 100.0, 100.0) {
        Ok(svg) => println!("{}", svg),
        Err(e) => eprintln!("{:?}", e),
    }
}
