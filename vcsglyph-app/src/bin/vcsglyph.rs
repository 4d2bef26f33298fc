use vcsglyph_app::app;

fn main() -> anyhow::Result<()> {
    app::launch()
}
