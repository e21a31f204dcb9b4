use errmark::app;

fn main() -> anyhow::Result<()> {
    app::main()
}
