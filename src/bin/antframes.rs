fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    antframes::create_test_png_frames()?;
    Ok(())
}
