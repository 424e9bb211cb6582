use std::path::Path;

use anyhow::Context as _;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let canvas = antframes::Canvas {
        width: antframes::WIDTH,
        height: antframes::HEIGHT,
    };
    let path = Path::new(antframes::test_pattern::TEST_PATTERN_FILE);
    antframes::test_pattern::write_test_pattern(path, canvas)
        .with_context(|| format!("write smoke pattern '{}'", path.display()))?;
    Ok(())
}
