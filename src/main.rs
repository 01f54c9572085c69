use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let frames = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("frame count must be a number, got {arg:?}"))?,
        None => 600,
    };
    flightpaths::run(frames)
}
