//! Example generator: builds a three-effect chain, prints the rendered
//! JSON, and writes it to `generated_preset.json` in the current
//! working directory.

use fxpreset_sdk::{distortion_ui, filter, gain_ui, save_preset, FilterMode};
use fxpreset_types::Chain;

const PRESET_FILE: &str = "generated_preset.json";

fn init_logging() {
    use simplelog::*;

    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");
}

fn main() -> std::io::Result<()> {
    init_logging();

    let mut chain = Chain::new();
    chain
        .add(gain_ui(-6.0))
        .add(filter(FilterMode::HighPass, 2000.0, 0.707))
        .add(distortion_ui(20.0));

    log::info!("rendering a {}-effect chain", chain.len());

    let json = chain.to_json()?;
    println!("--- JSON Output ---");
    println!("{}", json);

    let path = std::env::current_dir()?.join(PRESET_FILE);
    save_preset(&path, &chain)?;
    println!("\nSaved to {}", PRESET_FILE);

    Ok(())
}
