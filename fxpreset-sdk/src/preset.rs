use std::io;
use std::path::Path;

use fxpreset_types::Chain;

/// Render `chain` and write it to `path`, overwriting any existing
/// file.
pub fn save_preset(path: &Path, chain: &Chain) -> io::Result<()> {
    let json = chain.to_json()?;
    std::fs::write(path, json)?;
    log::info!("wrote {} effect(s) to {}", chain.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{gain, reverb};

    #[test]
    fn save_preset_writes_rendered_chain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");

        let mut chain = Chain::new();
        chain.add(gain(-6.0));
        save_preset(&path, &chain).expect("save_preset");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), chain.to_json().unwrap());
    }

    #[test]
    fn save_preset_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");

        let mut first = Chain::new();
        first.add(gain(-6.0));
        save_preset(&path, &first).expect("first save");

        let mut second = Chain::new();
        second.add(reverb(0.8, 0.5));
        save_preset(&path, &second).expect("second save");

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, second.to_json().unwrap());
        assert!(written.contains("Reverb"));
    }
}
