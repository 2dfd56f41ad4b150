/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
mod console;

use anyhow::{anyhow, Context};
use clap::Parser;
use console::{ConsoleHost, ConsoleUi};
use renodx::{cp2077, Preset, SettingsAddon, ShaderInjectCells, TomlConfigStore};
use std::path::PathBuf;

static CELLS: ShaderInjectCells = ShaderInjectCells::new();
static ADDON: SettingsAddon<'static> = SettingsAddon::new();

/// Headless host: attaches the add-on against a TOML configuration store, applies edits and
/// prints one overlay frame plus the resulting shader parameter block.
#[derive(Debug, Parser)]
#[command(name = "renodx-host", version)]
struct Args {
    /// Configuration store file
    #[arg(long, default_value = "renodx.toml")]
    config: PathBuf,

    /// Preset to activate, 0 is off
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=3))]
    preset: Option<i32>,

    /// Setting override as `key=value`, saved into the active preset
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,
}

fn parse_override(raw: &str) -> anyhow::Result<(&str, f32)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got '{}'", raw))?;
    let value = value
        .trim()
        .parse::<f32>()
        .with_context(|| format!("invalid value for {}", key))?;
    Ok((key.trim(), value))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut store = TomlConfigStore::open(&args.config)
        .with_context(|| format!("failed to open {}", args.config.display()))?;
    let mut host = ConsoleHost;

    let settings = cp2077::user_settings(&CELLS)?;
    ADDON.attach(
        settings,
        Some(cp2077::preset_off_callback(&CELLS)),
        &mut host,
        &store,
    );
    let registry = ADDON
        .registry()
        .ok_or_else(|| anyhow!("add-on failed to attach"))?;

    if let Some(index) = args.preset {
        let preset = Preset::from_index(index).ok_or_else(|| anyhow!("unknown preset {}", index))?;
        registry.select_preset(preset, &mut store);
    }

    if !args.overrides.is_empty() {
        for raw in &args.overrides {
            let (key, value) = parse_override(raw)?;
            registry.update_user_setting(key, value)?;
        }
        match registry.preset().section() {
            Some(section) => registry.save_settings(&mut store, section),
            None => log::warn!("preset is off, overrides were not saved"),
        }
    }

    let mut ui = ConsoleUi::default();
    ADDON.render_overlay(&mut ui, &mut store);
    ui.finish();

    println!("{:#?}", CELLS.snapshot());
    ADDON.detach(&mut host);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_split_on_first_equals() {
        assert_eq!(
            parse_override("toneMapperPeakNits = 800").unwrap(),
            ("toneMapperPeakNits", 800.)
        );
        assert!(parse_override("effectBloom").is_err());
        assert!(parse_override("effectBloom=lots").is_err());
    }
}
