use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Patch options suitable for config files and embedding.
///
/// One instance is built per invocation from the CLI arguments,
/// expanded once with [`PatchOptions::expand`], and then treated as
/// read-only for the rest of the run. The patch engine and the output
/// router only ever read the primitive fields; the preset fields exist
/// solely as expansion input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOptions {
    /// Remove all `id` attributes
    pub remove_ids: bool,
    /// Prefix all `id` attributes and patch `url(#ref)` references
    pub prefix_ids: Option<String>,
    /// Remove the width/height attributes and styles from the `<svg>` tag
    pub remove_size: bool,
    /// Remove the top-level style attribute of the `<svg>` tag
    pub remove_svg_style: bool,
    /// Remove style declarations set to their default values
    pub remove_default_styles: bool,
    /// Move fill/stroke inline styles to attributes, tag class-less shapes
    pub color_class: bool,
    /// Remove all comment nodes
    pub remove_comments: bool,
    /// Remove whitespace-only text nodes
    pub remove_white_spaces: bool,
    /// Collapse empty lines in text nodes
    pub remove_white_lines: bool,
    /// Strip the svg namespace prefix, drop any other namespace
    pub remove_exotic_namespaces: bool,

    /// Icon preset: implies a set of primitive flags, see [`PRESETS`]
    pub icon: bool,
    /// UI preset: implies a set of primitive flags, see [`PRESETS`]
    pub ui: bool,

    /// Explicit output path, honored for single-input batches only
    pub output: Option<PathBuf>,
    /// Write the result back over the source file (`--self`)
    pub overwrite_source: bool,
}

/// Primitive flags a preset can turn on. Presets never touch value
/// options and never clear a flag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrimitiveFlag {
    RemoveIds,
    RemoveSize,
    RemoveSvgStyle,
    RemoveDefaultStyles,
    ColorClass,
    RemoveComments,
    RemoveWhiteSpaces,
    RemoveWhiteLines,
    RemoveExoticNamespaces,
}

/// Preset flags recognized by the expander.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PresetFlag {
    Icon,
    Ui,
}

/// A preset is pure data: the flag that activates it and the primitive
/// flags it enables. Overlapping presets union idempotently.
#[derive(Debug)]
pub struct Preset {
    pub flag: PresetFlag,
    pub enables: &'static [PrimitiveFlag],
}

/// Known presets.
///
/// `Icon` targets standalone icon assets, `Ui` targets inline UI
/// fragments where ids must survive.
pub const PRESETS: &[Preset] = &[
    Preset {
        flag: PresetFlag::Icon,
        enables: &[
            PrimitiveFlag::RemoveIds,
            PrimitiveFlag::RemoveDefaultStyles,
            PrimitiveFlag::ColorClass,
            PrimitiveFlag::RemoveComments,
            PrimitiveFlag::RemoveExoticNamespaces,
            PrimitiveFlag::RemoveWhiteLines,
        ],
    },
    Preset {
        flag: PresetFlag::Ui,
        enables: &[
            PrimitiveFlag::RemoveDefaultStyles,
            PrimitiveFlag::RemoveComments,
            PrimitiveFlag::RemoveExoticNamespaces,
            PrimitiveFlag::RemoveWhiteLines,
        ],
    },
];

impl PatchOptions {
    /// Expand preset flags into the primitive flags they imply.
    ///
    /// Pure and idempotent: presets only ever set primitives to `true`,
    /// so `expand(expand(x)) == expand(x)` and the order presets are
    /// applied in does not matter. Everything else is cloned through.
    pub fn expand(&self) -> PatchOptions {
        let mut expanded = self.clone();
        for preset in PRESETS {
            if self.preset_enabled(preset.flag) {
                for flag in preset.enables {
                    expanded.set(*flag);
                }
            }
        }
        expanded
    }

    fn preset_enabled(&self, flag: PresetFlag) -> bool {
        match flag {
            PresetFlag::Icon => self.icon,
            PresetFlag::Ui => self.ui,
        }
    }

    fn set(&mut self, flag: PrimitiveFlag) {
        match flag {
            PrimitiveFlag::RemoveIds => self.remove_ids = true,
            PrimitiveFlag::RemoveSize => self.remove_size = true,
            PrimitiveFlag::RemoveSvgStyle => self.remove_svg_style = true,
            PrimitiveFlag::RemoveDefaultStyles => self.remove_default_styles = true,
            PrimitiveFlag::ColorClass => self.color_class = true,
            PrimitiveFlag::RemoveComments => self.remove_comments = true,
            PrimitiveFlag::RemoveWhiteSpaces => self.remove_white_spaces = true,
            PrimitiveFlag::RemoveWhiteLines => self.remove_white_lines = true,
            PrimitiveFlag::RemoveExoticNamespaces => self.remove_exotic_namespaces = true,
        }
    }
}
