use clap::Parser;
use std::path::PathBuf;

use svgpatch::PatchOptions;

#[derive(Parser)]
#[command(name = "svgpatch", version, about = "SVGPATCH CLI")]
pub struct CliArgs {
    /// Command to run (available: patch)
    pub command: String,

    /// Input files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output file (only when there is exactly one input file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output in the input file (replace it)
    #[arg(long = "self", default_value_t = false)]
    pub overwrite_source: bool,

    /// Remove all id attributes
    #[arg(long, default_value_t = false)]
    pub remove_ids: bool,

    /// Prefix all ids and patch url(#ref) references
    #[arg(long, value_name = "PREFIX")]
    pub prefix_ids: Option<String>,

    /// Remove the width and height attributes AND styles from the svg tag
    #[arg(long, default_value_t = false)]
    pub remove_size: bool,

    /// Remove the top-level style attribute of the svg tag
    #[arg(long, default_value_t = false)]
    pub remove_svg_style: bool,

    /// Remove meaningless style pollution (styles set to default values)
    #[arg(long, default_value_t = false)]
    pub remove_default_styles: bool,

    /// Move stroke and fill inline styles to their own attribute,
    /// add the primary class to class-less shape elements
    #[arg(long, default_value_t = false)]
    pub color_class: bool,

    /// Remove all comment nodes
    #[arg(long, default_value_t = false)]
    pub remove_comments: bool,

    /// Remove all whitespace-only text nodes
    #[arg(long, default_value_t = false)]
    pub remove_white_spaces: bool,

    /// Remove all empty lines
    #[arg(long, default_value_t = false)]
    pub remove_white_lines: bool,

    /// Remove all tags and attributes with a namespace other than svg
    /// (the svg namespace prefix is stripped)
    #[arg(long, default_value_t = false)]
    pub remove_exotic_namespaces: bool,

    /// Icon preset: turns on --remove-ids --remove-default-styles
    /// --color-class --remove-comments --remove-exotic-namespaces
    /// and --remove-white-lines
    #[arg(long, default_value_t = false)]
    pub icon: bool,

    /// UI preset: turns on --remove-default-styles --remove-comments
    /// --remove-exotic-namespaces and --remove-white-lines
    #[arg(long, default_value_t = false)]
    pub ui: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// The raw, unexpanded options bag. Preset expansion happens inside
    /// the command handler, not here.
    pub fn to_options(&self) -> PatchOptions {
        PatchOptions {
            remove_ids: self.remove_ids,
            prefix_ids: self.prefix_ids.clone(),
            remove_size: self.remove_size,
            remove_svg_style: self.remove_svg_style,
            remove_default_styles: self.remove_default_styles,
            color_class: self.color_class,
            remove_comments: self.remove_comments,
            remove_white_spaces: self.remove_white_spaces,
            remove_white_lines: self.remove_white_lines,
            remove_exotic_namespaces: self.remove_exotic_namespaces,
            icon: self.icon,
            ui: self.ui,
            output: self.output.clone(),
            overwrite_source: self.overwrite_source,
        }
    }
}
