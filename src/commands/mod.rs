pub mod check;
pub mod list;
pub mod validate;

pub use check::{run_check, run_check_impl};
pub use list::{format_suite_listing, run_list};
pub use validate::{run_validate, run_validate_impl};

use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{LoadedSuite, SuiteLoader};
use crate::output::ColorMode;

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load the suite from `path`, or discover it when no path is given.
pub(crate) fn load_suite(path: Option<&Path>) -> crate::Result<LoadedSuite> {
    let loader = SuiteLoader::new();
    match path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
