//! Combining declared and discovered options into the final menu.

use indexmap::IndexSet;
use log::debug;

use crate::menu_option::MenuOption;

/// Collects every declared command that points into a script directory.
///
/// The test is a plain textual prefix match: two spellings of the same file
/// are two different paths.
#[must_use]
pub fn declared_script_paths<'a>(
    declared: &'a [MenuOption],
    script_prefixes: &[String],
) -> IndexSet<&'a str> {
    declared
        .iter()
        .flat_map(|option| option.commands.values())
        .filter(|command| {
            script_prefixes
                .iter()
                .any(|prefix| command.starts_with(prefix.as_str()))
        })
        .map(String::as_str)
        .collect()
}

/// Merges the declared options with the discovered ones.
///
/// Declared options come first in their original order, followed by the
/// discovered options in discovery order. A discovered option is dropped when
/// its invocation path textually equals a declared script path. Declared
/// options are never removed or overridden.
#[must_use]
pub fn merge_options(
    declared: Vec<MenuOption>,
    discovered: Vec<MenuOption>,
    script_prefixes: &[String],
) -> Vec<MenuOption> {
    let declared_paths: IndexSet<String> = declared_script_paths(&declared, script_prefixes)
        .into_iter()
        .map(str::to_string)
        .collect();

    let discovered_count = discovered.len();
    let declared_count = declared.len();
    let mut merged = declared;

    merged.extend(discovered.into_iter().filter(|option| {
        !option
            .script_path
            .as_ref()
            .is_some_and(|path| declared_paths.contains(path))
    }));

    debug!(
        "Merged menu has {} options ({} discovered scripts already declared)",
        merged.len(),
        discovered_count - (merged.len() - declared_count)
    );

    merged
}
