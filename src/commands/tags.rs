//! Tags command - list the tags in the catalog

use crate::{TillrError, output, state::AppState};

type Result<T> = std::result::Result<T, TillrError>;

/// Execute the tags command
///
/// # Errors
/// Currently infallible; returns `Result` for symmetry with other commands
pub fn execute(state: &AppState, quiet: bool) -> Result<()> {
    let counts = state.catalog().tag_counts();

    if counts.is_empty() {
        if !quiet {
            println!("No tags found in catalog.");
        }
        return Ok(());
    }

    if !quiet {
        let prefix = state.syntax().tag_prefix();
        println!("Tags in catalog (look up with `{prefix}<tag>`):");
    }
    for (tag, count) in counts {
        println!("{}", output::tag_with_count(&tag, count, quiet));
    }
    Ok(())
}
