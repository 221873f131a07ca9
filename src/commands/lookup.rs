//! Lookup command - run a query and print its results

use crate::{TillrError, output, state::AppState, state::QuerySession};

type Result<T> = std::result::Result<T, TillrError>;

/// Execute the lookup command
///
/// # Errors
/// Returns `TillrError::InvalidInput` if the query has no segments
pub fn execute(state: &AppState, query: &str, all: bool, quiet: bool) -> Result<()> {
    for line in render(state, query, all, quiet)? {
        println!("{line}");
    }
    Ok(())
}

/// Render the lookup output as lines
///
/// # Errors
/// Returns `TillrError::InvalidInput` if the query has no segments
pub fn render(state: &AppState, query: &str, all: bool, quiet: bool) -> Result<Vec<String>> {
    let mut session = QuerySession::new();
    session.commit(query, state);

    let total = session.slots().len();
    if total == 0 {
        return Err(TillrError::InvalidInput(format!("Nothing to look up in '{query}'")));
    }

    let mut lines = Vec::new();
    if let Some(value) = session.math() {
        lines.push(output::math_result(value, quiet));
    }
    if let Some(cents) = session.round_up() {
        lines.push(output::round_up_result(cents, quiet));
    }

    for index in 0..total {
        if all {
            show_all(&mut session, index);
        }

        if total > 1 && !quiet {
            lines.push(output::segment_header(session.slots()[index].segment(), index, total));
        }

        lines.extend(
            session
                .view(index)
                .iter()
                .map(|entry| output::result_entry(entry, quiet))
                .filter(|line| !line.is_empty()),
        );

        let slot = &session.slots()[index];
        if !quiet
            && let Some(resolved) = slot.resolved()
            && resolved.paging()
            && slot.pager().has_more(resolved.items.len())
        {
            lines.push(output::more_results(resolved.items.len() - slot.pager().visible()));
        }
    }

    Ok(lines)
}

fn show_all(session: &mut QuerySession, index: usize) {
    while session.show_more(index) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemDb;
    use crate::config::TillrConfig;
    use crate::state::Update;
    use crate::testing::sample_items;

    fn state(items_per_page: usize) -> AppState {
        let config = TillrConfig {
            items_per_page,
            ..TillrConfig::default()
        };
        let mut state = AppState::new(config);
        state.apply(Update::SetRemote(Some(ItemDb {
            name: "Test".into(),
            version: "1".into(),
            organization: None,
            items: sample_items(),
        })));
        state
    }

    #[test]
    fn test_render_quiet_search() {
        let lines = render(&state(4), "banana", false, true).unwrap();
        assert_eq!(lines[0], "4011\tBananas");
    }

    #[test]
    fn test_render_math_first() {
        let lines = render(&state(4), "2*3", false, true).unwrap();
        assert_eq!(lines[0], "6");
    }

    #[test]
    fn test_render_round_up_and_code() {
        let lines = render(&state(4), "7", false, true).unwrap();
        assert_eq!(lines[0], "93");
    }

    #[test]
    fn test_render_all_shows_every_match() {
        let paged = render(&state(1), "tag:produce;a", false, true).unwrap();
        let all = render(&state(1), "tag:produce;a", true, true).unwrap();
        assert!(all.len() > paged.len());
    }

    #[test]
    fn test_render_all_on_large_tag_filter() {
        let paged = render(&state(1), "tag:produce", false, true).unwrap();
        let all = render(&state(1), "tag:produce", true, true).unwrap();
        assert_eq!(paged, all);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_render_empty_query_is_error() {
        assert!(render(&state(4), ";;", false, true).is_err());
    }
}
