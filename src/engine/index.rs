use super::Rule;
use std::sync::OnceLock;

/// Largest value a clipped 3x3 count can take (the center is included)
const MAX_COUNT: usize = 9;
type TransitionTable = [[bool; MAX_COUNT + 1]; 2];

/// Returns a Singleton lookup table for the given counting rule
///
/// Equivalent to calling [`generate_transition_table`] once per rule and storing the result
pub(super) fn get_transition_table(rule: Rule) -> &'static TransitionTable {
    static CANONICAL: OnceLock<TransitionTable> = OnceLock::new();
    static INCLUSIVE: OnceLock<TransitionTable> = OnceLock::new();

    let cell = match rule {
        Rule::Canonical => &CANONICAL,
        Rule::Inclusive => &INCLUSIVE,
    };
    cell.get_or_init(|| generate_transition_table(rule))
}

/// Creates a lookup table for the Game of Life ruleset
///
/// The table is indexed by `[alive as usize][count]`, where `count` is the number
/// of alive cells in the clipped 3x3 block *including* the center cell.
/// [`Rule::Canonical`] removes the center before applying B3/S23,
/// [`Rule::Inclusive`] applies B3/S23 to the raw count.
///
/// Returns whether the center cell is alive in the next generation
pub(super) fn generate_transition_table(rule: Rule) -> TransitionTable {
    let mut table = [[false; MAX_COUNT + 1]; 2];
    for (alive, row) in table.iter_mut().enumerate() {
        for (count, next) in row.iter_mut().enumerate() {
            let neighbors = match rule {
                Rule::Canonical => count.saturating_sub(alive),
                Rule::Inclusive => count,
            };
            *next = matches!((alive == 1, neighbors), (true, 2) | (_, 3));
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(rule: Rule, alive: bool, proper_neighbors: usize) -> bool {
        let count = proper_neighbors + usize::from(alive);
        generate_transition_table(rule)[usize::from(alive)][count]
    }

    #[test]
    fn canonical_rules_match_conway_life() {
        let rule = Rule::Canonical;

        assert!(next(rule, true, 2));
        assert!(next(rule, true, 3));
        assert!(next(rule, false, 3));

        assert!(!next(rule, true, 0));
        assert!(!next(rule, true, 1));
        assert!(!next(rule, true, 4));
        assert!(!next(rule, false, 2));
        assert!(!next(rule, false, 4));
        assert!(!next(rule, true, 8));
    }

    #[test]
    fn inclusive_rules_count_the_center() {
        let rule = Rule::Inclusive;

        // an alive cell with 1 or 2 neighbors sees a count of 2 or 3
        assert!(next(rule, true, 1));
        assert!(next(rule, true, 2));
        assert!(!next(rule, true, 3));

        // dead cells are unaffected
        assert!(next(rule, false, 3));
        assert!(!next(rule, false, 2));
    }

    #[test]
    fn singleton_matches_generated() {
        for rule in [Rule::Canonical, Rule::Inclusive] {
            assert_eq!(get_transition_table(rule), &generate_transition_table(rule));
        }
    }
}
