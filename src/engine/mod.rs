mod grid;
mod index;
mod window;

pub use self::grid::Grid;
pub use self::window::GridView;
use std::rc::Rc;

/// How the 3x3 neighborhood count is turned into the B3/S23 rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rule {
    /// Conway's rule: only the 8 cells around the center are neighbors
    #[default]
    Canonical,
    /// The center cell is counted as one of its own neighbors
    ///
    /// Reproduces the behavior of the program this simulator was modeled on.
    /// Blocks die and diagonals freeze under this variant.
    Inclusive,
}
impl Rule {
    pub fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "canonical" => Some(Self::Canonical),
            "inclusive" => Some(Self::Inclusive),
            _ => None,
        }
    }
}

/// Owns the current generation and produces the next ones
///
/// Each generation is an immutable snapshot; [`GameOfLife::advance`] replaces
/// it with a freshly computed one. Readers hold `Rc<Grid>` clones that stay
/// valid after the engine moves on.
#[derive(Debug)]
pub struct GameOfLife {
    current: Rc<Grid>,
    rule: Rule,
    generation: usize,
}

impl GameOfLife {
    #[inline]
    pub fn new(seed: Grid, rule: Rule) -> Self {
        Self {
            current: Rc::new(seed),
            rule,
            generation: 0,
        }
    }

    /// Computes the next generation and returns a snapshot of it
    pub fn advance(&mut self) -> Rc<Grid> {
        let next = self.current.advance(self.rule);
        self.current = Rc::new(next);
        self.generation += 1;
        Rc::clone(&self.current)
    }

    /// Consumes the engine into a lazy sequence of exactly `steps` generations
    pub fn steps(self, steps: usize) -> Steps {
        Steps {
            engine: self,
            remaining: steps,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.current
    }
    #[inline]
    pub fn snapshot(&self) -> Rc<Grid> {
        Rc::clone(&self.current)
    }

    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }
    /// Number of generations computed since the seed
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.current.alive_count()
    }
}

/// Iterator over the generations following the current one
///
/// Created by [`GameOfLife::steps`].
#[derive(Debug)]
pub struct Steps {
    engine: GameOfLife,
    remaining: usize,
}

impl Steps {
    #[inline]
    pub fn engine(&self) -> &GameOfLife {
        &self.engine
    }
}

impl Iterator for Steps {
    type Item = Rc<Grid>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.engine.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Steps {}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(rows: &str, rule: Rule) -> GameOfLife {
        let mut grid = Grid::new(5, 5).expect("valid dimensions");
        grid.seed_with_pattern(&rows.parse().expect("valid pattern"))
            .expect("pattern fits");
        GameOfLife::new(grid, rule)
    }

    #[test]
    fn rule_parses() {
        assert_eq!(Rule::new("canonical"), Some(Rule::Canonical));
        assert_eq!(Rule::new("inclusive"), Some(Rule::Inclusive));
        assert_eq!(Rule::new("highlife"), None);
        assert_eq!(Rule::default(), Rule::Canonical);
    }

    #[test]
    fn advance_replaces_snapshot() {
        let mut game = engine("XXX", Rule::Canonical);
        let seed = game.snapshot();

        let next = game.advance();

        assert_eq!(game.generation(), 1);
        assert!(Rc::ptr_eq(&next, &game.snapshot()));
        // the old snapshot is untouched
        assert_eq!(seed.to_string(), "-----\n-----\n-XXX-\n-----\n-----");
        assert_eq!(next.to_string(), "-----\n--X--\n--X--\n--X--\n-----");
    }

    #[test]
    fn steps_yields_exactly_n_generations() {
        let game = engine("XXX", Rule::Canonical);
        let seed = game.snapshot();

        let mut steps = game.steps(4);
        assert_eq!(steps.len(), 4);

        let generations: Vec<_> = steps.by_ref().collect();
        assert_eq!(generations.len(), 4);
        assert_eq!(steps.next(), None);
        assert_eq!(steps.engine().generation(), 4);

        // blinker period is 2
        assert_ne!(*generations[0], *seed);
        assert_eq!(*generations[1], *seed);
        assert_eq!(generations[0], generations[2]);
        assert_eq!(generations[1], generations[3]);
    }

    #[test]
    fn zero_steps_is_empty() {
        let game = engine("XX\nXX", Rule::Canonical);

        assert_eq!(game.steps(0).count(), 0);
    }

    #[test]
    fn engine_uses_its_rule() {
        let mut canonical = engine("XX\nXX", Rule::Canonical);
        let mut inclusive = engine("XX\nXX", Rule::Inclusive);

        assert_eq!(canonical.advance().alive_count(), 4);
        assert_eq!(inclusive.advance().alive_count(), 0);
        assert_eq!(inclusive.rule(), Rule::Inclusive);
    }

    #[test]
    fn diagonal_blinker_end_to_end() {
        let game = engine("X--\n-X-\n--X", Rule::Canonical);

        let first = game.steps(1).next().expect("one generation");
        let mut expected = Grid::new(5, 5).expect("valid dimensions");
        expected
            .seed_with_pattern(&"X".parse().expect("valid pattern"))
            .expect("pattern fits");
        assert_eq!(*first, expected);
    }
}
