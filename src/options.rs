use std::time::Duration;

use anyhow::{Context, bail};
use lifegrid::{Pattern, Rule};

const DEFAULT_STEPS: usize = 100;
const DEFAULT_INTERVAL_MILLIS: u64 = 1000;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    /// Parses `args` (without the program name)
    ///
    /// Returns `Ok(None)` once the usage has been printed for `--help`.
    fn new<T: AsRef<str>>(args: &[T]) -> anyhow::Result<Option<Self>> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in full-screen console mode");
        opts.optflag("r", "random", "seed the grid randomly instead of prompting for rows");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt(
            "p",
            "pattern",
            &format!(
                "seed with a built-in pattern ({})",
                Pattern::preset_names().collect::<Vec<_>>().join(", ")
            ),
            "NAME",
        );
        opts.optopt("", "seed", "seed for the random fill (implies --random)", "NUMBER");
        opts.optopt("g", "steps", "number of generations to show", "COUNT");
        opts.optopt(
            "s",
            "interval",
            "the amount of time to wait between generations",
            "MILLIS",
        );
        opts.optopt(
            "",
            "rule",
            "neighbor counting: canonical or inclusive",
            "RULE",
        );

        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .context("invalid arguments")?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifegrid [options]"));
            Ok(None)
        } else if matches.opt_present("pattern")
            && (matches.opt_present("random") || matches.opt_present("seed"))
        {
            bail!("--pattern cannot be combined with --random or --seed");
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn width(&self) -> anyhow::Result<Option<usize>> {
        self.matches.opt_get("width").context("invalid --width")
    }
    pub fn height(&self) -> anyhow::Result<Option<usize>> {
        self.matches.opt_get("height").context("invalid --height")
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn random(&self) -> bool {
        self.matches.opt_present("random") || self.matches.opt_present("seed")
    }
    pub fn seed(&self) -> anyhow::Result<Option<u64>> {
        self.matches.opt_get("seed").context("invalid --seed")
    }

    pub fn pattern(&self) -> anyhow::Result<Option<Pattern>> {
        let Some(name) = self.matches.opt_str("pattern") else {
            return Ok(None);
        };
        match Pattern::preset(&name) {
            Some(pattern) => Ok(Some(pattern)),
            None => bail!("unknown pattern {:?}", name),
        }
    }

    pub fn steps(&self) -> anyhow::Result<usize> {
        let steps = self.matches.opt_get::<usize>("steps").context("invalid --steps")?;
        Ok(steps.unwrap_or(DEFAULT_STEPS))
    }
    pub fn interval(&self) -> anyhow::Result<Duration> {
        let millis = self
            .matches
            .opt_get::<u64>("interval")
            .context("invalid --interval")?;
        Ok(Duration::from_millis(millis.unwrap_or(DEFAULT_INTERVAL_MILLIS)))
    }

    pub fn rule(&self) -> anyhow::Result<Rule> {
        match self.matches.opt_str("rule") {
            None => Ok(Rule::default()),
            Some(name) => Rule::new(&name).with_context(|| format!("unknown rule {:?}", name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::new(list).expect("valid args").expect("not help")
    }

    #[test]
    fn defaults() {
        let args = args(&[]);

        assert_eq!(args.width().unwrap(), None);
        assert_eq!(args.height().unwrap(), None);
        assert_eq!(args.steps().unwrap(), 100);
        assert_eq!(args.interval().unwrap(), Duration::from_millis(1000));
        assert_eq!(args.rule().unwrap(), Rule::Canonical);
        assert_eq!(args.seed().unwrap(), None);
        assert!(args.pattern().unwrap().is_none());
        assert!(!args.console());
        assert!(!args.random());
    }

    #[test]
    fn short_options_parse() {
        let args = args(&["-w", "40", "-h", "20", "-g", "5", "-s", "0", "-r", "-c"]);

        assert_eq!(args.width().unwrap(), Some(40));
        assert_eq!(args.height().unwrap(), Some(20));
        assert_eq!(args.steps().unwrap(), 5);
        assert_eq!(args.interval().unwrap(), Duration::ZERO);
        assert!(args.random());
        assert!(args.console());
    }

    #[test]
    fn long_options_parse() {
        let args = args(&["--rule", "inclusive", "--pattern", "glider"]);

        assert_eq!(args.rule().unwrap(), Rule::Inclusive);
        assert_eq!(args.pattern().unwrap(), Pattern::preset("glider"));
        assert!(!args.random());
    }

    #[test]
    fn seed_implies_random() {
        let args = args(&["--seed", "42"]);

        assert_eq!(args.seed().unwrap(), Some(42));
        assert!(args.random());
    }

    #[test]
    fn pattern_conflicts_with_random_fill() {
        assert!(Args::new(&["--pattern", "block", "--seed", "1"]).is_err());
        assert!(Args::new(&["--pattern", "block", "-r"]).is_err());
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(args(&["--width", "wide"]).width().is_err());
        assert!(args(&["--steps", "many"]).steps().is_err());
        assert!(args(&["--rule", "highlife"]).rule().is_err());
        assert!(args(&["--pattern", "spaceship"]).pattern().is_err());
    }

    #[test]
    fn unknown_flag_is_error() {
        assert!(Args::new(&["--wrap"]).is_err());
    }

    #[test]
    fn help_returns_none() {
        assert!(Args::new(&["--help"]).expect("valid args").is_none());
    }
}
