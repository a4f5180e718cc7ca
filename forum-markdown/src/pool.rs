//! Reuse of parsers across parse calls.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::{Options, Parser};

/// Idle parsers kept per distinct [`Options`] unless configured otherwise.
pub const DEFAULT_RETAIN: usize = 8;

/// A registry of idle [`Parser`]s keyed by their options.
///
/// The pool can be shared between threads. A checked out parser belongs to
/// its [`PooledParser`] guard alone until the guard is dropped.
pub struct ParserPool {
    pools: Mutex<HashMap<Options, Vec<Parser>>>,
    retain: usize,
}

impl ParserPool {
    pub fn new() -> Self {
        Self::with_retention(DEFAULT_RETAIN)
    }

    /// A pool that keeps at most `retain` idle parsers per options value.
    pub fn with_retention(retain: usize) -> Self {
        ParserPool {
            pools: Mutex::new(HashMap::new()),
            retain,
        }
    }

    /// Checks out a parser for `options`, creating one if none is idle.
    pub fn get(&self, options: Options) -> PooledParser<'_> {
        let reused = self.lock().get_mut(&options).and_then(Vec::pop);
        let parser = match reused {
            Some(parser) => {
                debug!("reusing pooled parser for {:?}", options);
                parser
            }
            None => {
                debug!("creating parser for {:?}", options);
                Parser::new(options)
            }
        };
        PooledParser {
            pool: self,
            parser: Some(parser),
        }
    }

    /// Number of idle parsers for `options`.
    pub fn idle(&self, options: Options) -> usize {
        self.lock().get(&options).map_or(0, Vec::len)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Options, Vec<Parser>>> {
        self.pools.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn give_back(&self, parser: Parser) {
        let options = parser.options();
        let mut pools = self.lock();
        let idle = pools.entry(options).or_default();
        if idle.len() < self.retain {
            idle.push(parser);
            debug!("returned parser for {:?} ({} idle)", options, idle.len());
        } else {
            debug!("dropping surplus parser for {:?}", options);
        }
    }
}

impl Default for ParserPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParserPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let idle: usize = self.lock().values().map(Vec::len).sum();
        f.debug_struct("ParserPool")
            .field("idle", &idle)
            .field("retain", &self.retain)
            .finish()
    }
}

/// A parser checked out of a [`ParserPool`]. Dropping it hands the parser
/// back.
pub struct PooledParser<'a> {
    pool: &'a ParserPool,
    parser: Option<Parser>,
}

impl Deref for PooledParser<'_> {
    type Target = Parser;

    fn deref(&self) -> &Parser {
        // only `Drop` takes the parser out
        match &self.parser {
            Some(parser) => parser,
            None => unreachable!(),
        }
    }
}

impl DerefMut for PooledParser<'_> {
    fn deref_mut(&mut self) -> &mut Parser {
        match &mut self.parser {
            Some(parser) => parser,
            None => unreachable!(),
        }
    }
}

impl Drop for PooledParser<'_> {
    fn drop(&mut self) {
        if let Some(parser) = self.parser.take() {
            self.pool.give_back(parser);
        }
    }
}

impl fmt::Debug for PooledParser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PooledParser").field(&self.parser).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Dialect;

    #[test]
    fn parsers_are_returned_and_reused() {
        let pool = ParserPool::new();
        let options = Options::new(Dialect::Strict);
        {
            let mut parser = pool.get(options);
            assert_eq!(parser.parse("*a*", false), "<p><em>a</em></p>\n");
            assert_eq!(pool.idle(options), 0);
        }
        assert_eq!(pool.idle(options), 1);
        let parser = pool.get(options);
        assert_eq!(pool.idle(options), 0);
        drop(parser);
        assert_eq!(pool.idle(Options::new(Dialect::Lightweight)), 0);
    }

    #[test]
    fn retention_is_capped() {
        let pool = ParserPool::with_retention(1);
        let options = Options::new(Dialect::Lenient);
        let a = pool.get(options);
        let b = pool.get(options);
        drop(a);
        drop(b);
        assert_eq!(pool.idle(options), 1);
    }

    #[test]
    fn shared_between_threads() {
        let pool = ParserPool::new();
        let options = Options::new(Dialect::Lightweight);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..10 {
                        let mut parser = pool.get(options);
                        assert_eq!(parser.parse("~~x~~", false), "[s]x[/s]\n");
                    }
                });
            }
        });
        assert!(pool.idle(options) <= 4);
    }
}
