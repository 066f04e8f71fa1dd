use std::iter::FusedIterator;
use std::sync::Arc;

use super::RouteSnapshot;
use crate::matcher::RouteMatch;

/// Lazy sequence of the matches for one path, in precedence order. The
/// matcher runs on the first `next` call; once exhausted it stays empty.
#[derive(Debug)]
pub struct MatchAll {
    pending: Option<(Arc<RouteSnapshot>, String)>,
}

impl MatchAll {
    pub(crate) fn new(snapshot: Arc<RouteSnapshot>, pathname: String) -> Self {
        Self {
            pending: Some((snapshot, pathname)),
        }
    }
}

impl Iterator for MatchAll {
    type Item = RouteMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let (snapshot, pathname) = self.pending.take()?;
        snapshot.match_normalized(&pathname)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pending {
            Some(_) => (0, Some(1)),
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for MatchAll {}
