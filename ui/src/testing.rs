//! Test doubles shared by unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::nav::{NavError, RouterHost};

/// Router host with a fixed current path that records navigation requests.
#[derive(Clone, Default)]
pub(crate) struct RecordingHost {
    current: String,
    reject: bool,
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingHost {
    pub(crate) fn at(current: &str) -> Self {
        Self {
            current: current.to_string(),
            ..Self::default()
        }
    }

    /// Every navigation fails with `UnknownPath`.
    pub(crate) fn rejecting(mut self) -> Self {
        self.reject = true;
        self
    }

    pub(crate) fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl RouterHost for RecordingHost {
    fn is_current_path(&self, path: &str) -> bool {
        self.current == path
    }

    fn navigate(&self, path: &str) -> Result<(), NavError> {
        if self.reject {
            return Err(NavError::UnknownPath {
                path: path.to_string(),
                reason: "rejected by test host".into(),
            });
        }
        self.visits.borrow_mut().push(path.to_string());
        Ok(())
    }
}
