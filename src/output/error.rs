//! Output-related errors

use std::fmt;
use std::error::Error;

use crate::error::KinematicsError;

pub enum OutputError {
    /// Writing to the named destination failed
    Io(String, std::io::Error),
    /// A worker stopped on a kinematics error
    Worker(KinematicsError),
    /// A worker thread could not be started or panicked
    Thread(String),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputError::Io(s, e) => write!(f, "failed to write events to '{}': {}", s, e),
            OutputError::Worker(e) => write!(f, "sampling stopped: {}", e),
            OutputError::Thread(s) => write!(f, "worker thread failed: {}", s),
        }
    }
}

impl fmt::Debug for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Error for OutputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OutputError::Io(_, e) => Some(e),
            OutputError::Worker(e) => Some(e),
            OutputError::Thread(_) => None,
        }
    }
}

impl OutputError {
    pub fn io(dest: &str, err: std::io::Error) -> Self {
        Self::Io(dest.to_owned(), err)
    }

    pub fn thread(cause: &str) -> Self {
        Self::Thread(cause.to_owned())
    }
}

impl From<KinematicsError> for OutputError {
    fn from(err: KinematicsError) -> Self {
        Self::Worker(err)
    }
}
