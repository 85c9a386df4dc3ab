// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use std::fmt::Debug;

/**
A destination for records that passed a scope's filter.

Loggers are registered globally (see [crate::global_logger]) and receive every record
from every scope.  Filtering has already happened by the time a logger sees a record.
*/
pub trait Logger: Debug + Send + Sync {
    /**
        Submits the log record for logging.
    */
    fn finish_log_record(&self, record: LogRecord);

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn prepare_to_die(&self);
}

/*
Boilerplate notes.

# Logger

Clone makes no sense on a trait object destination, so copy's out.
PartialEq/Eq/Hash are ambiguous between data and provenance equality; not implemented.
Default is not sensible since loggers may need a destination to be constructed.
Send/Sync are required because every scope on every thread dispatches to the same loggers.
*/
