//! Functions exported to JavaScript.
//!
//! This module is the entry point for calls from the page script. Exports
//! convert arguments and errors at the JS boundary and forward to the `view`
//! and `services` layers; they hold no upload logic themselves.

pub mod dropzone;
