/// One module per exam data file.
///
/// Each wraps the generic loader, enforces the documented column count, and
/// exposes the file's columns as named views into the underlying table.
pub mod decay;
pub mod population;
pub mod signal;
