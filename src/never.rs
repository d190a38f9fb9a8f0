/// Success type of [`Controller::run`](crate::Controller::run), which only returns on error.
///
/// Stands in for `!`, which is unstable as a type.
#[derive(Debug)]
pub enum Never {}
