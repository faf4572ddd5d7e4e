//! Command trait for the handling pipeline.

/// Trait for commands.
///
/// Commands represent an intention to perform an action. They may be
/// rejected by the aggregate they target; an event is the fact recorded
/// once the intention is accepted.
pub trait Command {
    /// Returns the command type name, used in pipeline log markers.
    fn command_type(&self) -> &'static str;
}
