/// Capability the use cases depend on to produce greetings.
///
/// Implementations must be pure: the same input always yields the same
/// output and no call mutates shared state.
pub trait HelloMessageService: Send + Sync {
    /// Greeting for the anonymous case
    fn hello_message(&self) -> String;

    /// Greeting interpolating `name` verbatim, without escaping
    fn hello_message_for(&self, name: &str) -> String;
}
