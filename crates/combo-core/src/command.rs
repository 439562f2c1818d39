use futures::future::BoxFuture;
use std::future::Future;
use std::time::Duration;

/// A side effect returned from [`Component::update`](crate::Component::update)
/// or [`Model::update`](crate::Model::update).
///
/// Commands describe work for the host event loop: messages to deliver right
/// away, messages to deliver after a delay, and async tasks whose result is
/// mapped back into a message. They never execute on their own; a host runs
/// them with [`executor::execute`](crate::executor::execute) and a test
/// harness inspects them through [`TestProgram`](crate::testing::TestProgram).
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Deliver a message once 500ms have passed:
/// let cmd = Command::after(Duration::from_millis(500), Msg::Expired);
///
/// // Run an async task and map the result to a message:
/// let cmd = Command::perform(async { load().await }, Msg::Loaded);
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    After { delay: Duration, msg: Msg },
    Future(BoxFuture<'static, Msg>),
    Batch(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// One-shot deferred message: delivered once after `delay` has elapsed.
    ///
    /// There is no way to retract a scheduled message. Callers that need
    /// cancellation tag the message with a [`DebounceToken`](crate::DebounceToken)
    /// and drop stale deliveries when they arrive.
    pub fn after(delay: Duration, msg: Msg) -> Self {
        Command {
            inner: CommandInner::After { delay, msg },
        }
    }

    /// Run an async future, map the result to a message.
    pub fn perform<F, T>(future: F, map: impl FnOnce(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Command {
            inner: CommandInner::Future(Box::pin(async move { map(future.await) })),
        }
    }

    /// Run multiple commands concurrently.
    ///
    /// `none()` entries are dropped, so batching the results of several
    /// state-machine steps stays cheap.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.pop().unwrap_or_else(Command::none),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(std::sync::Arc::new(f))
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: std::sync::Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::After { delay, msg } => Command::after(delay, f(msg)),
            CommandInner::Future(fut) => Command {
                inner: CommandInner::Future(Box::pin(async move { f(fut.await) })),
            },
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter()
                        .map(|cmd| cmd.map_with(f.clone()))
                        .collect(),
                ),
            },
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is an immediate message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// If this command is a deferred message, return its delay and payload.
    pub fn into_after(self) -> Option<(Duration, Msg)> {
        match self.inner {
            CommandInner::After { delay, msg } => Some((delay, msg)),
            _ => None,
        }
    }

    /// If this command is a batch, return the inner commands.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.inner {
            CommandInner::Batch(cmds) => Some(cmds),
            _ => None,
        }
    }
}

impl<Msg: Send + 'static> Default for Command<Msg> {
    fn default() -> Self {
        Command::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(matches!(cmd.inner, CommandInner::None));
    }

    #[test]
    fn command_message_creates_message() {
        let cmd: Command<i32> = Command::message(42);
        assert_eq!(cmd.into_message(), Some(42));
    }

    #[test]
    fn command_after_keeps_delay() {
        let cmd: Command<i32> = Command::after(Duration::from_millis(500), 7);
        assert_eq!(cmd.into_after(), Some((Duration::from_millis(500), 7)));
    }

    #[test]
    fn command_batch_empty_returns_none() {
        let cmd: Command<()> = Command::batch(vec![]);
        assert!(cmd.is_none());
    }

    #[test]
    fn command_batch_drops_none_entries() {
        let cmd: Command<i32> =
            Command::batch(vec![Command::none(), Command::message(1), Command::none()]);
        assert_eq!(cmd.into_message(), Some(1));
    }

    #[test]
    fn command_batch_multiple() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        match cmd.inner {
            CommandInner::Batch(cmds) => assert_eq!(cmds.len(), 2),
            _ => panic!("Expected Batch"),
        }
    }

    #[test]
    fn command_map_none() {
        let cmd: Command<i32> = Command::none();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(mapped.is_none());
    }

    #[test]
    fn command_map_message() {
        let cmd: Command<i32> = Command::message(42);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_message().as_deref(), Some("42"));
    }

    #[test]
    fn command_map_after_keeps_delay() {
        let cmd: Command<i32> = Command::after(Duration::from_millis(10), 3);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        let (delay, msg) = mapped.into_after().expect("deferred message");
        assert_eq!(delay, Duration::from_millis(10));
        assert_eq!(msg, "3");
    }

    #[test]
    fn command_map_batch() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        let cmds = mapped.into_batch().expect("batch");
        let msgs: Vec<_> = cmds.into_iter().filter_map(Command::into_message).collect();
        assert_eq!(msgs, vec!["1".to_string(), "2".to_string()]);
    }
}
