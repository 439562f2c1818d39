//! Runs [`Command`]s on a tokio runtime.
//!
//! Hosts that own a tokio event loop pass every command returned from
//! `update` to [`execute`] together with the sender half of their message
//! channel. Resulting messages arrive on the receiver and are fed back into
//! `update`, keeping each transition a synchronous run-to-completion step.

use crate::command::{Command, CommandInner};
use tokio::sync::mpsc;

/// Execute a command, delivering any messages it produces to `tx`.
///
/// Immediate messages are sent before this function returns. Deferred
/// messages and futures are spawned onto the current tokio runtime, so this
/// must be called from within one. Sends to a closed channel are dropped.
pub fn execute<Msg: Send + 'static>(cmd: Command<Msg>, tx: &mpsc::UnboundedSender<Msg>) {
    match cmd.inner {
        CommandInner::None => {}
        CommandInner::Message(msg) => deliver(tx, msg),
        CommandInner::After { delay, msg } => {
            let tx = tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                deliver(&tx, msg);
            });
        }
        CommandInner::Future(fut) => {
            let tx = tx.clone();
            tokio::spawn(async move {
                let msg = fut.await;
                deliver(&tx, msg);
            });
        }
        CommandInner::Batch(cmds) => {
            for cmd in cmds {
                execute(cmd, tx);
            }
        }
    }
}

fn deliver<Msg>(tx: &mpsc::UnboundedSender<Msg>, msg: Msg) {
    if tx.send(msg).is_err() {
        tracing::trace!(message = "command.dropped", reason = "receiver closed");
    }
}
