use crate::command::{Command, CommandInner};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::time::Duration;

/// A headless test harness that drives a [`Model`] without a real terminal
/// or wall clock.
///
/// Immediate messages (from [`Command::message`]) are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages). Deferred messages (from
/// [`Command::after`]) are placed on a fake clock that only moves when the
/// test calls [`advance`](TestProgram::advance). Async futures are ignored.
///
/// # Example
///
/// ```rust,ignore
/// use combo_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<Form>::new(());
/// prog.send(FormMsg::Key(key('g')));
/// prog.advance(Duration::from_millis(499));   // timer still pending
/// prog.advance(Duration::from_millis(1));     // timer fires
/// let output = prog.render_string(40, 6);
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    timers: Vec<Timer<M::Message>>,
    now: Duration,
    next_seq: u64,
}

struct Timer<Msg> {
    due: Duration,
    seq: u64,
    msg: Msg,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            timers: Vec::new(),
            now: Duration::ZERO,
            next_seq: 0,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Process all pending immediate messages, including any they produce.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Take the pending immediate messages without delivering them.
    ///
    /// Useful for asserting on notifications a component sends its parent.
    pub fn take_messages(&mut self) -> Vec<M::Message> {
        std::mem::take(&mut self.pending_messages)
    }

    /// Move the fake clock forward, delivering every deferred message that
    /// falls due, in due order.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due <= target)
                .min_by_key(|(_, t)| (t.due, t.seq))
                .map(|(i, _)| i);
            let Some(index) = next else { break };
            let timer = self.timers.remove(index);
            self.now = timer.due;
            let cmd = self.model.update(timer.msg);
            self.collect(cmd);
        }
        self.now = target;
    }

    /// Time elapsed on the fake clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of deferred messages not yet delivered.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buf[(x, y)];
                output.push_str(cell.symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending_messages.push(msg),
            CommandInner::After { delay, msg } => {
                self.timers.push(Timer {
                    due: self.now + delay,
                    seq: self.next_seq,
                    msg,
                });
                self.next_seq += 1;
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
            // Async commands can't be executed synchronously in tests
            CommandInner::Future(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    struct Clock {
        log: Vec<&'static str>,
    }

    #[derive(Debug)]
    enum ClockMsg {
        Start,
        Ring(&'static str),
        Echo,
    }

    impl Model for Clock {
        type Message = ClockMsg;
        type Flags = ();

        fn init(_: ()) -> (Self, Command<ClockMsg>) {
            (Clock { log: vec![] }, Command::none())
        }

        fn update(&mut self, msg: ClockMsg) -> Command<ClockMsg> {
            match msg {
                ClockMsg::Start => Command::batch(vec![
                    Command::after(Duration::from_millis(300), ClockMsg::Ring("late")),
                    Command::after(Duration::from_millis(100), ClockMsg::Ring("early")),
                ]),
                ClockMsg::Ring(name) => {
                    self.log.push(name);
                    Command::message(ClockMsg::Echo)
                }
                ClockMsg::Echo => {
                    self.log.push("echo");
                    Command::none()
                }
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            frame.render_widget(Paragraph::new(self.log.join(",")), frame.area());
        }
    }

    #[test]
    fn timers_wait_for_the_clock() {
        let mut prog = TestProgram::<Clock>::new(());
        prog.send(ClockMsg::Start);
        assert_eq!(prog.pending_timers(), 2);
        prog.advance(Duration::from_millis(99));
        assert!(prog.model().log.is_empty());
    }

    #[test]
    fn timers_fire_in_due_order() {
        let mut prog = TestProgram::<Clock>::new(());
        prog.send(ClockMsg::Start);
        prog.advance(Duration::from_millis(300));
        assert_eq!(prog.model().log, vec!["early", "late"]);
        assert_eq!(prog.pending_timers(), 0);
        assert_eq!(prog.now(), Duration::from_millis(300));
    }

    #[test]
    fn immediate_messages_wait_for_drain() {
        let mut prog = TestProgram::<Clock>::new(());
        prog.send(ClockMsg::Start);
        prog.advance(Duration::from_millis(100));
        assert_eq!(prog.model().log, vec!["early"]);
        prog.drain_messages();
        assert_eq!(prog.model().log, vec!["early", "echo"]);
    }

    #[test]
    fn take_messages_empties_queue() {
        let mut prog = TestProgram::<Clock>::new(());
        prog.send(ClockMsg::Ring("now"));
        let taken = prog.take_messages();
        assert_eq!(taken.len(), 1);
        prog.drain_messages();
        assert_eq!(prog.model().log, vec!["now"]);
    }

    #[test]
    fn render_string_shows_view() {
        let mut prog = TestProgram::<Clock>::new(());
        prog.send(ClockMsg::Ring("a"));
        prog.drain_messages();
        let content = prog.render_string(20, 1);
        assert!(content.starts_with("a,echo"));
    }
}
