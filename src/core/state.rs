/// What the loop does after a command line has been dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Terminate,
}

impl Outcome {
    pub fn should_continue(self) -> bool {
        matches!(self, Outcome::Continue)
    }
}
