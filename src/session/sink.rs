use super::score::Score;

/// Receives the final score once, at the `Running → Submitted` transition.
pub trait CompletionSink {
    fn completed(&mut self, score: Score);
}

impl<F> CompletionSink for F
where
    F: FnMut(Score),
{
    fn completed(&mut self, score: Score) {
        self(score)
    }
}
