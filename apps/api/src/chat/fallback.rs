use rand::Rng;

/// Apology replies appended when every attempt of a send has failed.
pub const FALLBACK_REPLIES: &[&str] = &[
    "I apologize, but I'm experiencing technical difficulties right now. Our AI mentor is busy \
helping other users. Please try again in a few moments, and I'll be happy to help with your \
career questions!",
    "Sorry, I couldn't reach the mentor service just now. Give it a few seconds and use \
\"Retry Last Message\" to send your question again.",
    "It looks like I'm having trouble connecting at the moment. Your question is saved, so \
please try again shortly.",
];

/// Chooses which of `n` fixed fallback strings to show.
pub trait FallbackPicker: Send + Sync {
    /// Returns an index in `0..n`. Called only with `n > 0`.
    fn pick(&self, n: usize) -> usize;
}

/// Uniformly random selection.
pub struct RandomPicker;

impl FallbackPicker for RandomPicker {
    fn pick(&self, n: usize) -> usize {
        rand::thread_rng().gen_range(0..n)
    }
}

/// Resolves a picker's choice against the fallback set, clamping out-of-range indices.
pub fn choose_fallback(picker: &dyn FallbackPicker) -> &'static str {
    let index = picker.pick(FALLBACK_REPLIES.len());
    FALLBACK_REPLIES[index % FALLBACK_REPLIES.len()]
}

#[cfg(test)]
pub struct FixedPicker(pub usize);

#[cfg(test)]
impl FallbackPicker for FixedPicker {
    fn pick(&self, _n: usize) -> usize {
        self.0
    }
}
