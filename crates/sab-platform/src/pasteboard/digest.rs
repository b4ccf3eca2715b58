use twox_hash::xxh3::hash64;

use sab_core::{ChangeToken, PasteboardContents};

/// Synthesized change counter: bumps whenever the content digest differs
/// from the previous observation.
#[derive(Debug, Default)]
pub(crate) struct DigestTracker {
    last_digest: Option<u64>,
    counter: u64,
}

impl DigestTracker {
    pub(crate) fn observe(&mut self, contents: &PasteboardContents) -> ChangeToken {
        let digest = digest(contents);
        if self.last_digest != Some(digest) {
            self.last_digest = Some(digest);
            self.counter = self.counter.wrapping_add(1);
        }
        ChangeToken(self.counter)
    }
}

fn digest(contents: &PasteboardContents) -> u64 {
    let image = contents.image_png.as_deref().map(hash64).unwrap_or(0);
    let text = contents
        .text
        .as_deref()
        .map(|text| hash64(text.as_bytes()))
        .unwrap_or(0);
    image.rotate_left(1) ^ text
}
