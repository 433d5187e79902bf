use bitflags::bitflags;

bitflags! {
    /// Editing capabilities of a text file type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Capabilities: u32 {
        const NONE = 0;
        /// Source (or preview) the document when it is saved.
        const SOURCE_ON_SAVE = 1;
        const EXECUTE_CODE = 1 << 1;
        const PREVIEW_HTML = 1 << 2;
        const COMPILE_PDF = 1 << 3;
        const KNIT = 1 << 4;
        const CHECK_SPELLING = 1 << 5;
        const WEB_CONTENT = 1 << 6;
        /// Runnable as a script outside the console (shell, python, ...).
        const SCRIPT = 1 << 7;
        const PREVIEW_FROM_R = 1 << 8;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordWrap {
    /// Follow the user preference.
    #[default]
    Default,
    On,
    Off,
}

impl WordWrap {
    pub fn resolve(self, preference: bool) -> bool {
        match self {
            WordWrap::Default => preference,
            WordWrap::On => true,
            WordWrap::Off => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_wrap_default_follows_preference() {
        assert!(WordWrap::Default.resolve(true));
        assert!(!WordWrap::Default.resolve(false));
        assert!(WordWrap::On.resolve(false));
        assert!(!WordWrap::Off.resolve(true));
    }
}
