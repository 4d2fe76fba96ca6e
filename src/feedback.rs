//! Tactile feedback
//!
//! Terminals have no haptics, so feedback is an optional side channel:
//! either nothing at all or the terminal bell on stronger impacts. Feedback
//! can never fail from the caller's point of view.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Strength of an impact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    /// Navigation and favorites-list selection
    Light,
    /// Favorite toggle
    Medium,
}

/// Something that can emit tactile feedback
pub trait Feedback {
    /// Emit an impact. Unavailable output is silently ignored.
    fn impact(&self, style: ImpactStyle);
}

/// Feedback that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn impact(&self, _style: ImpactStyle) {}
}

/// Rings the terminal bell on medium impacts
#[derive(Debug, Clone, Copy, Default)]
pub struct Bell;

impl Bell {
    /// Write the bell for `style` to `out`; light impacts write nothing
    fn ring_into<W: Write>(style: ImpactStyle, out: &mut W) {
        if style != ImpactStyle::Medium {
            return;
        }
        if let Err(e) = out.write_all(b"\x07").and_then(|()| out.flush()) {
            tracing::debug!("Bell unavailable: {}", e);
        }
    }
}

impl Feedback for Bell {
    fn impact(&self, style: ImpactStyle) {
        Self::ring_into(style, &mut io::stdout());
    }
}

/// Which feedback implementation to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackMode {
    #[default]
    Off,
    Bell,
}

impl FeedbackMode {
    /// Build the feedback implementation for this mode
    pub fn build(self) -> Box<dyn Feedback> {
        match self {
            FeedbackMode::Off => Box::new(Silent),
            FeedbackMode::Bell => Box::new(Bell),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::{Feedback, ImpactStyle};

    /// Records every impact for assertions
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub impacts: RefCell<Vec<ImpactStyle>>,
    }

    impl Recorder {
        pub fn taken(&self) -> Vec<ImpactStyle> {
            self.impacts.borrow().clone()
        }
    }

    impl Feedback for Recorder {
        fn impact(&self, style: ImpactStyle) {
            self.impacts.borrow_mut().push(style);
        }
    }
}
