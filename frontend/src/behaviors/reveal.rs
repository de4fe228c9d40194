/// What happens to an element the first time it scrolls into view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealEffect {
    AddClass(&'static str),
    /// Copy a deferred attribute into the live one and tag the element.
    LoadDeferred {
        from: &'static str,
        to: &'static str,
        class: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: &'static str,
    pub effect: RevealEffect,
    pub stop_after_apply: bool,
}

pub const ENTRANCE: RevealSpec = RevealSpec {
    selector: ".animate-fade-in, .animate-slide-in-left, .animate-slide-in-right",
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
    effect: RevealEffect::AddClass("visible"),
    stop_after_apply: false,
};

pub const SCROLL_REVEAL: RevealSpec = RevealSpec {
    selector: ".reveal",
    threshold: 0.1,
    root_margin: "0px",
    effect: RevealEffect::AddClass("active"),
    stop_after_apply: false,
};

pub const LAZY_IFRAME: RevealSpec = RevealSpec {
    selector: ".lazy-iframe",
    threshold: 0.0,
    root_margin: "0px",
    effect: RevealEffect::LoadDeferred {
        from: "data-src",
        to: "src",
        class: "fade-in",
    },
    stop_after_apply: true,
};

pub const ALL: [RevealSpec; 3] = [ENTRANCE, SCROLL_REVEAL, LAZY_IFRAME];

/// The few element operations a reveal needs.
pub trait RevealTarget {
    fn add_class(&self, class: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Ignored,
    Applied,
    /// Applied, and the observer should let go of the element.
    Finished,
}

impl RevealSpec {
    pub fn apply<T: RevealTarget>(&self, target: &T, is_intersecting: bool) -> RevealOutcome {
        if !is_intersecting {
            return RevealOutcome::Ignored;
        }
        match self.effect {
            RevealEffect::AddClass(class) => target.add_class(class),
            RevealEffect::LoadDeferred { from, to, class } => {
                let Some(src) = target.attribute(from).filter(|src| !src.is_empty()) else {
                    return RevealOutcome::Ignored;
                };
                target.set_attribute(to, &src);
                target.add_class(class);
            }
        }
        if self.stop_after_apply {
            RevealOutcome::Finished
        } else {
            RevealOutcome::Applied
        }
    }
}
