use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarginError {
    #[error("Root margin must have 1 to 4 values, got {0}")]
    Arity(usize),
    #[error("Invalid root margin value {0:?}: expected a length in px or %")]
    Value(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginValue {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for MarginValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginValue::Px(v) => write!(f, "{v}px"),
            MarginValue::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl FromStr for MarginValue {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MarginError::Value(s.to_string());
        let (number, ctor): (&str, fn(f64) -> MarginValue) = if let Some(n) = s.strip_suffix("px") {
            (n, MarginValue::Px)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, MarginValue::Percent)
        } else if s == "0" {
            return Ok(MarginValue::Px(0.0));
        } else {
            return Err(invalid());
        };
        let value = number.parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(ctor(value))
    }
}

/// CSS-style margin around the viewport used by the intersection observer.
/// Negative values shrink the viewport, so elements must scroll further in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl RootMargin {
    pub fn uniform(value: MarginValue) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::uniform(MarginValue::Px(0.0))
    }
}

impl FromStr for RootMargin {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(str::parse::<MarginValue>)
            .collect::<Result<Vec<_>, _>>()?;
        // same expansion as the CSS margin shorthand
        match values[..] {
            [all] => Ok(Self::uniform(all)),
            [vertical, horizontal] => Ok(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(MarginError::Arity(values.len())),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub once: bool,
    pub margin: RootMargin,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            once: true,
            margin: RootMargin::default(),
        }
    }
}

impl RevealOptions {
    /// Section headings and bodies.
    pub fn section() -> Self {
        Self {
            once: true,
            margin: RootMargin::uniform(MarginValue::Px(-100.0)),
        }
    }

    /// Skill cards, which sit closer together.
    pub fn card() -> Self {
        Self {
            once: true,
            margin: RootMargin::uniform(MarginValue::Px(-50.0)),
        }
    }
}

/// Tracks whether one element has been revealed.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTrigger {
    options: RevealOptions,
    revealed: bool,
}

impl RevealTrigger {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// A `once` trigger that already fired ignores further observations.
    pub fn is_settled(&self) -> bool {
        self.options.once && self.revealed
    }

    /// Feeds one intersection report; returns whether the signal changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.is_settled() || self.revealed == intersecting {
            return false;
        }
        self.revealed = intersecting;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_trigger_stays_revealed() {
        let mut trigger = RevealTrigger::new(RevealOptions::section());
        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
        assert!(!trigger.observe(false));
        assert!(!trigger.observe(true));
        assert!(trigger.is_revealed());
        assert!(trigger.is_settled());
    }

    #[test]
    fn test_once_trigger_settles_on_first_reveal() {
        let mut trigger = RevealTrigger::new(RevealOptions::card());
        trigger.observe(false);
        assert!(!trigger.is_settled());
        trigger.observe(true);
        assert!(trigger.is_settled());
    }

    #[test]
    fn test_live_trigger_follows_intersection() {
        let mut trigger = RevealTrigger::new(RevealOptions {
            once: false,
            ..RevealOptions::default()
        });
        let seen = [true, true, false, true]
            .into_iter()
            .map(|i| {
                trigger.observe(i);
                trigger.is_revealed()
            })
            .collect::<Vec<_>>();
        assert_eq!(seen, vec![true, true, false, true]);
        assert!(!trigger.is_settled());
    }

    #[test]
    fn test_margin_shorthand_expansion() {
        assert_eq!(
            "-100px".parse::<RootMargin>(),
            Ok(RootMargin::uniform(MarginValue::Px(-100.0)))
        );
        assert_eq!(
            "10px 5%".parse::<RootMargin>(),
            Ok(RootMargin {
                top: MarginValue::Px(10.0),
                right: MarginValue::Percent(5.0),
                bottom: MarginValue::Px(10.0),
                left: MarginValue::Percent(5.0),
            })
        );
        assert_eq!(
            "0".parse::<RootMargin>().map(|m| m.to_string()),
            Ok("0px 0px 0px 0px".to_string())
        );
    }

    #[test]
    fn test_margin_rejects_bad_input() {
        assert_eq!(
            "10em".parse::<RootMargin>(),
            Err(MarginError::Value("10em".into()))
        );
        assert_eq!("".parse::<RootMargin>(), Err(MarginError::Arity(0)));
        assert_eq!(
            "1px 2px 3px 4px 5px".parse::<RootMargin>(),
            Err(MarginError::Arity(5))
        );
    }

    #[test]
    fn test_presets_render_for_observer() {
        assert_eq!(
            RevealOptions::section().margin.to_string(),
            "-100px -100px -100px -100px"
        );
        assert_eq!(RevealOptions::card().margin.to_string(), "-50px -50px -50px -50px");
    }
}
