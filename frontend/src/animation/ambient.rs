use std::f64::consts::PI;

use log::warn;
use web_sys::HtmlElement;
use yew::functional::hook;
use yew::prelude::*;

use super::ticker::Ticker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    SineInOut,
    QuadInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto eased progress in `[0, 1]`.
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::SineInOut => -((PI * p).cos() - 1.0) / 2.0,
            Easing::QuadInOut => {
                if p < 0.5 {
                    2.0 * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Infinite yoyo translation: `from` → `to` → `from` once per `period` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub axis: Axis,
    pub from: f64,
    pub to: f64,
    pub period: f64,
    pub easing: Easing,
}

pub const HERO_FLOAT: Tween = Tween {
    axis: Axis::Y,
    from: 0.0,
    to: -10.0,
    period: 2.5,
    easing: Easing::SineInOut,
};

pub const HERO_DRIFT: Tween = Tween {
    axis: Axis::X,
    from: 0.0,
    to: 60.0,
    period: 2.0,
    easing: Easing::QuadInOut,
};

impl Tween {
    pub fn value_at(&self, elapsed: f64) -> f64 {
        if self.period <= 0.0 {
            return self.from;
        }
        let phase = (elapsed / self.period).rem_euclid(1.0);
        let leg = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
        self.from + (self.to - self.from) * self.easing.apply(leg)
    }

    pub fn transform_at(&self, elapsed: f64) -> String {
        let offset = self.value_at(elapsed);
        match self.axis {
            Axis::X => format!("translateX({:.2}px)", offset),
            Axis::Y => format!("translateY({:.2}px)", offset),
        }
    }
}

/// Runs `tween` on the element behind `node` for as long as the caller is mounted.
#[hook]
pub fn use_ambient_tween(node: NodeRef, tween: Tween) {
    use_effect_with_deps(
        move |node: &NodeRef| {
            let node = node.clone();
            let ticker = Ticker::start(move |elapsed| {
                if let Some(element) = node.cast::<HtmlElement>() {
                    let _ = element
                        .style()
                        .set_property("transform", &tween.transform_at(elapsed));
                }
            });
            let ticker = match ticker {
                Ok(ticker) => Some(ticker),
                Err(err) => {
                    warn!("Ambient tween disabled: {}", err);
                    None
                }
            };
            move || drop(ticker)
        },
        node,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn float_returns_to_start_every_period() {
        for t in [0.0, 2.5, 5.0, 250.0] {
            assert!(HERO_FLOAT.value_at(t).abs() < EPSILON, "t = {}", t);
        }
    }

    #[test]
    fn float_peaks_at_half_period() {
        assert!((HERO_FLOAT.value_at(1.25) + 10.0).abs() < EPSILON);
        assert!((HERO_FLOAT.value_at(3.75) + 10.0).abs() < EPSILON);
    }

    #[test]
    fn drift_stays_in_range() {
        for step in 0..400 {
            let value = HERO_DRIFT.value_at(step as f64 * 0.013);
            assert!((0.0..=60.0).contains(&value), "value {} out of range", value);
        }
        assert!((HERO_DRIFT.value_at(1.0) - 60.0).abs() < EPSILON);
        assert!(HERO_DRIFT.value_at(4.0).abs() < EPSILON);
    }

    #[test]
    fn easings_fix_endpoints() {
        for easing in [Easing::SineInOut, Easing::QuadInOut] {
            assert!(easing.apply(0.0).abs() < EPSILON);
            assert!((easing.apply(1.0) - 1.0).abs() < EPSILON);
            assert!((easing.apply(0.5) - 0.5).abs() < EPSILON);
        }
    }

    #[test]
    fn easings_ease_in_at_the_ends() {
        for easing in [Easing::SineInOut, Easing::QuadInOut] {
            assert!(easing.apply(0.1) < 0.1);
            assert!(easing.apply(0.9) > 0.9);
        }
    }

    #[test]
    fn yoyo_is_symmetric() {
        let a = HERO_FLOAT.value_at(0.4);
        let b = HERO_FLOAT.value_at(2.1);
        assert!((a - b).abs() < EPSILON);
    }

    #[test]
    fn transform_uses_axis() {
        assert_eq!(HERO_FLOAT.transform_at(0.0), "translateY(0.00px)");
        assert_eq!(HERO_DRIFT.transform_at(1.0), "translateX(60.00px)");
    }
}
