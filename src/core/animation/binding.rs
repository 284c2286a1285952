//! Animation binding descriptors and the binding planner.
//!
//! A [`Region`] is what the renderer reports as present on the page. The
//! planner turns regions into [`AnimationBinding`]s: target element, from/to
//! properties, tween timing and an optional scroll trigger. Bindings are plain
//! data so they can be checked without a browser; the engine layer converts
//! them into GSAP tween options via [`AnimationBinding::vars`].

use serde::Serialize;

use crate::config::{card_anim, hero_intro, parallax, section_anim};
use crate::models::ViewportClass;

/// Element ids inside the hero block.
pub mod hero_ids {
    pub const TITLE: &str = "hero-title";
    pub const SUBTITLE: &str = "hero-subtitle";
    pub const DESCRIPTION: &str = "hero-description";
    pub const CTA: &str = "hero-cta";
}

/// Attribute names marking repeated cards.
pub mod card_attrs {
    pub const GROUP: &str = "data-card-group";
    pub const INDEX: &str = "data-card-index";
}

// ============================================================================
// Regions
// ============================================================================

/// A bindable part of the rendered page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// A top-level `<section>` with the given id.
    Section { anchor: &'static str },
    /// The hero block inside the section `anchor`.
    Hero { anchor: &'static str },
    /// `count` cards tagged with `group` inside the section `scope`.
    Cards {
        scope: &'static str,
        group: &'static str,
        count: usize,
    },
}

// ============================================================================
// Element references
// ============================================================================

/// CSS selector identifying a binding target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ElementRef(String);

impl ElementRef {
    /// Element with the given id.
    pub fn id(id: &str) -> Self {
        Self(format!("#{}", id))
    }

    /// The `index`th card of `group` inside the element with id `scope`.
    pub fn card(scope: &str, group: &str, index: usize) -> Self {
        Self(format!(
            "#{} [{}=\"{}\"][{}=\"{}\"]",
            scope,
            card_attrs::GROUP,
            group,
            card_attrs::INDEX,
            index
        ))
    }

    pub fn selector(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Tween descriptors
// ============================================================================

/// Animatable properties. Unset fields are left alone by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    /// Opacity that also toggles `visibility` at 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Vertical offset in px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Vertical offset as a percentage of the element's height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

/// Tween timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Seconds. Ignored for scrubbed tweens.
    pub duration: f64,
    pub ease: &'static str,
    /// Seconds.
    pub delay: f64,
}

/// Edge position used by trigger start/end offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgePos {
    Top,
    Bottom,
    /// Percentage from the top.
    Percent(f64),
}

impl EdgePos {
    fn as_gsap(self) -> String {
        match self {
            Self::Top => "top".to_string(),
            Self::Bottom => "bottom".to_string(),
            Self::Percent(p) => format!("{}%", p),
        }
    }
}

/// A trigger offset: "when `element` edge meets `viewport` edge".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub element: EdgePos,
    pub viewport: EdgePos,
}

impl Edge {
    pub const fn new(element: EdgePos, viewport: EdgePos) -> Self {
        Self { element, viewport }
    }

    /// GSAP offset string, e.g. `"top 85%"`.
    pub fn as_gsap(&self) -> String {
        format!("{} {}", self.element.as_gsap(), self.viewport.as_gsap())
    }
}

/// GSAP `toggleActions` for onEnter / onLeave / onEnterBack / onLeaveBack.
const PLAY_REVERSE_ACTIONS: &str = "play none none reverse";

/// How scroll position drives the tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerMode {
    /// Play on enter, reverse on leaving back. Replays indefinitely.
    PlayReverse,
    /// Progress tied to scroll position, smoothed over the given seconds.
    Scrub(f64),
}

/// Scroll trigger attached to a tween.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerSpec {
    pub element: ElementRef,
    pub start: Edge,
    pub end: Option<Edge>,
    pub mode: TriggerMode,
}

/// Kind of binding, used to rebind selectively on viewport changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingKind {
    Section,
    Card,
    Parallax,
    Intro,
}

/// Association between an element and an animation.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationBinding {
    pub kind: BindingKind,
    pub target: ElementRef,
    /// Starting properties. `None` tweens from the current state.
    pub from: Option<Props>,
    pub to: Props,
    pub tween: Tween,
    /// `None` plays immediately on binding.
    pub trigger: Option<TriggerSpec>,
}

// ============================================================================
// Engine options
// ============================================================================

/// GSAP `scrollTrigger` options.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTriggerVars<'a> {
    pub trigger: &'a str,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_actions: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrub: Option<f64>,
}

/// GSAP tween options (the `vars` of `gsap.to` / the second object of `gsap.fromTo`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars<'a> {
    #[serde(flatten)]
    pub props: Props,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub ease: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<ScrollTriggerVars<'a>>,
}

impl AnimationBinding {
    /// Destination options for the engine.
    pub fn vars(&self) -> TweenVars<'_> {
        let scroll_trigger = self.trigger.as_ref().map(|t| {
            let (toggle_actions, scrub) = match t.mode {
                TriggerMode::PlayReverse => (Some(PLAY_REVERSE_ACTIONS), None),
                TriggerMode::Scrub(smoothing) => (None, Some(smoothing)),
            };
            ScrollTriggerVars {
                trigger: t.element.selector(),
                start: t.start.as_gsap(),
                end: t.end.map(|e| e.as_gsap()),
                toggle_actions,
                scrub,
            }
        });
        let scrubbed = scroll_trigger.as_ref().is_some_and(|t| t.scrub.is_some());

        TweenVars {
            props: self.to,
            duration: (!scrubbed).then_some(self.tween.duration),
            ease: self.tween.ease,
            delay: (self.tween.delay > 0.0).then_some(self.tween.delay),
            scroll_trigger,
        }
    }

    /// Element refs this binding needs present in the document.
    pub fn required_elements(&self) -> impl Iterator<Item = &ElementRef> {
        std::iter::once(&self.target).chain(self.trigger.as_ref().map(|t| &t.element))
    }
}

// ============================================================================
// Planner
// ============================================================================

/// Fade/translate-in for a top-level section.
pub fn section_binding(anchor: &str) -> AnimationBinding {
    let element = ElementRef::id(anchor);
    AnimationBinding {
        kind: BindingKind::Section,
        target: element.clone(),
        from: Some(Props {
            auto_alpha: Some(0.0),
            y: Some(section_anim::OFFSET_Y),
            ..Props::default()
        }),
        to: Props {
            auto_alpha: Some(1.0),
            y: Some(0.0),
            ..Props::default()
        },
        tween: Tween {
            duration: section_anim::DURATION,
            ease: section_anim::EASE,
            delay: 0.0,
        },
        trigger: Some(TriggerSpec {
            element,
            start: Edge::new(EdgePos::Top, EdgePos::Percent(section_anim::START_PERCENT)),
            end: None,
            mode: TriggerMode::PlayReverse,
        }),
    }
}

/// Staggered enter animation for each card of a group.
pub fn card_bindings(scope: &str, group: &str, count: usize) -> Vec<AnimationBinding> {
    (0..count)
        .map(|index| {
            let element = ElementRef::card(scope, group, index);
            AnimationBinding {
                kind: BindingKind::Card,
                target: element.clone(),
                from: Some(Props {
                    opacity: Some(0.0),
                    y: Some(card_anim::OFFSET_Y),
                    scale: Some(card_anim::SCALE),
                    ..Props::default()
                }),
                to: Props {
                    opacity: Some(1.0),
                    y: Some(0.0),
                    scale: Some(1.0),
                    ..Props::default()
                },
                tween: Tween {
                    duration: card_anim::DURATION,
                    ease: card_anim::EASE,
                    delay: index as f64 * card_anim::STAGGER,
                },
                trigger: Some(TriggerSpec {
                    element,
                    start: Edge::new(EdgePos::Top, EdgePos::Percent(card_anim::START_PERCENT)),
                    end: None,
                    mode: TriggerMode::PlayReverse,
                }),
            }
        })
        .collect()
}

/// Scroll-scrubbed parallax for the hero title and subtitle.
///
/// Progress runs from the hero's top meeting the viewport top to its bottom
/// meeting the viewport top, so the effect is bounded by the hero height.
pub fn parallax_bindings(anchor: &str, viewport: ViewportClass) -> Vec<AnimationBinding> {
    let (title, subtitle, scrub) = match viewport {
        ViewportClass::Desktop => (
            parallax::DESKTOP_TITLE,
            parallax::DESKTOP_SUBTITLE,
            parallax::DESKTOP_SCRUB,
        ),
        ViewportClass::Mobile => (
            parallax::MOBILE_TITLE,
            parallax::MOBILE_SUBTITLE,
            parallax::MOBILE_SCRUB,
        ),
    };
    let trigger = TriggerSpec {
        element: ElementRef::id(anchor),
        start: Edge::new(EdgePos::Top, EdgePos::Top),
        end: Some(Edge::new(EdgePos::Bottom, EdgePos::Top)),
        mode: TriggerMode::Scrub(scrub),
    };

    [(hero_ids::TITLE, title), (hero_ids::SUBTITLE, subtitle)]
        .into_iter()
        .map(|(id, y_percent)| AnimationBinding {
            kind: BindingKind::Parallax,
            target: ElementRef::id(id),
            from: None,
            to: Props {
                y_percent: Some(y_percent),
                ..Props::default()
            },
            tween: Tween {
                duration: 1.0,
                ease: "none",
                delay: 0.0,
            },
            trigger: Some(trigger.clone()),
        })
        .collect()
}

/// One-shot intro tweens for the hero text and call to action.
pub fn intro_bindings() -> Vec<AnimationBinding> {
    let rise = |id: &str, delay: f64| AnimationBinding {
        kind: BindingKind::Intro,
        target: ElementRef::id(id),
        from: Some(Props {
            opacity: Some(0.0),
            y: Some(hero_intro::OFFSET_Y),
            ..Props::default()
        }),
        to: Props {
            opacity: Some(1.0),
            y: Some(0.0),
            ..Props::default()
        },
        tween: Tween {
            duration: hero_intro::DURATION,
            ease: "power2.out",
            delay,
        },
        trigger: None,
    };

    vec![
        AnimationBinding {
            kind: BindingKind::Intro,
            target: ElementRef::id(hero_ids::TITLE),
            from: Some(Props {
                opacity: Some(0.0),
                scale: Some(hero_intro::TITLE_SCALE),
                ..Props::default()
            }),
            to: Props {
                opacity: Some(1.0),
                scale: Some(1.0),
                ..Props::default()
            },
            tween: Tween {
                duration: hero_intro::DURATION,
                ease: "power2.out",
                delay: hero_intro::TITLE_DELAY,
            },
            trigger: None,
        },
        rise(hero_ids::SUBTITLE, hero_intro::SUBTITLE_DELAY),
        rise(hero_ids::DESCRIPTION, hero_intro::DESCRIPTION_DELAY),
        rise(hero_ids::CTA, hero_intro::CTA_DELAY),
    ]
}

/// Bindings for one region.
pub fn region_bindings(region: &Region, viewport: ViewportClass) -> Vec<AnimationBinding> {
    match *region {
        Region::Section { anchor } => vec![section_binding(anchor)],
        Region::Hero { anchor } => {
            let mut bindings = intro_bindings();
            bindings.extend(parallax_bindings(anchor, viewport));
            bindings
        }
        Region::Cards {
            scope,
            group,
            count,
        } => card_bindings(scope, group, count),
    }
}

/// Bindings for every region, in region order.
pub fn plan(regions: &[Region], viewport: ViewportClass) -> Vec<AnimationBinding> {
    regions
        .iter()
        .flat_map(|region| region_bindings(region, viewport))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_binding_starts_at_85_percent_and_reverses() {
        let binding = section_binding("services");
        let trigger = binding.trigger.as_ref().unwrap();
        assert_eq!(binding.target.selector(), "#services");
        assert_eq!(trigger.element.selector(), "#services");
        assert_eq!(trigger.start.as_gsap(), "top 85%");
        assert_eq!(trigger.mode, TriggerMode::PlayReverse);
        assert_eq!(binding.from.unwrap().auto_alpha, Some(0.0));
        assert_eq!(binding.to.auto_alpha, Some(1.0));
    }

    #[test]
    fn test_card_delays_are_proportional_to_position() {
        let cards = card_bindings("services", "service", 4);
        assert_eq!(cards.len(), 4);
        for (i, card) in cards.iter().enumerate() {
            let expected = i as f64 * card_anim::STAGGER;
            assert!((card.tween.delay - expected).abs() < 1e-9);
            assert_eq!(card.kind, BindingKind::Card);
        }
        assert_eq!(
            cards[2].target.selector(),
            "#services [data-card-group=\"service\"][data-card-index=\"2\"]"
        );
    }

    #[test]
    fn test_parallax_is_weaker_on_mobile() {
        let desktop = parallax_bindings("home", ViewportClass::Desktop);
        let mobile = parallax_bindings("home", ViewportClass::Mobile);
        assert_eq!(desktop.len(), 2);
        assert_eq!(mobile.len(), 2);
        for (d, m) in desktop.iter().zip(&mobile) {
            let d = d.to.y_percent.unwrap().abs();
            let m = m.to.y_percent.unwrap().abs();
            assert!(m < d);
        }
    }

    #[test]
    fn test_parallax_is_scrubbed_within_hero_height() {
        for binding in parallax_bindings("home", ViewportClass::Desktop) {
            let trigger = binding.trigger.unwrap();
            assert!(matches!(trigger.mode, TriggerMode::Scrub(_)));
            assert_eq!(trigger.element.selector(), "#home");
            assert_eq!(trigger.start.as_gsap(), "top top");
            assert_eq!(trigger.end.unwrap().as_gsap(), "bottom top");
        }
    }

    #[test]
    fn test_hero_region_includes_intro_and_parallax() {
        let bindings = region_bindings(&Region::Hero { anchor: "home" }, ViewportClass::Mobile);
        let intro = bindings.iter().filter(|b| b.kind == BindingKind::Intro).count();
        let parallax = bindings
            .iter()
            .filter(|b| b.kind == BindingKind::Parallax)
            .count();
        assert_eq!(intro, 4);
        assert_eq!(parallax, 2);
        assert!(bindings
            .iter()
            .filter(|b| b.kind == BindingKind::Intro)
            .all(|b| b.trigger.is_none()));
    }

    #[test]
    fn test_plan_preserves_region_order() {
        let regions = [
            Region::Section { anchor: "about" },
            Region::Cards {
                scope: "about",
                group: "panel",
                count: 3,
            },
        ];
        let bindings = plan(&regions, ViewportClass::Desktop);
        assert_eq!(bindings.len(), 4);
        assert_eq!(bindings[0].kind, BindingKind::Section);
        assert!(bindings[1..].iter().all(|b| b.kind == BindingKind::Card));
    }

    #[test]
    fn test_toggle_vars_shape() {
        let binding = section_binding("contact");
        let vars = serde_json::to_value(binding.vars()).unwrap();
        assert_eq!(
            vars,
            json!({
                "autoAlpha": 1.0,
                "y": 0.0,
                "duration": 1.2,
                "ease": "power3.out",
                "scrollTrigger": {
                    "trigger": "#contact",
                    "start": "top 85%",
                    "toggleActions": "play none none reverse"
                }
            })
        );
    }

    #[test]
    fn test_scrub_vars_omit_duration() {
        let binding = &parallax_bindings("home", ViewportClass::Desktop)[0];
        let vars = serde_json::to_value(binding.vars()).unwrap();
        assert_eq!(vars["yPercent"], json!(-25.0));
        assert_eq!(vars["ease"], json!("none"));
        assert_eq!(vars["scrollTrigger"]["scrub"], json!(1.0));
        assert_eq!(vars["scrollTrigger"]["end"], json!("bottom top"));
        assert!(vars.get("duration").is_none());
        assert!(vars["scrollTrigger"].get("toggleActions").is_none());
    }

    #[test]
    fn test_card_vars_carry_delay() {
        let binding = &card_bindings("services", "service", 3)[2];
        let vars = serde_json::to_value(binding.vars()).unwrap();
        assert!((vars["delay"].as_f64().unwrap() - 0.2).abs() < 1e-9);
        assert_eq!(vars["scrollTrigger"]["start"], json!("top 90%"));
    }

    #[test]
    fn test_required_elements() {
        let section = section_binding("about");
        assert_eq!(section.required_elements().count(), 2);
        let intro = &intro_bindings()[0];
        let ids: Vec<_> = intro.required_elements().map(|e| e.selector()).collect();
        assert_eq!(ids, vec!["#hero-title"]);
    }
}
