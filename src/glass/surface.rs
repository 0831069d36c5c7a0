//! Interactive glass surface
//!
//! Pointer-tracking engine behind the liquid-glass highlight. Pointer events
//! only record a sample; the CSS variables are written on the animation-frame
//! tick, so a burst of moves costs one layout read and one batch of style
//! writes per frame. The newest sample always supersedes the pending one.

use crate::glass::element::SurfaceElement;
use crate::glass::theme::GlassPreset;

/// One pointer position, in the host's client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

/// Corner radius override, written to `--glass-radius` at mount
#[derive(Debug, Clone, PartialEq)]
pub enum Radius {
    /// Numeric radii become `"{n}px"`.
    Px(f64),
    /// Raw CSS length or expression, passed through untouched.
    Css(String),
}

impl Radius {
    fn to_css(&self) -> String {
        match self {
            Radius::Px(value) => format!("{}px", value),
            Radius::Css(value) => value.clone(),
        }
    }
}

/// Hooks an embedding shell attaches to the surface's events.
///
/// Every hook runs before the surface's own handling and is never
/// suppressed, interactive or not.
#[derive(Default)]
pub struct SurfaceHooks {
    pub on_pointer_enter: Option<Box<dyn FnMut(PointerSample) + Send>>,
    pub on_pointer_move: Option<Box<dyn FnMut(PointerSample) + Send>>,
    pub on_pointer_leave: Option<Box<dyn FnMut() + Send>>,
    pub on_focus: Option<Box<dyn FnMut() + Send>>,
    pub on_blur: Option<Box<dyn FnMut() + Send>>,
}

pub struct GlassSurfaceBuilder {
    tag: String,
    preset: GlassPreset,
    interactive: bool,
    radius: Option<Radius>,
    reduced_motion: bool,
    attributes: Vec<(String, String)>,
    hooks: SurfaceHooks,
}

impl Default for GlassSurfaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GlassSurfaceBuilder {
    pub fn new() -> Self {
        Self {
            tag: "div".to_string(),
            preset: GlassPreset::Frosted,
            interactive: false,
            radius: None,
            reduced_motion: false,
            attributes: Vec::new(),
            hooks: SurfaceHooks::default(),
        }
    }

    /// Element kind the shell should render ("div", "button", "section").
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn preset(mut self, preset: GlassPreset) -> Self {
        self.preset = preset;
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Reduced-motion preference at mount time.
    pub fn reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    /// Extra attribute written at mount (e.g. `type="button"`).
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn on_pointer_enter(mut self, hook: impl FnMut(PointerSample) + Send + 'static) -> Self {
        self.hooks.on_pointer_enter = Some(Box::new(hook));
        self
    }

    pub fn on_pointer_move(mut self, hook: impl FnMut(PointerSample) + Send + 'static) -> Self {
        self.hooks.on_pointer_move = Some(Box::new(hook));
        self
    }

    pub fn on_pointer_leave(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.hooks.on_pointer_leave = Some(Box::new(hook));
        self
    }

    pub fn on_focus(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.hooks.on_focus = Some(Box::new(hook));
        self
    }

    pub fn on_blur(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.hooks.on_blur = Some(Box::new(hook));
        self
    }

    /// Attach to the host element and write the marker attributes.
    pub fn mount<E: SurfaceElement>(self, element: E) -> GlassSurface<E> {
        let GlassSurfaceBuilder {
            tag,
            preset,
            interactive,
            radius,
            reduced_motion,
            attributes,
            hooks,
        } = self;

        let mut surface = GlassSurface {
            element,
            tag,
            preset,
            interactive,
            reduced_motion,
            radius,
            hooks,
            pending: None,
        };

        surface.element.set_attribute("data-glass", "");
        surface
            .element
            .set_attribute("data-glass-preset", surface.preset.as_str());
        for (name, value) in attributes {
            surface.element.set_attribute(&name, &value);
        }
        if let Some(radius) = &surface.radius {
            surface
                .element
                .set_css_property("--glass-radius", &radius.to_css());
        }
        surface.sync_interactive_attribute();
        surface
    }
}

/// A mounted glass surface over a host element
pub struct GlassSurface<E: SurfaceElement> {
    element: E,
    tag: String,
    preset: GlassPreset,
    interactive: bool,
    reduced_motion: bool,
    radius: Option<Radius>,
    hooks: SurfaceHooks,
    /// Latest unapplied sample; `Some` doubles as "an update is scheduled".
    pending: Option<PointerSample>,
}

impl<E: SurfaceElement> GlassSurface<E> {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn preset(&self) -> GlassPreset {
        self.preset
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Whether pointer tracking is live: configured interactive and the user
    /// has not asked for reduced motion.
    pub fn is_interactive(&self) -> bool {
        self.interactive && !self.reduced_motion
    }

    /// Preference changes after mount land here.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
        self.sync_interactive_attribute();
    }

    pub fn pointer_enter(&mut self, x: f64, y: f64) {
        let sample = PointerSample { x, y };
        if let Some(hook) = &mut self.hooks.on_pointer_enter {
            hook(sample);
        }
        if !self.is_interactive() {
            return;
        }
        self.pending = Some(sample);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let sample = PointerSample { x, y };
        if let Some(hook) = &mut self.hooks.on_pointer_move {
            hook(sample);
        }
        if !self.is_interactive() {
            return;
        }
        self.pending = Some(sample);
    }

    /// Pointer left the surface: the highlight goes inactive immediately and
    /// any pending sample is discarded. The last written position stays.
    pub fn pointer_leave(&mut self) {
        if let Some(hook) = &mut self.hooks.on_pointer_leave {
            hook();
        }
        self.pending = None;
        self.element.set_css_property("--glass-active", "0");
    }

    /// Keyboard focus synthesizes a centered highlight immediately.
    pub fn focus(&mut self) {
        if let Some(hook) = &mut self.hooks.on_focus {
            hook();
        }
        let rect = self.element.bounding_rect();
        self.element
            .set_css_property("--glass-px", &format!("{}px", rect.width / 2.0));
        self.element
            .set_css_property("--glass-py", &format!("{}px", rect.height / 2.0));
        self.element.set_css_property("--glass-active", "1");
    }

    pub fn blur(&mut self) {
        if let Some(hook) = &mut self.hooks.on_blur {
            hook();
        }
        self.pending = None;
        self.element.set_css_property("--glass-active", "0");
    }

    /// Animation-frame tick, driven by the embedding shell.
    ///
    /// With a pending sample: one bounding-rect read, then the position
    /// variables and the active flag are written. Without one: nothing.
    pub fn frame(&mut self) {
        let Some(sample) = self.pending.take() else {
            return;
        };
        let rect = self.element.bounding_rect();
        let x = sample.x - rect.x;
        let y = sample.y - rect.y;
        self.element
            .set_css_property("--glass-px", &format!("{}px", x));
        self.element
            .set_css_property("--glass-py", &format!("{}px", y));
        self.element.set_css_property("--glass-active", "1");
    }

    /// Unmount: any pending update is discarded with the surface, so nothing
    /// is ever written to a detached element.
    pub fn detach(self) -> E {
        self.element
    }

    fn sync_interactive_attribute(&mut self) {
        if self.is_interactive() {
            self.element.set_attribute("data-glass-interactive", "");
        } else {
            self.element.remove_attribute("data-glass-interactive");
        }
    }
}
