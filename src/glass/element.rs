//! Host-element seam for the glass engine
//!
//! The engine needs three capabilities from whatever renders it: measuring
//! the border box, writing CSS custom properties, and writing attributes.
//! Embedding shells bridge these to their real element; [`MemoryElement`]
//! keeps everything in memory for tests and headless use.

use std::cell::Cell;
use std::collections::BTreeMap;

/// Border box of a tracked element, in the host's client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// What the glass engine needs from a host element
pub trait SurfaceElement: Send {
    /// Measure the border box. The engine calls this at most once per frame.
    fn bounding_rect(&self) -> Rect;

    fn set_css_property(&mut self, name: &str, value: &str);

    fn set_attribute(&mut self, name: &str, value: &str);

    fn remove_attribute(&mut self, name: &str);
}

/// In-memory element that records every write
#[derive(Debug, Default)]
pub struct MemoryElement {
    rect: Rect,
    css: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    rect_reads: Cell<usize>,
    css_writes: usize,
}

impl MemoryElement {
    /// Element of the given size at the client origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rect(Rect::new(0.0, 0.0, width, height))
    }

    pub fn with_rect(rect: Rect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }

    pub fn css(&self, name: &str) -> Option<&str> {
        self.css.get(name).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Number of times the border box was measured.
    pub fn rect_reads(&self) -> usize {
        self.rect_reads.get()
    }

    /// Number of individual CSS property writes.
    pub fn css_writes(&self) -> usize {
        self.css_writes
    }
}

impl SurfaceElement for MemoryElement {
    fn bounding_rect(&self) -> Rect {
        self.rect_reads.set(self.rect_reads.get() + 1);
        self.rect
    }

    fn set_css_property(&mut self, name: &str, value: &str) {
        self.css_writes += 1;
        self.css.insert(name.to_string(), value.to_string());
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}
