// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The DOM indicator dots.
//!
//! [`DomIndicators`] owns only the dot elements. Clicks are handled by one
//! delegated listener on the container (see [`dot_index`]), so the dots can
//! be rebuilt without re-registering listeners.

use carousel_core::backend::IndicatorStrip;
use web_sys::{Document, Element};

/// CSS class of each dot.
pub const DOT_CLASS: &str = "carousel-dot";

/// CSS class of the dot that mirrors the current slide.
pub const ACTIVE_CLASS: &str = "active";

const INDEX_ATTR: &str = "data-index";

/// An [`IndicatorStrip`] that renders one `div.carousel-dot` per item.
pub struct DomIndicators {
    document: Document,
    container: Element,
    dots: Vec<Element>,
}

impl std::fmt::Debug for DomIndicators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomIndicators")
            .field("container", &"Element")
            .field("dots", &self.dots.len())
            .finish_non_exhaustive()
    }
}

impl DomIndicators {
    /// Creates an empty strip that renders into `container`.
    #[must_use]
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
            dots: Vec::new(),
        }
    }

    fn create_dot(&self, index: usize, active: bool) -> Option<Element> {
        let dot = self.document.create_element("div").ok()?;
        let _ = dot.class_list().add_1(DOT_CLASS);
        if active {
            let _ = dot.class_list().add_1(ACTIVE_CLASS);
        }
        let _ = dot.set_attribute("role", "button");
        let _ = dot.set_attribute("aria-label", &dot_label(index));
        let _ = dot.set_attribute(INDEX_ATTR, &index.to_string());
        Some(dot)
    }
}

/// Accessible label of the dot at `index`.
fn dot_label(index: usize) -> String {
    format!("Go to image {}", index + 1)
}

/// Returns the index of the dot that contains `target`, if any.
#[must_use]
pub fn dot_index(target: &Element) -> Option<usize> {
    let dot = target.closest(&format!(".{DOT_CLASS}")).ok()??;
    dot.get_attribute(INDEX_ATTR)?.parse().ok()
}

impl IndicatorStrip for DomIndicators {
    fn build(&mut self, count: usize, active: usize) {
        self.container.set_inner_html("");
        self.dots.clear();
        for i in 0..count {
            if let Some(dot) = self.create_dot(i, i == active) {
                let _ = self.container.append_child(&dot);
                self.dots.push(dot);
            }
        }
    }

    fn set_active(&mut self, index: usize) {
        for (i, dot) in self.dots.iter().enumerate() {
            let _ = dot.class_list().toggle_with_force(ACTIVE_CLASS, i == index);
        }
    }
}
