// Example: bound a menu panel that would run off the bottom of the viewport.
use std::collections::HashMap;

use floating_size::{
    DEFAULT_BOX_CLASS, DEFAULT_PADDING, ElementTree, Elements, Measurements, PassInput, Pipeline,
    Placement, Rect, Size, StyleProperty, StyleValue, bounded_size_modifiers,
};

/// A flat stand-in for a DOM: element ids, one class each, and inline styles.
#[derive(Default)]
struct Page {
    parents: Vec<Option<usize>>,
    classes: Vec<&'static str>,
    styles: HashMap<(usize, StyleProperty), StyleValue>,
}

impl Page {
    fn add(&mut self, parent: Option<usize>, class: &'static str) -> usize {
        self.parents.push(parent);
        self.classes.push(class);
        self.parents.len() - 1
    }
}

impl ElementTree for Page {
    type Handle = usize;

    fn query_class(&self, root: &usize, class: &str) -> Option<usize> {
        (0..self.classes.len())
            .find(|&i| self.parents[i] == Some(*root) && self.classes[i] == class)
    }

    fn style(&self, element: &usize, property: StyleProperty) -> Option<StyleValue> {
        self.styles.get(&(*element, property)).copied()
    }

    fn set_style(&mut self, element: &usize, property: StyleProperty, value: StyleValue) {
        self.styles.insert((*element, property), value);
    }

    fn remove_style(&mut self, element: &usize, property: StyleProperty) {
        self.styles.remove(&(*element, property));
    }
}

fn main() {
    let mut page = Page::default();
    let button = page.add(None, "button");
    let popper = page.add(None, "tippy-root");
    let menu_box = page.add(Some(popper), "tippy-box");

    let pipeline: Pipeline<Page> = Pipeline::builder()
        .with_all(bounded_size_modifiers(
            DEFAULT_BOX_CLASS,
            DEFAULT_PADDING,
            &[Placement::Top],
        ))
        .build()
        .expect("built-in modifiers form a valid pipeline");
    println!("order={:?}", pipeline.order().collect::<Vec<_>>());

    let measurements = Measurements::new(
        Rect::new(100.0, 220.0, 80.0, 30.0),
        Some(Size::new(200.0, 400.0)),
        Some(Rect::new(0.0, 0.0, 800.0, 600.0)),
    );
    let input = PassInput::new(Placement::Bottom, Elements::new(button, popper), measurements);
    let report = pipeline.run(&mut page, input);

    println!("placement={}", report.state.placement);
    for property in [StyleProperty::MaxHeight, StyleProperty::Overflow] {
        if let Some(value) = page.style(&menu_box, property) {
            println!("{property}: {value}");
        }
    }
    println!("mutations={}", report.style_mutations);
}
