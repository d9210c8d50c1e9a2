use crate::*;

use std::sync::Arc;

use floating_size::{
    BOX_LOCATOR, BoundedSize, Delta, ElementTree, Elements, MAX_SIZE, MaxSize, MaxSizeOptions,
    Measurements, ModifierData, PassContext, Phase, Placement, Rect, Registration, Size,
    StyleProperty, StyleValue,
};

struct Popup {
    dom: MemoryDom,
    reference: NodeId,
    popper: NodeId,
    box_el: NodeId,
}

impl Popup {
    /// A trigger button and a popper wrapper holding `.tippy-box > .menu`.
    fn mounted() -> Self {
        let mut dom = MemoryDom::new();
        let doc = dom.document();
        let reference = dom.create_element(["trigger"]);
        let popper = dom.create_element(["tippy-wrapper"]);
        let box_el = dom.create_element(["tippy-box"]);
        let menu = dom.create_element(["menu"]);
        dom.append_child(doc, reference);
        dom.append_child(doc, popper);
        dom.append_child(popper, box_el);
        dom.append_child(box_el, menu);
        Self {
            dom,
            reference,
            popper,
            box_el,
        }
    }
}

fn viewport() -> Rect {
    Rect::new(0.0, 0.0, 800.0, 600.0)
}

fn tall_menu_at(reference: Rect) -> Measurements {
    Measurements::new(reference, Some(Size::new(200.0, 400.0)), Some(viewport()))
}

#[test]
fn query_class_is_preorder_over_descendants_only() {
    let mut dom = MemoryDom::new();
    let doc = dom.document();
    let root = dom.create_element(["hit"]);
    let a = dom.create_element(["a"]);
    let a_child = dom.create_element(["hit"]);
    let b = dom.create_element(["hit"]);
    dom.append_child(doc, root);
    dom.append_child(root, a);
    dom.append_child(a, a_child);
    dom.append_child(root, b);

    assert_eq!(dom.query_class(&root, "hit"), Some(a_child));
    assert_eq!(dom.query_class(&a_child, "hit"), None);
    assert_eq!(dom.query_class(&root, "missing"), None);

    dom.add_class(a, "hit");
    assert_eq!(dom.query_class(&root, "hit"), Some(a));
}

#[test]
fn append_child_rejects_cycles_and_reparents() {
    let mut dom = MemoryDom::new();
    let doc = dom.document();
    let outer = dom.create_element(["outer"]);
    let inner = dom.create_element(["inner"]);
    assert!(dom.append_child(doc, outer));
    assert!(dom.append_child(outer, inner));

    assert!(!dom.append_child(inner, outer));
    assert!(!dom.append_child(inner, inner));
    assert!(!dom.append_child(outer, doc));

    assert!(dom.append_child(doc, inner));
    assert_eq!(dom.parent(inner), Some(doc));
    assert!(dom.children(outer).is_empty());
    assert_eq!(dom.children(doc), &[outer, inner]);
}

#[test]
fn connection_follows_the_document_root() {
    let mut dom = MemoryDom::new();
    let doc = dom.document();
    let parent = dom.create_element(["p"]);
    let child = dom.create_element(["c"]);
    dom.append_child(parent, child);
    assert!(!dom.is_connected(&child));

    dom.append_child(doc, parent);
    assert!(dom.is_connected(&parent));
    assert!(dom.is_connected(&child));

    dom.detach(parent);
    assert!(!dom.is_connected(&parent));
    assert!(!dom.is_connected(&child));
    assert!(dom.is_connected(&doc));
}

#[test]
fn style_mutations_count_effective_changes_only() {
    let mut dom = MemoryDom::new();
    let el = dom.create_element(["box"]);
    dom.set_style(&el, StyleProperty::MaxHeight, StyleValue::Px(343.0));
    dom.set_style(&el, StyleProperty::Overflow, StyleValue::Auto);
    dom.remove_style(&el, StyleProperty::MaxWidth);
    assert_eq!(dom.style_mutations(), 2);
    assert_eq!(dom.style_text(el), "max-height: 343px; overflow: auto");

    dom.set_style(&el, StyleProperty::MaxHeight, StyleValue::Px(343.0));
    assert_eq!(dom.style_mutations(), 2);
    dom.set_style(&el, StyleProperty::MaxHeight, StyleValue::Px(300.0));
    assert_eq!(dom.style_mutations(), 3);

    dom.remove_style(&el, StyleProperty::MaxHeight);
    assert_eq!(dom.style_mutations(), 4);
    assert_eq!(dom.style_text(el), "overflow: auto");
}

#[test]
fn ids_from_another_dom_are_ignored() {
    let mut big = MemoryDom::new();
    for _ in 0..4 {
        big.create_element(["filler"]);
    }
    let foreign = big.create_element(["tippy-box"]);

    let mut small = MemoryDom::new();
    let doc = small.document();
    let own = small.create_element(["own"]);
    small.append_child(doc, own);

    small.detach(foreign);
    small.add_class(foreign, "x");
    small.set_style(&foreign, StyleProperty::MaxHeight, StyleValue::Px(10.0));
    small.remove_style(&foreign, StyleProperty::MaxHeight);
    assert!(!small.append_child(foreign, own));
    assert!(!small.append_child(own, foreign));
    assert!(!small.is_connected(&foreign));
    assert_eq!(small.query_class(&foreign, "own"), None);
    assert_eq!(small.style_text(foreign), "");
    assert_eq!(small.style_mutations(), 0);
    assert_eq!(small.children(doc), &[own]);
}

#[test]
fn default_options_describe_a_dropdown_menu() {
    let options = PopupMenuOptions::default();
    assert_eq!(options.placement, Placement::Top);
    assert!(options.fallback_placements.is_empty());
    assert_eq!(options.padding, 7.0);
    assert_eq!(options.offset.skidding, 0.0);
    assert_eq!(options.offset.distance, 2.0);
    assert_eq!(options.box_class, "tippy-box");
    assert!(options.size_flip);

    let menu = PopupMenu::<MemoryDom>::new(options).unwrap();
    assert_eq!(
        menu.pipeline().order().collect::<Vec<_>>(),
        vec!["findTippyBox", "sizeFlip", "maxSize", "applyMaxSize"]
    );
}

#[test]
fn bottom_menu_is_bounded_to_the_viewport() {
    let mut popup = Popup::mounted();
    let mut menu =
        PopupMenu::new(PopupMenuOptions::new().with_placement(Placement::Bottom)).unwrap();

    // Reference bottom at 248, 2px gap, so the 400px menu would end at 650.
    let report = menu.update(
        &mut popup.dom,
        Elements::new(popup.reference, popup.popper),
        tall_menu_at(Rect::new(100.0, 218.0, 80.0, 30.0)),
    );

    assert!(report.completed);
    assert_eq!(report.style_mutations, 2);
    assert_eq!(menu.placement(), Placement::Bottom);
    assert_eq!(menu.last_size(), Some(BoundedSize::Height(343.0)));
    assert_eq!(
        popup.dom.style_text(popup.box_el),
        "max-height: 343px; overflow: auto"
    );
    assert_eq!(popup.dom.style_text(popup.popper), "");
}

#[test]
fn top_menu_that_fits_gets_its_full_room() {
    let mut popup = Popup::mounted();
    let mut menu = PopupMenu::new(PopupMenuOptions::default()).unwrap();

    menu.update(
        &mut popup.dom,
        Elements::new(popup.reference, popup.popper),
        tall_menu_at(Rect::new(100.0, 500.0, 80.0, 30.0)),
    );
    assert_eq!(menu.placement(), Placement::Top);
    assert_eq!(menu.last_size(), Some(BoundedSize::Height(491.0)));

    let again = menu.update(
        &mut popup.dom,
        Elements::new(popup.reference, popup.popper),
        tall_menu_at(Rect::new(100.0, 500.0, 80.0, 30.0)),
    );
    assert_eq!(again.style_mutations, 0);
}

#[test]
fn cramped_top_menu_flips_below_unless_disabled() {
    let reference = Rect::new(100.0, 60.0, 80.0, 30.0);

    let mut popup = Popup::mounted();
    let mut menu = PopupMenu::new(PopupMenuOptions::default()).unwrap();
    menu.update(
        &mut popup.dom,
        Elements::new(popup.reference, popup.popper),
        tall_menu_at(reference),
    );
    assert_eq!(menu.placement(), Placement::Bottom);
    assert_eq!(menu.last_size(), Some(BoundedSize::Height(501.0)));

    let mut popup = Popup::mounted();
    let mut menu = PopupMenu::new(PopupMenuOptions::default().with_size_flip(false)).unwrap();
    assert_eq!(menu.pipeline().len(), 3);
    menu.update(
        &mut popup.dom,
        Elements::new(popup.reference, popup.popper),
        tall_menu_at(reference),
    );
    assert_eq!(menu.placement(), Placement::Top);
    assert_eq!(menu.last_size(), Some(BoundedSize::Height(51.0)));
    assert_eq!(
        popup.dom.style_text(popup.box_el),
        "max-height: 51px; overflow: auto"
    );
}

#[test]
fn box_mounted_late_is_styled_on_the_next_update() {
    let mut dom = MemoryDom::new();
    let doc = dom.document();
    let reference = dom.create_element(["trigger"]);
    let popper = dom.create_element(["tippy-wrapper"]);
    dom.append_child(doc, reference);
    dom.append_child(doc, popper);
    let elements = Elements::new(reference, popper);
    let measurements = tall_menu_at(Rect::new(100.0, 500.0, 80.0, 30.0));

    let mut menu = PopupMenu::new(PopupMenuOptions::default()).unwrap();
    let report = menu.update(&mut dom, elements.clone(), measurements);
    assert!(report.completed);
    assert_eq!(report.style_mutations, 0);
    assert_eq!(report.state.modifiers_data.box_element(BOX_LOCATOR), None);
    assert_eq!(menu.last_size(), Some(BoundedSize::Height(491.0)));

    let box_el = dom.create_element(["tippy-box"]);
    dom.append_child(popper, box_el);
    let report = menu.update(&mut dom, elements, measurements);
    assert_eq!(report.style_mutations, 2);
    assert_eq!(dom.style_text(box_el), "max-height: 491px; overflow: auto");
}

#[test]
fn detached_popper_keeps_the_previous_result() {
    let mut popup = Popup::mounted();
    let mut menu = PopupMenu::new(PopupMenuOptions::default()).unwrap();
    menu.update(
        &mut popup.dom,
        Elements::new(popup.reference, popup.popper),
        tall_menu_at(Rect::new(100.0, 500.0, 80.0, 30.0)),
    );

    popup.dom.detach(popup.popper);
    let report = menu.update(
        &mut popup.dom,
        Elements::new(popup.reference, popup.popper),
        tall_menu_at(Rect::new(100.0, 60.0, 80.0, 30.0)),
    );
    assert!(!report.completed);
    assert_eq!(report.style_mutations, 0);
    assert_eq!(menu.placement(), Placement::Top);
    assert_eq!(menu.last_size(), Some(BoundedSize::Height(491.0)));
    assert_eq!(
        popup.dom.style_text(popup.box_el),
        "max-height: 491px; overflow: auto"
    );
}

#[test]
fn extra_modifiers_merge_by_name() {
    // Records the inline max-height the box ended up with.
    let observe = |ctx: &PassContext<'_, MemoryDom>| {
        let height = ctx
            .state
            .modifiers_data
            .box_element(BOX_LOCATOR)
            .and_then(|el| ctx.tree.style(el, StyleProperty::MaxHeight));
        Delta::<NodeId>::data(ModifierData::Custom(Arc::new(height)))
    };

    let mut popup = Popup::mounted();
    let mut menu = PopupMenu::with_modifiers(
        PopupMenuOptions::default(),
        [
            MaxSize::new(MaxSizeOptions::new().with_padding(0.0)).registration(),
            Registration::new("observe", Phase::AfterWrite, observe),
        ],
    )
    .unwrap();
    assert_eq!(menu.pipeline().len(), 5);

    let report = menu.update(
        &mut popup.dom,
        Elements::new(popup.reference, popup.popper),
        tall_menu_at(Rect::new(100.0, 500.0, 80.0, 30.0)),
    );
    assert_eq!(
        report.state.modifiers_data.max_size(MAX_SIZE),
        Some(BoundedSize::Height(498.0))
    );
    let observed = report
        .state
        .modifiers_data
        .get("observe")
        .and_then(|d| d.downcast_ref::<Option<StyleValue>>())
        .copied()
        .flatten();
    assert_eq!(observed, Some(StyleValue::Px(498.0)));
}

#[test]
fn custom_box_class_is_honoured() {
    let mut dom = MemoryDom::new();
    let doc = dom.document();
    let reference = dom.create_element(["trigger"]);
    let popper = dom.create_element(["wrapper"]);
    let default_box = dom.create_element(["tippy-box"]);
    let panel = dom.create_element(["panel"]);
    dom.append_child(doc, reference);
    dom.append_child(doc, popper);
    dom.append_child(popper, default_box);
    dom.append_child(popper, panel);

    let mut menu = PopupMenu::new(PopupMenuOptions::default().with_box_class("panel")).unwrap();
    menu.update(
        &mut dom,
        Elements::new(reference, popper),
        tall_menu_at(Rect::new(100.0, 500.0, 80.0, 30.0)),
    );
    assert_eq!(dom.style_text(default_box), "");
    assert_eq!(dom.style_text(panel), "max-height: 491px; overflow: auto");
}
