// Example: a dropdown menu that opens above its trigger, flips below when cramped, and is
// height-bounded to the viewport either way.
use floating_size::{Elements, Measurements, Placement, Rect, Size};
use floating_size_adapter::{MemoryDom, PopupMenu, PopupMenuOptions};

fn main() {
    let mut dom = MemoryDom::new();
    let doc = dom.document();
    let trigger = dom.create_element(["menu-trigger"]);
    let popper = dom.create_element(["tippy-popper"]);
    let panel = dom.create_element(["tippy-box"]);
    let list = dom.create_element(["menu-list"]);
    dom.append_child(doc, trigger);
    dom.append_child(doc, popper);
    dom.append_child(popper, panel);
    dom.append_child(panel, list);

    let mut menu = match PopupMenu::new(
        PopupMenuOptions::new().with_fallback_placements([Placement::Bottom]),
    ) {
        Ok(menu) => menu,
        Err(err) => {
            eprintln!("invalid modifier set: {err}");
            return;
        }
    };

    let viewport = Rect::new(0.0, 0.0, 1024.0, 768.0);
    let popper_size = Size::new(240.0, 900.0);

    for trigger_y in [700.0, 40.0] {
        let measurements = Measurements::new(
            Rect::new(300.0, trigger_y, 120.0, 32.0),
            Some(popper_size),
            Some(viewport),
        );
        let report = menu.update(&mut dom, Elements::new(trigger, popper), measurements);
        println!(
            "trigger_y={trigger_y} placement={} bound={:?} mutations={} style=\"{}\"",
            menu.placement(),
            menu.last_size(),
            report.style_mutations,
            dom.style_text(panel),
        );
    }
}
