// Accessibility helpers

use web_sys::Element;

/// Reflect a disclosure widget's state in `aria-expanded`.
///
/// Used on the mobile menu button so assistive technology announces whether
/// the navigation is showing.
pub fn set_expanded(control: &Element, expanded: bool) {
    set_bool_attr(control, "aria-expanded", expanded);
}

/// Reflect a toggle button's state in `aria-pressed`.
pub fn set_pressed(control: &Element, pressed: bool) {
    set_bool_attr(control, "aria-pressed", pressed);
}

fn set_bool_attr(control: &Element, name: &str, value: bool) {
    let _ = control.set_attribute(name, if value { "true" } else { "false" });
}
