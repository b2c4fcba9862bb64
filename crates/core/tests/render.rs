use launchpad_core::icons::{glyphs, render, render_plain, IconSet};
use launchpad_core::model::IconDescriptor;

const RED_STAR: IconDescriptor = IconDescriptor::new("red-star", "*", 196);
const BLUE_STAR: IconDescriptor = IconDescriptor::new("blue-star", "*", 21);
const DOT: IconDescriptor = IconDescriptor::new("dot", ".", 34);

fn set(descriptors: &[IconDescriptor]) -> IconSet {
    descriptors.iter().map(|d| (*d, 0)).collect()
}

#[test]
fn empty_set_renders_empty_string() {
    assert_eq!(render(&IconSet::new()), "");
    assert_eq!(render_plain(&IconSet::new()), "");
}

#[test]
fn shared_glyph_is_emitted_once() {
    let icons = set(&[RED_STAR, BLUE_STAR, DOT]);
    assert_eq!(render_plain(&icons), "* . ");
    assert_eq!(glyphs(&icons), vec!["*", "."]);

    let colored = render(&icons);
    assert_eq!(colored.matches('*').count(), 1);
    assert!(colored.contains("\u{1b}[38;5;196m"), "first seen colour is used: {colored:?}");
    assert!(!colored.contains("\u{1b}[38;5;21m"));
    assert!(colored.contains("\u{1b}[38;5;34m"));
}

#[test]
fn output_follows_insertion_order_and_is_stable() {
    let icons = set(&[DOT, RED_STAR]);
    assert_eq!(render_plain(&icons), ". * ");
    assert_eq!(render(&icons), render(&icons.clone()));
}

#[test]
fn colored_output_strips_to_plain_output() {
    let icons = set(&[RED_STAR, DOT]);
    assert_eq!(console::strip_ansi_codes(&render(&icons)), render_plain(&icons));
}
