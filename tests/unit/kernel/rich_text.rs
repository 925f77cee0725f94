use super::*;

#[test]
fn hex_parses_with_and_without_hash() {
    assert_eq!(Rgb::from_hex("#ff8c00"), Some(Rgb(0xff, 0x8c, 0x00)));
    assert_eq!(Rgb::from_hex("50fa7b"), Some(Rgb(0x50, 0xfa, 0x7b)));
    assert_eq!(Rgb::from_hex("#fff"), None);
    assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    assert_eq!(Rgb::hex(0x268bd2), Rgb(0x26, 0x8b, 0xd2));
}

#[test]
fn dim_scales_toward_black() {
    assert_eq!(Rgb(200, 100, 50).dim(255), Rgb(200, 100, 50));
    assert_eq!(Rgb(200, 100, 50).dim(0), Rgb(0, 0, 0));
}

#[test]
fn push_splits_on_newlines() {
    let mut text = RichText::new();
    text.color("one\ntwo", Rgb(1, 2, 3)).text(" tail\n");
    assert_eq!(text.line_count(), 3);
    assert_eq!(text.to_plain_string(), "one\ntwo tail\n");
}

#[test]
fn adjacent_runs_with_same_style_merge() {
    let mut text = RichText::new();
    text.color("ab", Rgb(1, 1, 1)).color("cd", Rgb(1, 1, 1));
    text.bold("ef", Rgb(1, 1, 1));
    let line = &text.lines()[0];
    assert_eq!(line.len(), 2);
    assert_eq!(line[0].text, "abcd");
    assert!(line[1].style.mods.contains(Mod::BOLD));
}

#[test]
fn markup_is_kept_verbatim() {
    let text = RichText::plain("<b>not bold</b>");
    assert_eq!(text.to_plain_string(), "<b>not bold</b>");
    assert_eq!(text.lines()[0][0].style, Style::default());
}
