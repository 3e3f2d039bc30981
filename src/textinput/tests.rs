//! Tests for the textinput component.

use super::*;

fn with_value(value: &str) -> Model {
    new(Options::default().with_value(value))
}

#[test]
fn test_new_default_values() {
    let input = new(Options::default());

    assert_eq!(input.prompt, "> ");
    assert_eq!(input.placeholder, "");
    assert_eq!(input.cursor_char, "█");
    assert_eq!(input.max_length, 0);
    assert_eq!(input.width, 0);
    assert_eq!(input.mask, None);
    assert!(!input.show_char_count);
    assert_eq!(input.value(), "");
    assert_eq!(input.cursor(), 0);
    assert!(input.focused());
    assert!(input.is_empty());
}

#[test]
fn test_new_places_cursor_at_end() {
    let input = with_value("hello");
    assert_eq!(input.cursor(), 5);
    assert_eq!(input.len(), 5);
}

#[test]
fn test_new_truncates_initial_value() {
    let input = new(Options::default().with_value("hello world").with_max_length(5));
    assert_eq!(input.value(), "hello");
    assert_eq!(input.cursor(), 5);
}

#[test]
fn test_insert_at_cursor() {
    let input = with_value("hllo").set_cursor(1).insert('e');
    assert_eq!(input.value(), "hello");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn test_insert_respects_max_length() {
    let input = new(Options::default().with_max_length(3)).insert('a').insert('b').insert('c');
    let before = input.clone();
    let input = input.insert('d');
    assert_eq!(input, before);
    assert_eq!(input.value(), "abc");
}

#[test]
fn test_insert_control_char_is_ignored() {
    let input = with_value("ab");
    let before = input.clone();
    assert_eq!(input.insert('\u{7}'), before);
}

#[test]
fn test_insert_multibyte() {
    let input = new(Options::default()).insert('é').insert('日');
    assert_eq!(input.value(), "é日");
    assert_eq!(input.len(), 2);
    assert_eq!(input.cursor(), 2);
}

#[test]
fn test_insert_str_truncates_to_capacity() {
    let input = new(Options::default().with_max_length(5))
        .insert_str("ab")
        .insert_str("cdefg");
    assert_eq!(input.value(), "abcde");
    assert_eq!(input.cursor(), 5);
}

#[test]
fn test_insert_str_flattens_newlines_and_tabs() {
    let input = new(Options::default()).insert_str("a\nb\tc\r\nd");
    assert_eq!(input.value(), "a b c d");
}

#[test]
fn test_backspace() {
    let input = with_value("hello").backspace();
    assert_eq!(input.value(), "hell");
    assert_eq!(input.cursor(), 4);

    let at_start = with_value("hello").cursor_start();
    assert_eq!(at_start.clone().backspace(), at_start);
}

#[test]
fn test_delete_char_forward() {
    let input = with_value("hello").cursor_start().delete_char();
    assert_eq!(input.value(), "ello");
    assert_eq!(input.cursor(), 0);

    let at_end = with_value("hello");
    assert_eq!(at_end.clone().delete_char(), at_end);
}

#[test]
fn test_delete_word_backward() {
    let input = with_value("hello world").delete_word_backward();
    assert_eq!(input.value(), "hello ");
    assert_eq!(input.cursor(), 6);

    let input = input.delete_word_backward();
    assert_eq!(input.value(), "");
    assert_eq!(input.cursor(), 0);
}

#[test]
fn test_delete_word_backward_skips_trailing_whitespace() {
    let input = with_value("foo bar   ").delete_word_backward();
    assert_eq!(input.value(), "foo ");
}

#[test]
fn test_delete_word_backward_mid_value() {
    let input = with_value("one two three").set_cursor(7).delete_word_backward();
    assert_eq!(input.value(), "one  three");
    assert_eq!(input.cursor(), 4);
}

#[test]
fn test_delete_word_forward() {
    let input = with_value("hello world").cursor_start().delete_word_forward();
    assert_eq!(input.value(), " world");
    assert_eq!(input.cursor(), 0);

    let input = input.delete_word_forward();
    assert_eq!(input.value(), "");
}

#[test]
fn test_delete_to_end_and_start() {
    let input = with_value("hello world").set_cursor(5);
    assert_eq!(input.clone().delete_to_end().value(), "hello");

    let input = input.delete_to_start();
    assert_eq!(input.value(), " world");
    assert_eq!(input.cursor(), 0);
}

#[test]
fn test_cursor_movement_clamps() {
    let input = with_value("abc");
    assert_eq!(input.clone().cursor_right().cursor(), 3);
    assert_eq!(input.clone().cursor_left().cursor(), 2);
    assert_eq!(input.clone().cursor_start().cursor_left().cursor(), 0);
    assert_eq!(input.clone().cursor_start().cursor_end().cursor(), 3);
    assert_eq!(input.clone().set_cursor(99).cursor(), 3);
    assert_eq!(input.set_cursor(1).cursor(), 1);
}

#[test]
fn test_word_movement() {
    let input = with_value("one two  three");
    let input = input.word_left();
    assert_eq!(input.cursor(), 9);
    let input = input.word_left();
    assert_eq!(input.cursor(), 4);
    let input = input.word_left().word_left();
    assert_eq!(input.cursor(), 0);

    let input = input.word_right();
    assert_eq!(input.cursor(), 3);
    let input = input.word_right();
    assert_eq!(input.cursor(), 7);
    let input = input.word_right().word_right();
    assert_eq!(input.cursor(), 14);
}

#[test]
fn test_set_value_clamps_cursor() {
    let input = new(Options::default()).set_value("hello");
    assert_eq!(input.value(), "hello");
    assert_eq!(input.cursor(), 0);

    let input = with_value("hello world").set_value("hi");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn test_set_value_truncates() {
    let input = new(Options::default().with_max_length(5)).set_value("hello world");
    assert_eq!(input.value(), "hello");
}

#[test]
fn test_clear() {
    let input = with_value("hello").clear();
    assert!(input.is_empty());
    assert_eq!(input.cursor(), 0);
}

#[test]
fn test_focus_and_blur() {
    let input = new(Options::default()).blur();
    assert!(!input.focused());
    assert!(input.focus().focused());
}

#[test]
fn test_transitions_leave_original_untouched() {
    let original = with_value("abc");
    let edited = original.clone().backspace().insert('x');
    assert_eq!(original.value(), "abc");
    assert_eq!(edited.value(), "abx");
}

#[test]
fn test_view_focused_shows_cursor() {
    assert_eq!(with_value("abc").view(), "> abc█");
    assert_eq!(with_value("abc").set_cursor(1).view(), "> a█bc");
}

#[test]
fn test_view_blurred_hides_cursor() {
    assert_eq!(with_value("abc").blur().view(), "> abc");
}

#[test]
fn test_view_placeholder_only_when_blurred() {
    let input = new(Options::default().with_placeholder("Type here"));
    assert_eq!(input.view(), "> █");
    assert_eq!(input.blur().view(), "> Type here");
}

#[test]
fn test_view_placeholder_fits_width() {
    let input = new(
        Options::default()
            .with_placeholder("Search")
            .with_width(10)
            .with_focused(false),
    );
    assert_eq!(input.view(), "> Search    ");

    let narrow = new(
        Options::default()
            .with_placeholder("Search")
            .with_width(3)
            .with_focused(false),
    );
    assert_eq!(narrow.view(), "> Sea");
}

#[test]
fn test_view_mask() {
    let input = new(Options::default().with_mask("*").with_value("secret"));
    assert_eq!(input.view(), "> ******█");
    assert_eq!(input.value(), "secret");
}

#[test]
fn test_view_multi_char_mask_respects_width() {
    let input = new(
        Options::default()
            .with_prompt("")
            .with_mask("**")
            .with_value("abcd")
            .with_width(5),
    );
    assert_eq!(input.view(), "****█");

    let input = input.cursor_start();
    assert_eq!(input.view(), "█****");

    let short = new(
        Options::default()
            .with_prompt("")
            .with_mask("**")
            .with_value("a")
            .with_width(5),
    );
    assert_eq!(short.view(), "**█  ");
}

#[test]
fn test_view_pads_to_width() {
    let input = new(Options::default().with_value("ab").with_width(5));
    assert_eq!(input.view(), "> ab█  ");
}

#[test]
fn test_view_windows_around_cursor() {
    let input = new(Options::default().with_value("abcdefgh").with_width(4));
    assert_eq!(input.view(), "> fgh█");

    let input = input.cursor_start();
    assert_eq!(input.view(), "> █abc");

    let input = input.set_cursor(5);
    assert_eq!(input.view(), "> cde█");
}

#[test]
fn test_view_windows_when_blurred() {
    let input = new(
        Options::default()
            .with_value("abcdefgh")
            .with_width(4)
            .with_focused(false),
    );
    assert_eq!(input.view(), "> efgh");
}

#[test]
fn test_view_char_count() {
    let limited = new(
        Options::default()
            .with_value("abc")
            .with_max_length(10)
            .with_char_count(true)
            .with_focused(false),
    );
    assert_eq!(limited.view(), "> abc 3/10");

    let unlimited = new(
        Options::default()
            .with_value("abc")
            .with_char_count(true)
            .with_focused(false),
    );
    assert_eq!(unlimited.view(), "> abc 3");
}

#[test]
fn test_view_custom_prompt_and_cursor() {
    let input = new(
        Options::default()
            .with_prompt("$ ")
            .with_cursor_char("_")
            .with_value("ls"),
    );
    assert_eq!(input.view(), "$ ls_");
}
