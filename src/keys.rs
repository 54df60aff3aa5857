// Keyboard code/name lookup table
//
// Codes follow the W3C UI Events `code` values ("KeyA", "ArrowUp", ...).
// Every code has one or more lowercase aliases, canonical alias first.
// Lookups by name are case-insensitive.

use crate::error::InputError;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Non-generated key entries. Letters, digits, numpad digits, and function
/// keys are generated in `build_table`.
const SPECIAL_KEYS: &[(&str, &[&str])] = &[
    ("Semicolon", &[";"]),
    ("Equal", &["="]),
    ("Comma", &[","]),
    ("Minus", &["-"]),
    ("Period", &["."]),
    ("Slash", &["/"]),
    ("Backquote", &["`"]),
    ("BracketLeft", &["["]),
    ("BracketRight", &["]"]),
    ("Backslash", &["\\"]),
    ("Quote", &["'"]),
    ("Escape", &["escape", "esc"]),
    ("Tab", &["tab"]),
    ("Backspace", &["backspace"]),
    ("Enter", &["enter", "return"]),
    ("ShiftLeft", &["left shift", "shift", "⇧"]),
    ("ShiftRight", &["right shift", "shift", "⇧"]),
    (
        "ControlLeft",
        &["left control", "left ctrl", "left ctl", "control", "ctrl", "ctl"],
    ),
    (
        "ControlRight",
        &["right control", "right ctrl", "right ctl", "control", "ctrl", "ctl"],
    ),
    ("AltLeft", &["left alt", "left option", "alt", "option", "⌥"]),
    ("AltRight", &["right alt", "right option", "alt", "option", "⌥"]),
    ("CapsLock", &["caps lock", "capslock", "capslk", "caps"]),
    ("Space", &["spacebar", "space", "spc"]),
    ("PrintScreen", &["print screen", "prntscr", "prtsc"]),
    ("ScrollLock", &["scroll lock", "scrlk"]),
    ("Pause", &["pause", "break", "pause/break"]),
    ("Insert", &["insert", "ins"]),
    ("Delete", &["delete", "del"]),
    ("Home", &["home"]),
    ("End", &["end"]),
    ("PageUp", &["page up", "pgup"]),
    ("PageDown", &["page down", "pgdn"]),
    ("ArrowUp", &["up"]),
    ("ArrowDown", &["down"]),
    ("ArrowLeft", &["left"]),
    ("ArrowRight", &["right"]),
    ("NumLock", &["num lock"]),
    ("NumpadMultiply", &["numpad *", "num *"]),
    ("NumpadAdd", &["numpad +", "num +"]),
    ("NumpadSubtract", &["numpad -", "num -"]),
    ("NumpadDecimal", &["numpad .", "num ."]),
    ("NumpadDivide", &["numpad /", "num /"]),
    (
        "NumpadEnter",
        &["numpad enter", "numpad return", "num enter", "num return"],
    ),
    (
        "MetaLeft",
        &["os left", "command", "cmd", "⌘", "windows", "left command", "left cmd"],
    ),
    (
        "MetaRight",
        &["os right", "command", "cmd", "⌘", "windows", "right command", "right cmd"],
    ),
    (
        "OSLeft",
        &["os left", "command", "cmd", "⌘", "windows", "left command", "left cmd"],
    ),
    (
        "OSRight",
        &["os right", "command", "cmd", "⌘", "windows", "right command", "right cmd"],
    ),
    ("ContextMenu", &["context menu", "menu"]),
];

struct KeyTable {
    code_to_names: HashMap<&'static str, &'static [&'static str]>,
    name_to_codes: HashMap<String, Vec<&'static str>>,
}

fn table() -> &'static KeyTable {
    static TABLE: OnceLock<KeyTable> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

/// Interns a generated table entry. The table is built once and lives
/// for the whole process.
fn leak(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

fn build_table() -> KeyTable {
    let mut entries: Vec<(&'static str, Vec<&'static str>)> = SPECIAL_KEYS
        .iter()
        .map(|(code, names)| (*code, names.to_vec()))
        .collect();

    for letter in 'a'..='z' {
        entries.push((
            leak(format!("Key{}", letter.to_ascii_uppercase())),
            vec![leak(letter.to_string())],
        ));
    }
    for digit in 0..=9 {
        entries.push((leak(format!("Digit{digit}")), vec![leak(digit.to_string())]));
    }
    for digit in 0..=9 {
        entries.push((
            leak(format!("Numpad{digit}")),
            vec![leak(format!("numpad {digit}")), leak(format!("num {digit}"))],
        ));
    }
    for n in 1..=24 {
        entries.push((leak(format!("F{n}")), vec![leak(format!("f{n}"))]));
    }

    let mut code_to_names = HashMap::with_capacity(entries.len());
    let mut name_to_codes: HashMap<String, Vec<&'static str>> = HashMap::new();
    for (code, names) in entries {
        let names: &'static [&'static str] = Box::leak(names.into_boxed_slice());
        for name in names {
            name_to_codes
                .entry((*name).to_string())
                .or_default()
                .push(code);
        }
        code_to_names.insert(code, names);
    }

    KeyTable {
        code_to_names,
        name_to_codes,
    }
}

/// Returns true if `name` resolves to at least one key code.
pub fn is_key_name(name: &str) -> bool {
    table().name_to_codes.contains_key(&name.to_lowercase())
}

/// Returns the aliases for a key code, canonical alias first.
/// Empty for unknown codes.
pub fn names_for_code(code: &str) -> &'static [&'static str] {
    table().code_to_names.get(code).copied().unwrap_or(&[])
}

/// Resolves each name to its key codes and flattens the result.
/// Ambiguous names (e.g. "shift") contribute every matching code.
pub fn codes_for<'a, I>(names: I) -> Result<Vec<String>, InputError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut codes = Vec::new();
    for name in names {
        match table().name_to_codes.get(&name.to_lowercase()) {
            Some(found) => codes.extend(found.iter().map(|c| (*c).to_string())),
            None => return Err(InputError::UnknownKey(name.to_string())),
        }
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_codes() {
        assert_eq!(codes_for(["a"]).unwrap(), vec!["KeyA"]);
        assert_eq!(codes_for(["z"]).unwrap(), vec!["KeyZ"]);
    }

    #[test]
    fn test_digit_and_numpad_codes() {
        assert_eq!(codes_for(["7"]).unwrap(), vec!["Digit7"]);
        assert_eq!(codes_for(["numpad 7"]).unwrap(), vec!["Numpad7"]);
        assert_eq!(codes_for(["num 7"]).unwrap(), vec!["Numpad7"]);
    }

    #[test]
    fn test_function_key_codes() {
        assert_eq!(codes_for(["f1"]).unwrap(), vec!["F1"]);
        assert_eq!(codes_for(["f24"]).unwrap(), vec!["F24"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(codes_for(["SPACE"]).unwrap(), vec!["Space"]);
        assert!(is_key_name("Escape"));
        assert!(is_key_name("ESC"));
    }

    #[test]
    fn test_ambiguous_alias_resolves_to_all_codes() {
        let codes = codes_for(["shift"]).unwrap();
        assert!(codes.contains(&"ShiftLeft".to_string()));
        assert!(codes.contains(&"ShiftRight".to_string()));
    }

    #[test]
    fn test_multiple_names_flatten() {
        let codes = codes_for(["w", "up"]).unwrap();
        assert_eq!(codes, vec!["KeyW", "ArrowUp"]);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        assert_eq!(
            codes_for(["notakey"]),
            Err(InputError::UnknownKey("notakey".to_string()))
        );
    }

    #[test]
    fn test_names_canonical_first() {
        assert_eq!(names_for_code("Escape")[0], "escape");
        assert_eq!(names_for_code("Space")[0], "spacebar");
        assert_eq!(names_for_code("ArrowUp")[0], "up");
    }

    #[test]
    fn test_names_for_code_full_alias_list() {
        assert_eq!(names_for_code("Enter"), &["enter", "return"]);
        assert_eq!(names_for_code("KeyA"), &["a"]);
    }

    #[test]
    fn test_unknown_code_has_no_names() {
        assert!(names_for_code("Zorp").is_empty());
    }

    #[test]
    fn test_brackets_have_distinct_codes() {
        assert_eq!(codes_for(["["]).unwrap(), vec!["BracketLeft"]);
        assert_eq!(codes_for(["]"]).unwrap(), vec!["BracketRight"]);
    }
}
