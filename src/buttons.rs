// Mouse button code/name lookup table
//
// Codes match the DOM convention: 0 = left/primary, 1 = middle,
// 2 = right/secondary, 3..14 = auxiliary buttons 4-15. Aliases are
// lowercase, canonical alias first; lookups by name are case-insensitive.

use crate::error::InputError;

const BUTTONS: &[(u8, &[&str])] = &[
    (0, &["button1", "left"]),
    (1, &["button2", "middle"]),
    (2, &["button3", "right"]),
    (3, &["button4"]),
    (4, &["button5"]),
    (5, &["button6"]),
    (6, &["button7"]),
    (7, &["button8"]),
    (8, &["button9"]),
    (9, &["button10"]),
    (10, &["button11"]),
    (11, &["button12"]),
    (12, &["button13"]),
    (13, &["button14"]),
    (14, &["button15"]),
];

/// Returns true if `name` resolves to at least one button code.
pub fn is_button_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    BUTTONS
        .iter()
        .any(|(_, aliases)| aliases.contains(&lower.as_str()))
}

/// Returns the aliases for a button code, canonical alias first.
/// Empty for unknown codes.
pub fn names_for_code(code: u8) -> &'static [&'static str] {
    BUTTONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, names)| *names)
        .unwrap_or(&[])
}

/// Resolves each name to its button codes and flattens the result.
pub fn codes_for<'a, I>(names: I) -> Result<Vec<u8>, InputError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut codes = Vec::new();
    for name in names {
        let lower = name.to_lowercase();
        let mut found = false;
        for (code, aliases) in BUTTONS {
            if aliases.contains(&lower.as_str()) {
                codes.push(*code);
                found = true;
            }
        }
        if !found {
            return Err(InputError::UnknownButton(name.to_string()));
        }
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button_aliases() {
        assert_eq!(codes_for(["left"]).unwrap(), vec![0]);
        assert_eq!(codes_for(["button1"]).unwrap(), vec![0]);
        assert_eq!(codes_for(["middle"]).unwrap(), vec![1]);
        assert_eq!(codes_for(["right"]).unwrap(), vec![2]);
    }

    #[test]
    fn test_auxiliary_buttons() {
        assert_eq!(codes_for(["button4"]).unwrap(), vec![3]);
        assert_eq!(codes_for(["button15"]).unwrap(), vec![14]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(codes_for(["LEFT"]).unwrap(), vec![0]);
        assert!(is_button_name("Button3"));
    }

    #[test]
    fn test_unknown_button_is_an_error() {
        assert_eq!(
            codes_for(["button16"]),
            Err(InputError::UnknownButton("button16".to_string()))
        );
    }

    #[test]
    fn test_names_canonical_first() {
        assert_eq!(names_for_code(0)[0], "button1");
        assert_eq!(names_for_code(2), &["button3", "right"]);
    }

    #[test]
    fn test_unknown_code_has_no_names() {
        assert!(names_for_code(15).is_empty());
    }
}
