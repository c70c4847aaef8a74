//! Message translation
//!
//! Every error message passes through a [`Translator`] before the error
//! is built. The default [`Passthrough`] only fills in placeholders.

use std::fmt::{Display, Write};

/// Translates a format string and substitutes its placeholders
pub trait Translator {
    fn translate(&self, format: &str, args: &[&dyn Display]) -> String;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, format: &str, args: &[&dyn Display]) -> String {
        (**self).translate(format, args)
    }
}

/// Identity translation: placeholders are substituted, text is untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passthrough;

impl Translator for Passthrough {
    fn translate(&self, format: &str, args: &[&dyn Display]) -> String {
        format_message(format, args)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Directive {
    Percent,
    Next,
    Position(usize),
}

/// Substitute sprintf-style placeholders
///
/// `%s` and `%d` take the next argument, `%N$s` the N-th (1-based),
/// and `%%` is a literal percent sign. Unrecognized directives are
/// copied as is; missing arguments render as nothing.
pub fn format_message(format: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;
    let mut next = 0;

    while let Some(at) = rest.find('%') {
        out.push_str(&rest[..at]);
        let tail = &rest[at + 1..];
        match parse_directive(tail) {
            Some((directive, consumed)) => {
                let index = match directive {
                    Directive::Percent => {
                        out.push('%');
                        None
                    }
                    Directive::Next => {
                        next += 1;
                        Some(next - 1)
                    }
                    Directive::Position(position) => Some(position - 1),
                };
                if let Some(arg) = index.and_then(|i| args.get(i)) {
                    let _ = write!(out, "{}", arg);
                }
                rest = &tail[consumed..];
            }
            None => {
                out.push('%');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse the directive following a `%`, returning it and its byte length
fn parse_directive(tail: &str) -> Option<(Directive, usize)> {
    let bytes = tail.as_bytes();
    match *bytes.first()? {
        b'%' => Some((Directive::Percent, 1)),
        b's' | b'd' => Some((Directive::Next, 1)),
        b'1'..=b'9' => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            match bytes.get(digits..digits + 2)? {
                [b'$', b's' | b'd'] => {
                    let position = tail[..digits].parse().ok()?;
                    Some((Directive::Position(position), digits + 2))
                }
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(format_message("Not a number", &[]), "Not a number");
    }

    #[test]
    fn test_sequential_placeholders() {
        let msg = format_message("%s is not %s", &[&"abc", &"numeric"]);
        assert_eq!(msg, "abc is not numeric");
    }

    #[test]
    fn test_positional_placeholders() {
        let msg = format_message("%2$s before %1$s", &[&"first", &"second"]);
        assert_eq!(msg, "second before first");
    }

    #[test]
    fn test_percent_escape_and_unknown_directive() {
        assert_eq!(format_message("100%% sure", &[]), "100% sure");
        assert_eq!(format_message("50%x off", &[]), "50%x off");
        assert_eq!(format_message("trailing %", &[]), "trailing %");
        assert_eq!(format_message("%1$x", &[&1]), "%1$x");
    }

    #[test]
    fn test_missing_argument_renders_empty() {
        assert_eq!(format_message("value: %s", &[]), "value: ");
        assert_eq!(format_message("value: %3$s", &[&1]), "value: ");
    }

    #[test]
    fn test_passthrough_translator() {
        let translator = Passthrough;
        assert_eq!(translator.translate("%d items", &[&3]), "3 items");

        fn render<T: Translator>(translator: T) -> String {
            translator.translate("plain %s", &[&"text"])
        }
        assert_eq!(render(&translator), "plain text");
    }
}
