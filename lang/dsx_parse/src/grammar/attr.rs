//! The attribute-name recognizer: `data-<plugin>[__mod][:key[__mod]]`.
//!
//! Attribute names are not expressions and never reach the expression
//! lexer; this is a byte scanner over the raw name. The plugin vocabulary
//! is closed and matched longest-first, so `data-on-intersect` is the
//! `on-intersect` plugin rather than `on` plus trailing junk.
//!
//! Keys are the subtle part. A key takes `[a-zA-Z0-9-]` and must not
//! contain `_`: a double underscore ends the key and starts its modifier,
//! while a single underscore anywhere in key position fails the whole
//! name, so `data-on:cli_ck` is an error rather than a key `cli` with
//! leftovers.

use dsx_ir::{Attribute, AttributeDetail, Modifier, Plugin, Span, StringInterner};

use crate::error::{ErrorContext, ParseError, ParseErrorKind};

const PREFIX: &str = "data-";

fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

fn is_modifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// All recognizer failures are unexpected-token errors in attribute-name
/// context.
fn unexpected(found: &'static str, expected: &'static str, span: Span) -> ParseError {
    ParseError::new(ParseErrorKind::UnexpectedToken { found, expected }, span)
        .with_context(ErrorContext::AttributeName)
}

/// Recognizes a whole attribute name.
pub(crate) fn parse_attribute_name(
    source: &str,
    interner: &StringInterner,
) -> Result<Attribute, ParseError> {
    let Some(rest) = source.strip_prefix(PREFIX) else {
        return Err(unexpected(
            "a different prefix",
            "the `data-` prefix",
            Span::from_range(0..source.len().min(PREFIX.len())),
        ));
    };
    let Some(plugin) = match_plugin(rest) else {
        let run = rest
            .bytes()
            .take_while(|b| b.is_ascii_lowercase() || *b == b'-')
            .count();
        let (found, len) = if rest.is_empty() {
            ("end of input", 0)
        } else {
            ("an unknown name", run.clamp(1, rest.len()))
        };
        return Err(unexpected(
            found,
            "a plugin name",
            Span::from_range(PREFIX.len()..PREFIX.len() + len),
        ));
    };

    let plugin_end = PREFIX.len() + plugin.as_str().len();
    let suffix = &rest[plugin.as_str().len()..];
    let detail = if suffix.is_empty() {
        AttributeDetail::Plain
    } else if let Some(modifier_text) = suffix.strip_prefix("__") {
        AttributeDetail::Modified(scan_modifier(modifier_text, plugin_end + 2, interner)?)
    } else if suffix.starts_with('_') {
        return Err(unexpected(
            "a single `_`",
            "`__`",
            Span::from_range(plugin_end..plugin_end + 1),
        ));
    } else if let Some(key_text) = suffix.strip_prefix(':') {
        scan_key(key_text, plugin_end + 1, interner)?
    } else {
        return Err(unexpected(
            "trailing characters",
            "`__`, `:`, or end of input",
            Span::from_range(plugin_end..source.len()),
        ));
    };

    Ok(Attribute {
        plugin,
        detail,
        span: Span::from_range(0..source.len()),
    })
}

/// Longest plugin whose spelling starts the remaining text. Several names
/// are prefixes of longer ones (`on` of `on-intersect`, `ignore` of
/// `ignore-morph`); longest-match picks the right one.
fn match_plugin(rest: &str) -> Option<Plugin> {
    let mut best: Option<Plugin> = None;
    for plugin in Plugin::ALL {
        if !rest.starts_with(plugin.as_str()) {
            continue;
        }
        let better = match best {
            Some(current) => plugin.as_str().len() > current.as_str().len(),
            None => true,
        };
        if better {
            best = Some(plugin);
        }
    }
    best
}

/// Scans `<key>[__modifier]` after the `:`.
fn scan_key(
    text: &str,
    offset: usize,
    interner: &StringInterner,
) -> Result<AttributeDetail, ParseError> {
    let bytes = text.as_bytes();
    let mut len = 0;
    while len < bytes.len() {
        if !is_key_byte(bytes[len]) {
            break;
        }
        len += 1;
        if bytes.get(len) == Some(&b'_') {
            if bytes.get(len + 1) == Some(&b'_') {
                // The key ends here; `__modifier` follows.
                break;
            }
            return Err(unexpected(
                "a single `_`",
                "`__`",
                Span::from_range(offset + len..offset + len + 1),
            ));
        }
    }
    if len == 0 {
        let (found, end) = if text.is_empty() {
            ("end of input", 0)
        } else {
            ("an invalid key character", 1)
        };
        return Err(unexpected(
            found,
            "a plugin key",
            Span::from_range(offset..offset + end),
        ));
    }

    let key = interner.intern(&text[..len]);
    let remainder = &text[len..];
    if remainder.is_empty() {
        return Ok(AttributeDetail::Keyed {
            key,
            modifier: None,
        });
    }
    if let Some(modifier_text) = remainder.strip_prefix("__") {
        let modifier = scan_modifier(modifier_text, offset + len + 2, interner)?;
        return Ok(AttributeDetail::Keyed {
            key,
            modifier: Some(modifier),
        });
    }
    Err(unexpected(
        "trailing characters",
        "`__` or end of input",
        Span::from_range(offset + len..offset + text.len()),
    ))
}

/// Scans `name[.arg]` after a `__`. Nothing may follow the modifier.
fn scan_modifier(
    text: &str,
    offset: usize,
    interner: &StringInterner,
) -> Result<Modifier, ParseError> {
    let name_len = text.bytes().take_while(|b| is_modifier_byte(*b)).count();
    if name_len == 0 {
        let (found, end) = if text.is_empty() {
            ("end of input", 0)
        } else {
            ("an invalid modifier character", 1)
        };
        return Err(unexpected(
            found,
            "a modifier name",
            Span::from_range(offset..offset + end),
        ));
    }
    let name = interner.intern(&text[..name_len]);

    let mut end = name_len;
    let mut arg = None;
    if text[name_len..].starts_with('.') {
        let arg_start = name_len + 1;
        let arg_len = text[arg_start..]
            .bytes()
            .take_while(|b| is_modifier_byte(*b))
            .count();
        if arg_len == 0 {
            let (found, err_end) = if arg_start == text.len() {
                ("end of input", arg_start)
            } else {
                ("an invalid modifier character", arg_start + 1)
            };
            return Err(unexpected(
                found,
                "a modifier argument",
                Span::from_range(offset + arg_start..offset + err_end),
            ));
        }
        arg = Some(interner.intern(&text[arg_start..arg_start + arg_len]));
        end = arg_start + arg_len;
    }

    if end != text.len() {
        return Err(unexpected(
            "trailing characters",
            "end of the attribute name",
            Span::from_range(offset + end..offset + text.len()),
        ));
    }

    Ok(Modifier {
        name,
        arg,
        span: Span::from_range(offset..offset + end),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn recognize(source: &str) -> Result<Attribute, ParseError> {
        let interner = StringInterner::new();
        parse_attribute_name(source, &interner)
    }

    fn recognize_with(source: &str, interner: &StringInterner) -> Attribute {
        match parse_attribute_name(source, interner) {
            Ok(attribute) => attribute,
            Err(error) => panic!("`{source}` must parse, got {error}"),
        }
    }

    #[test]
    fn bare_plugin() {
        let Ok(attribute) = recognize("data-show") else {
            panic!("`data-show` must parse");
        };
        assert_eq!(attribute.plugin, Plugin::Show);
        assert_eq!(attribute.detail, AttributeDetail::Plain);
        assert_eq!(attribute.span, Span::new(0, 9));
    }

    #[test]
    fn keyed_plugin() {
        let interner = StringInterner::new();
        let attribute = recognize_with("data-on:click", &interner);
        assert_eq!(attribute.plugin, Plugin::On);
        let AttributeDetail::Keyed { key, modifier } = attribute.detail else {
            panic!("expected a keyed detail, got {:?}", attribute.detail);
        };
        assert_eq!(interner.lookup(key), "click");
        assert_eq!(modifier, None);
    }

    #[test]
    fn keyed_plugin_with_modifier_and_argument() {
        let interner = StringInterner::new();
        let attribute = recognize_with("data-on:click__debounce.500ms", &interner);
        assert_eq!(attribute.plugin, Plugin::On);
        let AttributeDetail::Keyed {
            key,
            modifier: Some(modifier),
        } = attribute.detail
        else {
            panic!("expected a keyed+modified detail, got {:?}", attribute.detail);
        };
        assert_eq!(interner.lookup(key), "click");
        assert_eq!(interner.lookup(modifier.name), "debounce");
        let Some(arg) = modifier.arg else {
            panic!("modifier must carry its argument");
        };
        assert_eq!(interner.lookup(arg), "500ms");
        // `debounce.500ms` sits after `data-on:click__`.
        assert_eq!(modifier.span, Span::new(15, 29));
    }

    #[test]
    fn plugin_level_modifier() {
        let interner = StringInterner::new();
        let attribute = recognize_with("data-signals__ifmissing", &interner);
        assert_eq!(attribute.plugin, Plugin::Signals);
        let AttributeDetail::Modified(modifier) = attribute.detail else {
            panic!("expected a modified detail, got {:?}", attribute.detail);
        };
        assert_eq!(interner.lookup(modifier.name), "ifmissing");
        assert_eq!(modifier.arg, None);
    }

    #[test]
    fn longest_plugin_name_wins() {
        let Ok(attribute) = recognize("data-on-signal-patch-filter") else {
            panic!("`data-on-signal-patch-filter` must parse");
        };
        assert_eq!(attribute.plugin, Plugin::OnSignalPatchFilter);
        assert_eq!(attribute.detail, AttributeDetail::Plain);

        let Ok(attribute) = recognize("data-ignore-morph") else {
            panic!("`data-ignore-morph` must parse");
        };
        assert_eq!(attribute.plugin, Plugin::IgnoreMorph);

        let Ok(attribute) = recognize("data-on-intersect__once") else {
            panic!("`data-on-intersect__once` must parse");
        };
        assert_eq!(attribute.plugin, Plugin::OnIntersect);
    }

    #[test]
    fn pro_plugins_recognized() {
        let Ok(attribute) = recognize("data-scroll-into-view__smooth") else {
            panic!("`data-scroll-into-view__smooth` must parse");
        };
        assert_eq!(attribute.plugin, Plugin::ScrollIntoView);
        assert!(attribute.plugin.is_pro());
    }

    #[test]
    fn missing_prefix_is_rejected() {
        let Err(error) = recognize("onclick") else {
            panic!("`onclick` must not parse");
        };
        assert_eq!(
            error.kind,
            ParseErrorKind::UnexpectedToken {
                found: "a different prefix",
                expected: "the `data-` prefix",
            }
        );
        assert_eq!(error.context, Some(ErrorContext::AttributeName));
    }

    #[test]
    fn unknown_plugin_is_rejected() {
        let Err(error) = recognize("data-foo") else {
            panic!("`data-foo` must not parse");
        };
        assert_eq!(
            error.kind,
            ParseErrorKind::UnexpectedToken {
                found: "an unknown name",
                expected: "a plugin name",
            }
        );
        assert_eq!(error.span, Span::new(5, 8));
    }

    #[test]
    fn junk_after_plugin_is_rejected() {
        // `on` matches, but `e` can only be junk: no plugin is spelled `one`.
        let Err(error) = recognize("data-one") else {
            panic!("`data-one` must not parse");
        };
        assert_eq!(
            error.kind,
            ParseErrorKind::UnexpectedToken {
                found: "trailing characters",
                expected: "`__`, `:`, or end of input",
            }
        );
        assert_eq!(error.span, Span::new(7, 8));
    }

    #[test]
    fn single_underscore_after_plugin_is_rejected() {
        let Err(error) = recognize("data-on_click") else {
            panic!("`data-on_click` must not parse");
        };
        assert_eq!(
            error.kind,
            ParseErrorKind::UnexpectedToken {
                found: "a single `_`",
                expected: "`__`",
            }
        );
        assert_eq!(error.span, Span::new(7, 8));
    }

    #[test]
    fn empty_key_is_rejected() {
        let Err(error) = recognize("data-on:") else {
            panic!("`data-on:` must not parse");
        };
        assert_eq!(
            error.kind,
            ParseErrorKind::UnexpectedToken {
                found: "end of input",
                expected: "a plugin key",
            }
        );
    }

    #[test]
    fn single_underscore_inside_key_is_rejected() {
        let Err(error) = recognize("data-on:cli_ck") else {
            panic!("`data-on:cli_ck` must not parse");
        };
        assert_eq!(
            error.kind,
            ParseErrorKind::UnexpectedToken {
                found: "a single `_`",
                expected: "`__`",
            }
        );
        // The underscore after `data-on:cli`.
        assert_eq!(error.span, Span::new(11, 12));
    }

    #[test]
    fn key_ends_at_double_underscore() {
        let interner = StringInterner::new();
        let attribute = recognize_with("data-class:hidden__ifmissing", &interner);
        let AttributeDetail::Keyed {
            key,
            modifier: Some(modifier),
        } = attribute.detail
        else {
            panic!("expected a keyed+modified detail, got {:?}", attribute.detail);
        };
        assert_eq!(interner.lookup(key), "hidden");
        assert_eq!(interner.lookup(modifier.name), "ifmissing");
    }

    #[test]
    fn modifier_names_may_contain_underscores() {
        let interner = StringInterner::new();
        let attribute = recognize_with("data-on:submit__prevent_default", &interner);
        let AttributeDetail::Keyed {
            modifier: Some(modifier),
            ..
        } = attribute.detail
        else {
            panic!("expected a modifier, got {:?}", attribute.detail);
        };
        assert_eq!(interner.lookup(modifier.name), "prevent_default");
    }

    #[test]
    fn empty_modifier_name_is_rejected() {
        let Err(error) = recognize("data-on:click__") else {
            panic!("`data-on:click__` must not parse");
        };
        assert_eq!(
            error.kind,
            ParseErrorKind::UnexpectedToken {
                found: "end of input",
                expected: "a modifier name",
            }
        );
    }

    #[test]
    fn dangling_modifier_dot_is_rejected() {
        let Err(error) = recognize("data-on__delay.") else {
            panic!("`data-on__delay.` must not parse");
        };
        assert_eq!(
            error.kind,
            ParseErrorKind::UnexpectedToken {
                found: "end of input",
                expected: "a modifier argument",
            }
        );
    }

    #[test]
    fn second_modifier_dot_is_rejected() {
        let Err(error) = recognize("data-on__delay.500ms.extra") else {
            panic!("`data-on__delay.500ms.extra` must not parse");
        };
        assert_eq!(
            error.kind,
            ParseErrorKind::UnexpectedToken {
                found: "trailing characters",
                expected: "end of the attribute name",
            }
        );
    }

    #[test]
    fn keys_take_digits_and_hyphens() {
        let interner = StringInterner::new();
        let attribute = recognize_with("data-attr:aria-level2", &interner);
        assert_eq!(attribute.plugin, Plugin::Attr);
        let AttributeDetail::Keyed { key, .. } = attribute.detail else {
            panic!("expected a keyed detail, got {:?}", attribute.detail);
        };
        assert_eq!(interner.lookup(key), "aria-level2");
    }
}
