//! Property-block extraction.
//!
//! Matches `propName: Property.Type({ ... })` declarations and delimits
//! each configuration block with an explicit brace-depth counter, so
//! nested object literals (dropdown options and the like) stay inside
//! one property instead of splitting it at the first inner `}`.

use pieceworks_core::Property;
use regex::Regex;

use super::fields::FieldExtractor;

/// Source type token → normalized tag.
pub const PROP_TYPE_MAP: &[(&str, &str)] = &[
    ("Property.ShortText", "SHORT_TEXT"),
    ("Property.LongText", "LONG_TEXT"),
    ("Property.Number", "NUMBER"),
    ("Property.Checkbox", "CHECKBOX"),
    ("Property.StaticDropdown", "STATIC_DROPDOWN"),
    ("Property.Dropdown", "DROPDOWN"),
    ("Property.DateTime", "DATE_TIME"),
    ("Property.Array", "ARRAY"),
    ("Property.File", "FILE"),
    ("Property.Json", "JSON"),
    ("Property.Object", "OBJECT"),
    ("Property.DynamicProperties", "DYNAMIC"),
    ("Property.MarkDown", "MARKDOWN"),
    ("Property.MultiSelectDropdown", "MULTI_SELECT_DROPDOWN"),
    ("Property.StaticMultiSelectDropdown", "STATIC_MULTI_SELECT_DROPDOWN"),
];

/// Decorative markdown declarations that match the property pattern but
/// are not real parameters.
const DECORATIVE_NAMES: &[&str] = &["info", "markdown", "warning"];

/// Map a source type token to its normalized tag. Unknown tokens pass
/// through with the `Property.` namespace prefix stripped.
pub fn normalize_prop_type(token: &str) -> String {
    for (source, tag) in PROP_TYPE_MAP {
        if *source == token {
            return (*tag).to_string();
        }
    }
    token.strip_prefix("Property.").unwrap_or(token).to_string()
}

/// Pre-compiled property-declaration matcher.
pub struct PropExtractor {
    decl: Option<Regex>,
}

impl Default for PropExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PropExtractor {
    pub fn new() -> Self {
        Self {
            decl: Regex::new(r"(\w+)\s*:\s*(Property\.\w+)\s*\(\s*\{").ok(),
        }
    }

    /// Extract the ordered property sequence from a text block; order
    /// follows first occurrence in the text.
    pub fn extract(&self, text: &str, fields: &FieldExtractor) -> Vec<Property> {
        let Some(decl) = self.decl.as_ref() else {
            return Vec::new();
        };

        let mut props = Vec::new();
        for caps in decl.captures_iter(text) {
            let (Some(whole), Some(name), Some(token)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            let prop_name = name.as_str();
            let type_token = token.as_str();

            if type_token == "Property.MarkDown" && DECORATIVE_NAMES.contains(&prop_name) {
                continue;
            }

            let block = delimit_block(text, whole.end());

            props.push(Property {
                name: prop_name.to_string(),
                display_name: fields
                    .display_name(block)
                    .unwrap_or_else(|| prop_name.to_string()),
                prop_type: normalize_prop_type(type_token),
                required: fields.required(block),
                description: fields.description(block).unwrap_or_default(),
            });
        }
        props
    }
}

/// Delimit the configuration block starting just inside its opening brace:
/// scan forward counting brace nesting depth from 1 until it returns to 0.
fn delimit_block(text: &str, start: usize) -> &str {
    let bytes = text.as_bytes();
    let mut depth = 1u32;
    let mut i = start;
    while i < bytes.len() && depth > 0 {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    &text[start..i]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<Property> {
        PropExtractor::new().extract(text, &FieldExtractor::new())
    }

    #[test]
    fn nested_object_literal_stays_one_property() {
        let text = r#"
            props: {
                channel: Property.StaticDropdown({
                    displayName: 'Channel',
                    required: true,
                    options: { options: [{ label: 'a', value: 'b' }] },
                    description: 'Pick a channel',
                }),
                text: Property.ShortText({
                    displayName: 'Message',
                    required: true,
                }),
            }
        "#;
        let props = extract(text);
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].name, "channel");
        assert_eq!(props[0].prop_type, "STATIC_DROPDOWN");
        assert_eq!(props[0].description, "Pick a channel");
        assert!(props[0].required);
        assert_eq!(props[1].name, "text");
        assert_eq!(props[1].prop_type, "SHORT_TEXT");
    }

    #[test]
    fn order_follows_first_occurrence() {
        let text = r#"
            b: Property.Number({ displayName: 'B' }),
            a: Property.Checkbox({ displayName: 'A' }),
        "#;
        let names: Vec<_> = extract(text).into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn decorative_markdown_is_skipped() {
        let text = r#"
            info: Property.MarkDown({ value: 'read the docs' }),
            note: Property.MarkDown({ displayName: 'Note' }),
        "#;
        let props = extract(text);
        // Only the non-decorative markdown declaration survives.
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].name, "note");
        assert_eq!(props[0].prop_type, "MARKDOWN");
    }

    #[test]
    fn unknown_token_passes_through_prefix_stripped() {
        assert_eq!(normalize_prop_type("Property.Color"), "Color");
        assert_eq!(normalize_prop_type("Property.ShortText"), "SHORT_TEXT");
    }

    #[test]
    fn defaults_apply_when_fields_absent() {
        let props = extract("token: Property.ShortText({}),");
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].display_name, "token");
        assert!(!props[0].required);
        assert_eq!(props[0].description, "");
    }
}
