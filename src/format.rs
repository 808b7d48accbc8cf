//! Readable signatures for type nodes

use std::fmt;

use crate::idl::TypeNode;

/// Format a type node as a readable, recursive signature.
///
/// Total over every variant: `Number { u64, le }` is `u64 (le)`,
/// `Array { PublicKey, 32 }` is `Array<PublicKey, 32>`, and an empty
/// node is the empty string.
pub fn format_type(ty: &TypeNode) -> String {
    match ty {
        TypeNode::Primitive(name) => name.clone(),
        TypeNode::PublicKey => "PublicKey".to_string(),
        TypeNode::Number { format, endian } => match endian {
            Some(endian) => format!("{} ({})", format, endian),
            None => format.clone(),
        },
        TypeNode::String { encoding } => format!("String ({})", encoding),
        TypeNode::DefinedTypeLink { name } => name.clone(),
        TypeNode::SizePrefixed(inner) => format!("SizePrefixed<{}>", format_type(inner)),
        TypeNode::Array { element, length } => {
            format!("Array<{}, {}>", format_type(element), length)
        }
        TypeNode::Vec(inner) => format!("Vec<{}>", format_type(inner)),
        TypeNode::Option(inner) => format!("Option<{}>", format_type(inner)),
        TypeNode::Struct { .. } => "struct".to_string(),
        TypeNode::Enum { .. } => "enum".to_string(),
        TypeNode::Unknown(kind) => kind.clone(),
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_type(self))
    }
}

/// Format discriminator bytes as hex
pub fn format_discriminator(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        "(none)".to_string()
    } else {
        let hex: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        format!("[{}]", hex.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idl::{ArrayLength, Field};

    fn boxed(node: TypeNode) -> Box<TypeNode> {
        Box::new(node)
    }

    #[test]
    fn test_number_with_and_without_endian() {
        let le = TypeNode::Number {
            format: "u64".into(),
            endian: Some("le".into()),
        };
        let bare = TypeNode::Number {
            format: "u64".into(),
            endian: None,
        };
        assert_eq!(format_type(&le), "u64 (le)");
        assert_eq!(format_type(&bare), "u64");
    }

    #[test]
    fn test_array_of_public_keys() {
        let node = TypeNode::Array {
            element: boxed(TypeNode::PublicKey),
            length: ArrayLength::Fixed(32),
        };
        assert_eq!(format_type(&node), "Array<PublicKey, 32>");
    }

    #[test]
    fn test_size_prefixed_string() {
        let node = TypeNode::SizePrefixed(boxed(TypeNode::String {
            encoding: "utf8".into(),
        }));
        assert_eq!(format_type(&node), "SizePrefixed<String (utf8)>");
    }

    #[test]
    fn test_placeholders_render_empty() {
        assert_eq!(format_type(&TypeNode::empty()), "");
        assert_eq!(
            format_type(&TypeNode::SizePrefixed(boxed(TypeNode::empty()))),
            "SizePrefixed<>"
        );
        assert_eq!(
            format_type(&TypeNode::Array {
                element: boxed(TypeNode::empty()),
                length: ArrayLength::Named(String::new()),
            }),
            "Array<, >"
        );
        assert_eq!(
            format_type(&TypeNode::DefinedTypeLink {
                name: String::new()
            }),
            ""
        );
    }

    #[test]
    fn test_every_variant_formats() {
        let nodes = vec![
            (TypeNode::Primitive("bool".into()), "bool"),
            (TypeNode::PublicKey, "PublicKey"),
            (
                TypeNode::DefinedTypeLink {
                    name: "Config".into(),
                },
                "Config",
            ),
            (
                TypeNode::Struct {
                    fields: vec![Field {
                        name: "x".into(),
                        ty: TypeNode::Primitive("u8".into()),
                        docs: None,
                    }],
                },
                "struct",
            ),
            (
                TypeNode::Enum {
                    variants: vec!["On".into(), "Off".into()],
                },
                "enum",
            ),
            (TypeNode::Unknown("mapTypeNode".into()), "mapTypeNode"),
            (
                TypeNode::Vec(boxed(TypeNode::Option(boxed(TypeNode::Primitive(
                    "u16".into(),
                ))))),
                "Vec<Option<u16>>",
            ),
        ];

        for (node, expected) in nodes {
            assert_eq!(format_type(&node), expected);
            assert_eq!(node.to_string(), expected);
        }
    }

    #[test]
    fn test_deeply_nested() {
        let mut node = TypeNode::PublicKey;
        for _ in 0..3 {
            node = TypeNode::SizePrefixed(boxed(node));
        }
        node = TypeNode::Array {
            element: boxed(node),
            length: ArrayLength::Named("N".into()),
        };
        assert_eq!(
            format_type(&node),
            "Array<SizePrefixed<SizePrefixed<SizePrefixed<PublicKey>>>, N>"
        );
    }

    #[test]
    fn test_format_discriminator() {
        assert_eq!(format_discriminator(&[]), "(none)");
        assert_eq!(format_discriminator(&[0xaf, 0x0a, 0x01]), "[af 0a 01]");
    }
}
