//! Canonical IDL model
//!
//! Every supported input shape (Anchor legacy, Anchor 0.30+, Codama-style
//! type nodes, `program` envelopes) is reconciled into these types by
//! [`normalize`](super::normalize). A [`Program`] is built once per loaded
//! document and only read afterwards.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Root of a normalized IDL document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    /// Program identity
    pub metadata: ProgramMetadata,

    /// Account layouts, in document order
    pub accounts: Vec<Account>,

    /// Callable instructions, in document order
    pub instructions: Vec<Instruction>,

    /// Named type definitions
    pub types: Vec<TypeDef>,

    /// Error codes
    pub errors: Vec<ErrorType>,

    /// Emitted events
    pub events: Vec<Event>,
}

/// Optional identity metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Program address (base58)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// Named, typed field (struct field, account field, instruction argument)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeNode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<Vec<String>>,
}

/// Account layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Vec<u8>>,

    pub fields: Vec<Field>,
}

/// Instruction definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Vec<u8>>,

    /// Accounts required by this instruction (nested groups are flattened)
    pub accounts: Vec<InstructionAccount>,

    pub args: Vec<Field>,
}

/// Single account in an instruction
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionAccount {
    pub name: String,
    pub is_writable: bool,
    pub is_signer: bool,
    pub is_optional: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<Vec<String>>,
}

/// Named type definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDef {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<Vec<String>>,

    #[serde(rename = "type")]
    pub ty: TypeNode,
}

/// Error code definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorType {
    pub name: String,
    pub code: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<Vec<String>>,
}

/// Event definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Vec<u8>>,

    pub fields: Vec<Field>,
}

/// Recursive description of a data type's encoding
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// Bare type name (`u8`, `bool`, `publicKey`, ...)
    Primitive(String),
    PublicKey,
    Number {
        format: String,
        endian: Option<String>,
    },
    String {
        encoding: String,
    },
    /// Reference to a type defined elsewhere in the program
    DefinedTypeLink {
        name: String,
    },
    SizePrefixed(Box<TypeNode>),
    Array {
        element: Box<TypeNode>,
        length: ArrayLength,
    },
    Struct {
        fields: Vec<Field>,
    },
    Enum {
        variants: Vec<String>,
    },
    /// Anchor `{"vec": T}`
    Vec(Box<TypeNode>),
    /// Anchor `{"option": T}`, Codama `optionTypeNode`
    Option(Box<TypeNode>),
    /// Unrecognized kind tag, kept verbatim
    Unknown(String),
}

impl TypeNode {
    /// Placeholder for an absent node; formats as the empty string
    pub fn empty() -> Self {
        TypeNode::Primitive(String::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TypeNode::Primitive(name) if name.is_empty())
    }

    /// Encode back into the tagged JSON shape accepted by the normalizer.
    pub fn to_value(&self) -> Value {
        match self {
            TypeNode::Primitive(name) => Value::String(name.clone()),
            TypeNode::PublicKey => json!({ "kind": "publicKeyTypeNode" }),
            TypeNode::Number { format, endian } => {
                let mut node = Map::new();
                node.insert("kind".into(), json!("numberTypeNode"));
                node.insert("format".into(), json!(format));
                if let Some(endian) = endian {
                    node.insert("endian".into(), json!(endian));
                }
                Value::Object(node)
            }
            TypeNode::String { encoding } => {
                json!({ "kind": "stringTypeNode", "encoding": encoding })
            }
            TypeNode::DefinedTypeLink { name } => {
                json!({ "kind": "definedTypeLinkNode", "name": name })
            }
            TypeNode::SizePrefixed(inner) => {
                json!({ "kind": "sizePrefixTypeNode", "type": inner.to_value() })
            }
            TypeNode::Array { element, length } => {
                json!({ "kind": "array", "0": element.to_value(), "1": length.to_value() })
            }
            TypeNode::Struct { fields } => json!({ "kind": "structTypeNode", "fields": fields }),
            TypeNode::Enum { variants } => {
                let variants: Vec<Value> = variants.iter().map(|v| json!({ "name": v })).collect();
                json!({ "kind": "enumTypeNode", "variants": variants })
            }
            TypeNode::Vec(inner) => json!({ "vec": inner.to_value() }),
            TypeNode::Option(inner) => json!({ "kind": "optionTypeNode", "item": inner.to_value() }),
            TypeNode::Unknown(kind) => json!({ "kind": kind }),
        }
    }
}

impl Serialize for TypeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Array length: a fixed count or a symbolic (generic / unparsed) size
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayLength {
    Fixed(u64),
    Named(String),
}

impl ArrayLength {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => ArrayLength::Named(String::new()),
            Some(Value::Number(n)) => match n.as_u64() {
                Some(len) => ArrayLength::Fixed(len),
                None => ArrayLength::Named(n.to_string()),
            },
            Some(Value::String(s)) => ArrayLength::Named(s.clone()),
            Some(other) => ArrayLength::Named(other.to_string()),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            ArrayLength::Fixed(len) => json!(len),
            ArrayLength::Named(name) => json!(name),
        }
    }
}

impl fmt::Display for ArrayLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayLength::Fixed(len) => write!(f, "{}", len),
            ArrayLength::Named(name) => f.write_str(name),
        }
    }
}

/// Entity categories that can be looked up by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Account,
    Instruction,
    Type,
    Error,
    Event,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Account => "Account",
            EntityKind::Instruction => "Instruction",
            EntityKind::Type => "Type",
            EntityKind::Error => "Error",
            EntityKind::Event => "Event",
        };
        f.write_str(label)
    }
}

impl Program {
    /// Find an instruction by name (case-insensitive)
    pub fn find_instruction(&self, name: &str) -> Option<&Instruction> {
        self.instructions
            .iter()
            .find(|ix| ix.name.eq_ignore_ascii_case(name))
    }

    /// Find an account by name (case-insensitive)
    pub fn find_account(&self, name: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|acc| acc.name.eq_ignore_ascii_case(name))
    }

    /// Find an event by name (case-insensitive)
    pub fn find_event(&self, name: &str) -> Option<&Event> {
        self.events
            .iter()
            .find(|ev| ev.name.eq_ignore_ascii_case(name))
    }

    /// Names of all entities of `kind`, in document order
    pub fn names(&self, kind: EntityKind) -> Vec<&str> {
        match kind {
            EntityKind::Account => self.accounts.iter().map(|a| a.name.as_str()).collect(),
            EntityKind::Instruction => self.instructions.iter().map(|i| i.name.as_str()).collect(),
            EntityKind::Type => self.types.iter().map(|t| t.name.as_str()).collect(),
            EntityKind::Error => self.errors.iter().map(|e| e.name.as_str()).collect(),
            EntityKind::Event => self.events.iter().map(|e| e.name.as_str()).collect(),
        }
    }

    /// Display name, falling back to the public key
    pub fn display_name(&self) -> &str {
        self.metadata
            .name
            .as_deref()
            .or(self.metadata.public_key.as_deref())
            .unwrap_or("(unnamed program)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Program {
        Program {
            instructions: vec![Instruction {
                name: "initializeMint".into(),
                docs: None,
                discriminator: None,
                accounts: vec![],
                args: vec![],
            }],
            events: vec![Event {
                name: "MintCreated".into(),
                docs: None,
                discriminator: Some(vec![1, 2, 3]),
                fields: vec![],
            }],
            ..Program::default()
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let program = sample();
        assert!(program.find_instruction("INITIALIZEMINT").is_some());
        assert!(program.find_event("mintcreated").is_some());
        assert!(program.find_account("anything").is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_public_key() {
        let mut program = sample();
        assert_eq!(program.display_name(), "(unnamed program)");

        program.metadata.public_key = Some("Count3r1111111111111111111111111111111111111".into());
        assert_eq!(
            program.display_name(),
            "Count3r1111111111111111111111111111111111111"
        );

        program.metadata.name = Some("counter".into());
        assert_eq!(program.display_name(), "counter");
    }

    #[test]
    fn test_array_length_from_value() {
        assert_eq!(ArrayLength::from_value(Some(&json!(32))), ArrayLength::Fixed(32));
        assert_eq!(
            ArrayLength::from_value(Some(&json!("N"))),
            ArrayLength::Named("N".into())
        );
        assert_eq!(ArrayLength::from_value(None).to_string(), "");
    }

    #[test]
    fn test_number_node_omits_absent_endian() {
        let node = TypeNode::Number {
            format: "u64".into(),
            endian: None,
        };
        assert_eq!(node.to_value(), json!({ "kind": "numberTypeNode", "format": "u64" }));
    }
}
